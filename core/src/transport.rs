//! The I/O seam between request building and response parsing.
//!
//! # Design
//! `DirectoryClient` never opens sockets itself. It hands an `HttpRequest`
//! to a `Transport` and gets an `HttpResponse` back. Any HTTP status is a
//! successful round-trip at this layer; only failing to get a response at
//! all is an error. `UreqTransport` is the blocking default; tests swap in
//! recording stubs.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
///
/// The agent keeps its own connection pool and is safe to share between
/// threads.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // 4xx/5xx must come back as data so the client can read the error envelope.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a preconfigured agent (timeouts, proxy, TLS roots).
    ///
    /// The agent must be built with `http_status_as_error(false)`, otherwise
    /// error envelopes surface as `ApiError::Transport`.
    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let result = match (method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&url), &headers).call(),
            (HttpMethod::Delete, None) => with_headers(self.agent.delete(&url), &headers).call(),
            (HttpMethod::Delete, Some(body)) => with_headers(self.agent.delete(&url), &headers)
                .force_send_body()
                .send(body.as_bytes()),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), &headers).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                with_headers(self.agent.patch(&url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => {
                with_headers(self.agent.patch(&url), &headers).send_empty()
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(Box::new(e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        debug!(%method, status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
