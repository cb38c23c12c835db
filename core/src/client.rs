//! Authenticated request helpers shared by every resource operation.
//!
//! # Design
//! `DirectoryClient` holds the immutable `Settings` and a `Transport`, and
//! carries no mutable state between calls. Each resource method only picks a
//! path, an optional body and a response type, then delegates to `do_get` or
//! `do_mutate`. Those two helpers are split further into pure halves,
//! `build_*` for the request and `check_status` / `parse_response` for the
//! answer, so hosts that do their own I/O can drive the same logic.
//! `do_get_status` / `do_mutate_status` stop after the status check for calls
//! whose success body carries nothing the caller needs.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::Settings;
use crate::error::{ApiError, ErrorEnvelope};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Placeholder body for mutations that send nothing (DELETE).
pub(crate) const NO_BODY: Option<&()> = None;

/// Ordered, percent-encoded query string parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `key=value&...` without the leading `?`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-encode one path segment (user IDs, aliases).
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Synchronous client for the organization directory API.
///
/// Cheap to share: `&DirectoryClient` can be used from several threads at
/// once as long as the transport allows it (`UreqTransport` does).
#[derive(Debug, Clone)]
pub struct DirectoryClient<T = UreqTransport> {
    settings: Settings,
    transport: T,
}

impl DirectoryClient<UreqTransport> {
    pub fn new(settings: Settings) -> Self {
        Self::with_transport(settings, UreqTransport::new())
    }
}

impl<T: Transport> DirectoryClient<T> {
    pub fn with_transport(settings: Settings, transport: T) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// `/directory/v1/org/{orgId}/{resource}`
    pub(crate) fn org_path(&self, resource: &str) -> String {
        format!("/directory/v1/org/{}/{resource}", self.settings.org_id())
    }

    fn url(&self, path: &str, query: &Query) -> String {
        if query.is_empty() {
            format!("{}{path}", self.settings.base_url())
        } else {
            format!("{}{path}?{}", self.settings.base_url(), query.encode())
        }
    }

    /// Authenticated GET without a body.
    pub fn build_get(&self, path: &str, query: &Query) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url(path, query),
            headers: vec![("Authorization".to_string(), self.settings.authorization())],
            body: None,
        }
    }

    /// Authenticated request with an optional JSON body.
    ///
    /// `Content-Type: application/json` is set even when `body` is `None`.
    pub fn build_mutate<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<HttpRequest, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method,
            url: self.url(path, query),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), self.settings.authorization()),
            ],
            body,
        })
    }

    /// Run the request and apply the status convention. The body is left
    /// undecoded.
    fn send(&self, request: HttpRequest) -> Result<(u16, HttpResponse), ApiError> {
        let response = self.transport.execute(request)?;
        let status = check_status(&response)?;
        Ok((status, response))
    }

    fn send_get(&self, path: &str, query: &Query) -> Result<(u16, HttpResponse), ApiError> {
        let request = self.build_get(path, query);
        debug!(url = %request.url, "sending request");
        self.send(request)
    }

    fn send_mutate<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<(u16, HttpResponse), ApiError> {
        let request = self.build_mutate(method, path, query, body)?;
        debug!(url = %request.url, has_body = request.body.is_some(), "sending request");
        self.send(request)
    }

    /// Send an authenticated GET and decode the 200 body into `R`.
    #[instrument(level = "debug", skip(self, query))]
    pub fn do_get<R: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<R, ApiError> {
        let (status, response) = self.send_get(path, query)?;
        decode_body(status, &response.body)
    }

    /// Like `do_get`, but the 200 body is not decoded. Returns the status.
    #[instrument(level = "debug", skip(self, query))]
    pub fn do_get_status(&self, path: &str, query: &Query) -> Result<u16, ApiError> {
        self.send_get(path, query).map(|(status, _)| status)
    }

    /// Send an authenticated POST/PATCH/DELETE and decode the 200 body into `R`.
    #[instrument(level = "debug", skip(self, query, body))]
    pub fn do_mutate<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        let (status, response) = self.send_mutate(method, path, query, body)?;
        decode_body(status, &response.body)
    }

    /// Like `do_mutate`, but the 200 body is not decoded. Returns the status.
    #[instrument(level = "debug", skip(self, query, body))]
    pub fn do_mutate_status<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<u16, ApiError> {
        self.send_mutate(method, path, query, body).map(|(status, _)| status)
    }
}

/// Apply the status convention without decoding a success body.
///
/// 200 is the only success. Any other status is read as an `ErrorEnvelope`:
/// a JSON object becomes `ApiError::Api`, a body that is not JSON
/// `ApiError::Decode`.
pub fn check_status(response: &HttpResponse) -> Result<u16, ApiError> {
    let status = response.status;
    if status == 200 {
        return Ok(status);
    }
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => {
            warn!(status, code = envelope.code, message = %envelope.message, "API error");
            Err(ApiError::Api {
                code: status,
                message: envelope.message,
            })
        }
        Err(source) => Err(ApiError::Decode { status, source }),
    }
}

/// `check_status`, then decode the body into `R`.
pub fn parse_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    let status = check_status(&response)?;
    decode_body(status, &response.body)
}

fn decode_body<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { status, source })
}
