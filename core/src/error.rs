//! Error types for the directory API client.
//!
//! # Design
//! Every failure reaches the caller as one `ApiError`. Network problems stay
//! apart from service rejections: `Transport` means the request never got a
//! response, `Api` means the service answered with a non-200 status and a
//! JSON error body, and `Decode` means a body (success or error) did
//! not match the JSON shape we expected. Nothing is retried.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `DirectoryClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built or sent, or the response could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The service returned a non-200 status with a JSON error body.
    /// `code` is the HTTP status; `message` is the envelope's text.
    #[error("{code}, {message}")]
    Api { code: u16, message: String },

    /// A response body could not be parsed into the expected shape.
    #[error("can't decode response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized to JSON.
    #[error("can't encode request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status observed on the wire, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { code, .. } => Some(*code),
            ApiError::Decode { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Serialization(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Structured error body returned by the service on non-200 responses.
///
/// `code` is the service's own error code, unrelated to the HTTP status.
/// Every field is optional: any JSON object body counts as an envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(rename = "@type", default)]
    pub type_url: String,
}
