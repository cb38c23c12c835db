//! Client configuration.

use std::fmt;

/// Production endpoint of the directory API.
pub const DEFAULT_BASE_URL: &str = "https://api360.yandex.net";

/// Connection settings shared read-only by every call.
///
/// The OAuth token is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    base_url: String,
    oauth_token: String,
    org_id: i64,
}

impl Settings {
    pub fn new(oauth_token: impl Into<String>, org_id: i64) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            oauth_token: oauth_token.into(),
            org_id,
        }
    }

    /// Point the client at another host. An empty URL keeps the default.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn oauth_token(&self) -> &str {
        &self.oauth_token
    }

    pub fn org_id(&self) -> i64 {
        self.org_id
    }

    /// Value of the `Authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("OAuth {}", self.oauth_token)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("oauth_token", &"<redacted>")
            .field("org_id", &self.org_id)
            .finish()
    }
}
