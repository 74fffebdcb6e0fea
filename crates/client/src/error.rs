//! Client error types.

use thiserror::Error;

/// Errors that can occur when calling the Shopify REST Admin API.
///
/// Failures are passed through as-is: the client never retries or
/// reinterprets them.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success status code.
    #[error("Shopify returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, usually a JSON `errors` object.
        body: String,
    },

    /// Response body did not match the expected envelope.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Resource path could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A resource that must carry an ID (e.g. for update) has none.
    #[error("{0} has no id")]
    MissingId(&'static str),

    /// The HTTP client could not be constructed.
    #[error("Client build error: {0}")]
    Build(String),
}

impl ShopifyError {
    /// HTTP status code, if Shopify answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
