//! # Client Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐  │
//! │  │  Configuration  │  │   Transport     │  │     Response            │  │
//! │  │                 │  │                 │  │                         │  │
//! │  │  InvalidConfig  │  │  Connection     │  │  HttpStatus             │  │
//! │  │  InvalidUrl     │  │  Timeout        │  │  Parse                  │  │
//! │  │  ConfigLoad     │  │  Request        │  │                         │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is retried; each error ends the current user action.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Text used when a failed response has no body to show.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Client error type covering configuration, transport and response failures.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Base URL cannot be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The server could not be reached.
    #[error("Cannot connect to {0}")]
    Connection(String),

    /// The request timed out (only when a timeout is configured).
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// Any other failure while sending or reading the request.
    #[error("Request failed: {0}")]
    Request(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}. message: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body is not the JSON we expected.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Builds an [`ClientError::HttpStatus`], falling back to
    /// [`UNKNOWN_ERROR`] for an empty body.
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let body = if body.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            body
        };
        ClientError::HttpStatus { status, body }
    }

    /// Classifies a reqwest failure for the given URL.
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_connect() {
            ClientError::Connection(url.to_string())
        } else if err.is_timeout() {
            ClientError::Timeout(url.to_string())
        } else if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Request(err.to_string())
        }
    }

    /// Returns true for failures where no usable HTTP response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Connection(_) | ClientError::Timeout(_) | ClientError::Request(_)
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}
