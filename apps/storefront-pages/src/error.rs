//! # Page Error Type
//!
//! Unified error type for widget handlers and CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Pages                              │
//! │                                                                         │
//! │  mount()                                                                │
//! │     └── element id not in document ──► MissingElement  (widget unusable)│
//! │                                                                         │
//! │  handler()                                                              │
//! │     ├── rule violation ──────────────► shown in the document, Ok(..)    │
//! │     ├── core failure ────────────────► Core                             │
//! │     └── request failure ─────────────► shown in the document, Ok(..)    │
//! │                                                                         │
//! │  CLI                                                                    │
//! │     └── stdin / stdout failure ──────► Io                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! User-facing failures (bad input, server errors) are rendered into the
//! document, not returned. A `PageError` means the page itself is broken.

use storefront_client::ClientError;
use storefront_core::CoreError;
use thiserror::Error;

/// Result type alias for page operations.
pub type PageResult<T> = Result<T, PageError>;

#[derive(Debug, Error)]
pub enum PageError {
    /// A required element id is absent. Fatal for the widget that needs it.
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageError {
    pub fn missing(id: &str) -> Self {
        PageError::MissingElement(id.to_string())
    }
}
