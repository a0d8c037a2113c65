//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  storefront-client errors (separate crate)                              │
//! │  └── ClientError      - Transport / status / parse failures             │
//! │                                                                         │
//! │  storefront-pages errors (app)                                          │
//! │  └── PageError        - Mount failures, wrapped core/client errors      │
//! │                                                                         │
//! │  Flow: ValidationError → inline field message (never propagated)        │
//! │        CoreError / ClientError → PageError → status text                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Each variant's `Display` is the user-facing message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A Unix timestamp outside the range chrono can represent.
    #[error("Timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    /// A string that does not follow `YYYY-MM-DD HH:MM:SS`.
    #[error("Cannot parse '{input}' as a timestamp: {reason}")]
    TimestampParse { input: String, reason: String },

    /// A product price that cannot be represented as money (NaN, infinite,
    /// or beyond the i64 cent range).
    #[error("Product '{name}' has an invalid price: {price}")]
    InvalidPrice { name: String, price: f64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are recovered locally by the pages and shown inline; they are never
/// propagated past the widget that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} cannot be empty.")]
    Required { field: String },

    /// The value is not a number at all.
    #[error("{field} must be a number")]
    NotANumber { field: String },

    /// The value is below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// The value has a fractional part.
    #[error("{field} must be a whole number")]
    NotInteger { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// The email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
