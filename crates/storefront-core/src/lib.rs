//! # storefront-core: Pure Logic for the Storefront Pages
//!
//! This crate holds every rule the storefront pages apply, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Pages Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 storefront-pages (widgets)                      │    │
//! │  │   Cart ── Form ── Product List ── Clock ── Benchmarks           │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │      │
//! │  │   │   types   │  │   money   │  │ timestamp │  │ validation│  │      │
//! │  │   │  Product  │  │   Money   │  │  format   │  │  quantity │  │      │
//! │  │   │  Payload  │  │  Currency │  │  parse    │  │  form     │  │      │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │      │
//! │  │                     ┌───────────┐                              │     │
//! │  │                     │   dedup   │                              │     │
//! │  │                     └───────────┘                              │     │
//! │  │   NO I/O • NO NETWORK • NO DOCUMENT ACCESS                     │     │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (products, submissions, benchmark samples)
//! - [`money`] - Integer money and currency display
//! - [`error`] - Domain error types
//! - [`validation`] - Quantity and submission validation
//! - [`timestamp`] - Unix seconds to `YYYY-MM-DD HH:MM:SS`
//! - [`dedup`] - Order-preserving deduplication strategies
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::validation::validate_quantity_input;
//! use storefront_core::dedup::{dedup_fast, dedup_naive};
//!
//! assert_eq!(validate_quantity_input("3").unwrap(), 3);
//! assert!(validate_quantity_input("2.5").is_err());
//!
//! let sample = [1, 2, 2, 3, 4, 4, 5];
//! assert_eq!(dedup_naive(&sample), dedup_fast(&sample));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dedup;
pub mod error;
pub mod money;
pub mod timestamp;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyFormat, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Value the quantity field falls back to after invalid input or a
/// completed add-to-cart.
pub const DEFAULT_QUANTITY: u64 = 1;

/// Number of elements inserted by each DOM append strategy.
pub const DOM_APPEND_COUNT: usize = 1000;

/// The sample sequence the dedup page has always shown first.
pub const DEDUP_SAMPLE: [i64; 7] = [1, 2, 2, 3, 4, 4, 5];
