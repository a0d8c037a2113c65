//! # Storefront API
//!
//! HTTP backend for the storefront pages: a fixed product catalogue and a
//! form submission endpoint, both with simulated latency.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront API Server                            │
//! │                                                                         │
//! │  Browser / pages ───► HTTP (5000) ───► Router ───► Handlers             │
//! │                          │                             │                │
//! │                     CORS + Trace                       ▼                │
//! │                                                   AppState              │
//! │                                             (config + catalogue)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;

use storefront_core::ProductRecord;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use routes::build_router;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub catalog: Vec<ProductRecord>,
}

impl AppState {
    /// State serving the built-in catalogue.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            config,
            catalog: catalog::default_catalog(),
        }
    }
}
