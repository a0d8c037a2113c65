//! # storefront-client: HTTP Client for the Storefront Backend
//!
//! ## Modules
//! - [`client`] - [`StorefrontApi`] trait and the reqwest implementation
//! - [`config`] - Base URL, paths and optional timeouts (TOML + env)
//! - [`error`] - [`ClientError`]
//!
//! ## Example
//! ```rust,no_run
//! use storefront_client::{StorefrontApi, StorefrontClient};
//!
//! # async fn demo() -> storefront_client::ClientResult<()> {
//! let client = StorefrontClient::with_base_url("http://127.0.0.1:5000")?;
//! let products = client.fetch_products().await?;
//! println!("{} products", products.products.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{StorefrontApi, StorefrontClient, SubmitReply};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult, UNKNOWN_ERROR};
