//! # Client Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     STOREFRONT_API_URL=http://127.0.0.1:5000                            │
//! │     STOREFRONT_TIMEOUT_SECS=10                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     ~/.config/storefront/client.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     http://127.0.0.1:5000, no timeouts                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! base_url = "http://127.0.0.1:5000"
//! submit_path = "/submit"
//! products_path = "/api/products"
//! # timeout_secs = 10
//! ```

use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Where the backend listens by default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_submit_path() -> String {
    "/submit".to_string()
}

fn default_products_path() -> String {
    "/api/products".to_string()
}

/// Settings for [`crate::StorefrontClient`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the submission endpoint.
    #[serde(default = "default_submit_path")]
    pub submit_path: String,

    /// Path of the product listing endpoint.
    #[serde(default = "default_products_path")]
    pub products_path: String,

    /// Whole-request timeout. `None` leaves requests unbounded.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Connect timeout. `None` uses the OS default.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
            submit_path: default_submit_path(),
            products_path: default_products_path(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with every other field defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (client.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let base = Url::parse(&self.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "Base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Full URL of the submission endpoint.
    pub fn submit_url(&self) -> ClientResult<Url> {
        Ok(Url::parse(&self.base_url)?.join(&self.submit_path)?)
    }

    /// Full URL of the product listing endpoint.
    pub fn products_url(&self) -> ClientResult<Url> {
        Ok(Url::parse(&self.base_url)?.join(&self.products_path)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("STOREFRONT_API_URL") {
            debug!(url = %url, "Overriding base URL from environment");
            self.base_url = url;
        }

        if let Ok(secs) = std::env::var("STOREFRONT_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.timeout_secs = Some(s),
                Err(_) => warn!(value = %secs, "Ignoring invalid STOREFRONT_TIMEOUT_SECS"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("client.toml"))
    }
}
