//! Storefront API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Storefront API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Simulated latency of `GET /api/products`
    pub products_delay_ms: u64,

    /// Simulated processing time of an accepted `POST /submit`
    pub submit_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            products_delay_ms: 1000,
            submit_delay_ms: 500,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = ApiConfig {
            host: env::var("STOREFRONT_HOST").unwrap_or(defaults.host),
            port: env_or("STOREFRONT_PORT", defaults.port)?,
            products_delay_ms: env_or("STOREFRONT_PRODUCTS_DELAY_MS", defaults.products_delay_ms)?,
            submit_delay_ms: env_or("STOREFRONT_SUBMIT_DELAY_MS", defaults.submit_delay_ms)?,
        };

        if config.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("STOREFRONT_HOST".to_string()));
        }

        Ok(config)
    }

    /// Defaults with both simulated delays removed.
    pub fn without_delays() -> Self {
        ApiConfig {
            products_delay_ms: 0,
            submit_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Returns the address to bind, `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn products_delay(&self) -> Duration {
        Duration::from_millis(self.products_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
