//! # Page Configuration
//!
//! Settings read once at startup and never changed.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)

use serde::{Deserialize, Serialize};
use storefront_core::{CurrencyFormat, Money, DOM_APPEND_COUNT};
use tracing::warn;

/// Upper bound (inclusive) of generated dedup values.
pub const DEDUP_MAX_VALUE: i64 = 5000;

/// Page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// How product prices are shown.
    pub currency: CurrencyFormat,

    /// Elements inserted by each DOM append run.
    pub dom_append_count: usize,

    /// Input sizes of the dedup sweep, in run order.
    pub dedup_sizes: Vec<usize>,

    /// Generated dedup values fall in `1..=dedup_max_value`.
    pub dedup_max_value: i64,

    /// Seed of the dedup input generator.
    pub dedup_seed: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            currency: CurrencyFormat::default(),
            dom_append_count: DOM_APPEND_COUNT,
            dedup_sizes: vec![100, 1_000, 10_000, 50_000, 100_000],
            dedup_max_value: DEDUP_MAX_VALUE,
            dedup_seed: 9,
        }
    }
}

impl PageConfig {
    /// Creates a new PageConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Price prefix, e.g. `"$"`
    /// - `STOREFRONT_CURRENCY_DECIMALS`: 0..=2
    /// - `STOREFRONT_DOM_COUNT`: Elements per DOM append run
    /// - `STOREFRONT_DEDUP_SIZES`: Comma-separated sizes, e.g. `"100,5000"`
    /// - `STOREFRONT_DEDUP_SEED`: Generator seed
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = PageConfig::default();

        if let Ok(symbol) = std::env::var("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency.symbol = symbol;
        }

        if let Some(decimals) = parse_env::<u8>("STOREFRONT_CURRENCY_DECIMALS") {
            config.currency.decimals = decimals.min(2);
        }

        if let Some(count) = parse_env::<usize>("STOREFRONT_DOM_COUNT") {
            config.dom_append_count = count;
        }

        if let Ok(raw) = std::env::var("STOREFRONT_DEDUP_SIZES") {
            match parse_sizes(&raw) {
                Some(sizes) => config.dedup_sizes = sizes,
                None => warn!(value = %raw, "Ignoring invalid STOREFRONT_DEDUP_SIZES"),
            }
        }

        if let Some(seed) = parse_env::<u64>("STOREFRONT_DEDUP_SEED") {
            config.dedup_seed = seed;
        }

        config
    }

    /// Formats a price for the product list.
    pub fn format_price(&self, amount: Money) -> String {
        self.currency.format(amount)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring invalid environment value");
            None
        }
    }
}

/// Parses `"100, 1000,5000"`. Empty lists are rejected.
pub fn parse_sizes(raw: &str) -> Option<Vec<usize>> {
    let sizes: Vec<usize> = raw
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;
    (!sizes.is_empty()).then_some(sizes)
}
