//! # Domain Types
//!
//! Types exchanged between the pages and the backend, plus the benchmark
//! sample the two benchmark pages report.
//!
//! ## Wire Shapes
//! ```text
//! POST /submit          {"name": "...", "email": "..."}
//!   ◄── 2xx / 4xx       {"status": "...", "message": "...", "data": {...}}
//!
//! GET  /api/products
//!   ◄── 200             {"products": [{"id": 1, "name": "...", "price": 35000}]}
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Products
// =============================================================================

/// A product as listed by `GET /api/products`. Read-only for the pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductRecord {
    /// Catalogue id. Missing or non-integer ids read as `None`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_id"
    )]
    pub id: Option<u64>,

    /// Display name.
    pub name: String,

    /// Price in major units, as a JSON number.
    pub price: f64,
}

impl ProductRecord {
    /// Returns the price as integer money.
    pub fn price_money(&self) -> CoreResult<Money> {
        Money::from_decimal(self.price).ok_or_else(|| CoreError::InvalidPrice {
            name: self.name.clone(),
            price: self.price,
        })
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Integer(u64),
        Other(IgnoredAny),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Integer(id) => Some(id),
        RawId::Other(_) => None,
    })
}

/// Body of `GET /api/products`.
///
/// A body without a `products` key reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

// =============================================================================
// Submissions
// =============================================================================

/// Body of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
}

/// Status field of a [`ServerMessage`].
pub const STATUS_SUCCESS: &str = "success";

/// Status field of a [`ServerMessage`] describing a failure.
pub const STATUS_ERROR: &str = "error";

/// Reply body of `POST /submit`, for both success and failure.
///
/// Every field is optional on the way in so that a reply from a different
/// server still parses; callers fall back to generic text for a missing
/// `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServerMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Echo of the accepted submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SubmissionPayload>,
}

impl ServerMessage {
    /// A success reply echoing `data`.
    pub fn success(message: impl Into<String>, data: SubmissionPayload) -> Self {
        ServerMessage {
            status: Some(STATUS_SUCCESS.to_string()),
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// A failure reply.
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage {
            status: Some(STATUS_ERROR.to_string()),
            message: Some(message.into()),
            data: None,
        }
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

/// One timed run of one strategy. Discarded after it is rendered or logged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSample {
    /// Input size the strategy ran over.
    pub size: usize,

    /// Wall-clock time in milliseconds.
    pub elapsed_ms: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_record_deserializes_without_id() {
        let product: ProductRecord =
            serde_json::from_str(r#"{"name": "Wireless mouse", "price": 800}"#).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.price_money().unwrap(), Money::from_minor(80_000));
    }

    #[test]
    fn test_product_record_ignores_foreign_ids() {
        for raw in [
            r#"{"id": "sku-1", "name": "Lamp", "price": 1200}"#,
            r#"{"id": -3, "name": "Lamp", "price": 1200}"#,
            r#"{"id": null, "name": "Lamp", "price": 1200}"#,
            r#"{"id": {"sku": 1}, "name": "Lamp", "price": 1200, "stock": 4}"#,
        ] {
            let product: ProductRecord = serde_json::from_str(raw).unwrap();
            assert_eq!(product.id, None, "{raw}");
            assert_eq!(product.name, "Lamp");
        }

        let product: ProductRecord =
            serde_json::from_str(r#"{"id": 9, "name": "Lamp", "price": 1200}"#).unwrap();
        assert_eq!(product.id, Some(9));
    }

    #[test]
    fn test_products_response_defaults_to_empty() {
        let response: ProductsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.products.is_empty());
    }

    #[test]
    fn test_server_message_tolerates_missing_fields() {
        let reply: ServerMessage = serde_json::from_str(r#"{"detail": "nope"}"#).unwrap();
        assert_eq!(reply.message, None);
        assert_eq!(reply.status, None);
    }

    #[test]
    fn test_server_message_success_shape() {
        let payload = SubmissionPayload {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
        };
        let json = serde_json::to_value(ServerMessage::success("ok", payload)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "ok");
        assert_eq!(json["data"]["email"], "ann@example.com");

        let json = serde_json::to_value(ServerMessage::error("bad")).unwrap();
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_benchmark_sample_is_camel_case() {
        let sample = BenchmarkSample {
            size: 7,
            elapsed_ms: 0.25,
        };
        let json = serde_json::to_value(sample).unwrap();
        assert_eq!(json["elapsedMs"], 0.25);
    }
}
