//! # Storefront API Client
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit(payload)                                                        │
//! │     POST {base}/submit  Content-Type: application/json                  │
//! │        │                                                                │
//! │        ├── transport failure ─────────────► Connection / Timeout        │
//! │        ├── body is not JSON ──────────────► Parse                       │
//! │        └── any status + JSON body ────────► SubmitReply { status, .. }  │
//! │                                                                         │
//! │  fetch_products()                                                       │
//! │     GET {base}/api/products                                             │
//! │        │                                                                │
//! │        ├── transport failure ─────────────► Connection / Timeout        │
//! │        ├── non-2xx ───────────────────────► HttpStatus { status, body } │
//! │        ├── body is not JSON ──────────────► Parse                       │
//! │        └── 2xx ───────────────────────────► ProductsResponse            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `submit` parses the body before looking at the status, so a non-JSON
//! error page surfaces as [`ClientError::Parse`], not as a server message.
//! Only the reply's `message` string is read; other fields are ignored.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use storefront_core::{ProductsResponse, SubmissionPayload};
use tracing::{debug, info};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Outcome of a submission that produced a JSON reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReply {
    /// HTTP status code.
    pub status: u16,

    /// `message` field of the reply, if present.
    pub message: Option<String>,
}

impl SubmitReply {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two backend calls the pages make.
///
/// Pages depend on this trait rather than on [`StorefrontClient`] so tests
/// can substitute an in-memory implementation.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Sends a validated submission.
    async fn submit(&self, payload: &SubmissionPayload) -> ClientResult<SubmitReply>;

    /// Loads the product catalogue.
    async fn fetch_products(&self) -> ClientResult<ProductsResponse>;
}

/// reqwest-backed [`StorefrontApi`].
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: Client,
    submit_url: Url,
    products_url: Url,
}

impl StorefrontClient {
    /// Builds a client from validated configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(StorefrontClient {
            http,
            submit_url: config.submit_url()?,
            products_url: config.products_url()?,
        })
    }

    /// Client for `base_url` with default paths and no timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(&ClientConfig::with_base_url(base_url))
    }

    /// URL submissions are posted to.
    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }

    /// URL products are loaded from.
    pub fn products_url(&self) -> &Url {
        &self.products_url
    }
}

#[async_trait]
impl StorefrontApi for StorefrontClient {
    async fn submit(&self, payload: &SubmissionPayload) -> ClientResult<SubmitReply> {
        let url = self.submit_url.as_str();
        debug!(url = %url, name = %payload.name, "Posting submission");

        let response = self
            .http
            .post(self.submit_url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, url))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, url))?;

        let message = reply_message(&body)?;

        info!(status, "Submission answered");
        Ok(SubmitReply { status, message })
    }

    async fn fetch_products(&self) -> ClientResult<ProductsResponse> {
        let url = self.products_url.as_str();
        debug!(url = %url, "Fetching products");

        let response = self
            .http
            .get(self.products_url.clone())
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::http_status(status.as_u16(), body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, url))?;
        let products: ProductsResponse =
            serde_json::from_slice(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        info!(count = products.products.len(), "Products loaded");
        Ok(products)
    }
}

/// Reads the `message` string of a JSON reply body.
fn reply_message(body: &[u8]) -> ClientResult<Option<String>> {
    let reply: Value =
        serde_json::from_slice(body).map_err(|e| ClientError::Parse(e.to_string()))?;
    Ok(reply
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_reply_success_range() {
        let reply = |status| SubmitReply {
            status,
            message: None,
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(400).is_success());
        assert!(!reply(500).is_success());
    }

    #[test]
    fn test_reply_message_ignores_other_fields() {
        let body = br#"{"message": "ok", "status": 1, "data": {"id": 5}}"#;
        assert_eq!(reply_message(body).unwrap().as_deref(), Some("ok"));
    }

    #[test]
    fn test_reply_message_absent_or_not_a_string() {
        assert_eq!(reply_message(br#"{"detail": "nope"}"#).unwrap(), None);
        assert_eq!(reply_message(br#"{"message": 42}"#).unwrap(), None);
        assert_eq!(reply_message(b"[1, 2]").unwrap(), None);
    }

    #[test]
    fn test_reply_message_requires_json() {
        assert!(matches!(
            reply_message(b"Internal Server Error"),
            Err(ClientError::Parse(_))
        ));
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        assert!(StorefrontClient::with_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_client_urls() {
        let client = StorefrontClient::with_base_url("http://127.0.0.1:5000").unwrap();
        assert_eq!(client.submit_url().path(), "/submit");
        assert_eq!(client.products_url().path(), "/api/products");
    }
}
