//! Error types for the Storefront API.
//!
//! Every error is answered as a JSON [`ServerMessage`] with `status: "error"`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use storefront_core::ServerMessage;
use tracing::warn;

/// Storefront API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request must be JSON")]
    NotJson,

    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),

    #[error("Name and email are required")]
    MissingFields,

    #[error("Email format is invalid")]
    InvalidEmail,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotJson
            | ApiError::MalformedJson(_)
            | ApiError::MissingFields
            | ApiError::InvalidEmail => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(status = status.as_u16(), error = %self, "Request rejected");
        (status, Json(ServerMessage::error(self.to_string()))).into_response()
    }
}
