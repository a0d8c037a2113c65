use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;
use storefront_core::{ServerMessage, SubmissionPayload};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// Message returned with an accepted submission.
pub const SUBMIT_OK_MESSAGE: &str = "Data received successfully";

/// `POST /submit`: checks the body and echoes the accepted fields.
///
/// ## Checks, in order
/// 1. `Content-Type` is JSON, else "Request must be JSON"
/// 2. Body parses as JSON
/// 3. `name` and `email` are non-empty strings
/// 4. `email` contains both `@` and `.`
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ServerMessage>, ApiError> {
    debug!(bytes = body.len(), "Submission received");

    if !is_json_content_type(&headers) {
        return Err(ApiError::NotJson);
    }

    let value: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedJson(e.to_string()))?;

    let (Some(name), Some(email)) = (text_field(&value, "name"), text_field(&value, "email"))
    else {
        return Err(ApiError::MissingFields);
    };

    if !email.contains('@') || !email.contains('.') {
        return Err(ApiError::InvalidEmail);
    }

    info!(name = %name, email = %email, "Accepted submission");

    let delay = state.config.submit_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Ok(Json(ServerMessage::success(
        SUBMIT_OK_MESSAGE,
        SubmissionPayload { name, email },
    )))
}

/// True for `application/json` and `application/*+json`, ignoring parameters.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// A field counts as present only when it is a non-empty string.
fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
