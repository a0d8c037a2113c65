//! HTTP routes.
//!
//! ```text
//! GET  /              plain-text banner
//! GET  /api/products  {"products": [...]}        (delayed)
//! POST /submit        {"status", "message", ...} (delayed on success)
//! ```

mod products;
mod submit;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use products::list_products;
pub use submit::{is_json_content_type, submit_form};

/// Text served at `/`.
pub const BANNER: &str =
    "Backend server is running. Try GET /api/products or POST to /submit.";

/// Builds the application router with CORS and request tracing.
///
/// CORS is fully permissive: the pages may be opened from a file or from
/// another port.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/products", get(list_products))
        .route("/submit", post(submit_form))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    BANNER
}
