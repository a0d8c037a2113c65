use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use storefront_core::ProductsResponse;
use tracing::{debug, info};

use crate::AppState;

/// `GET /api/products`: the whole catalogue after the configured delay.
pub async fn list_products(State(state): State<Arc<AppState>>) -> Json<ProductsResponse> {
    let delay = state.config.products_delay();
    debug!(delay_ms = delay.as_millis() as u64, "Listing products");

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    info!(count = state.catalog.len(), "Products served");
    Json(ProductsResponse {
        products: state.catalog.clone(),
    })
}
