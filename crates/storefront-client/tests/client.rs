//! Client tests against throwaway axum servers on ephemeral ports.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use storefront_client::{ClientError, StorefrontApi, StorefrontClient};
use storefront_core::SubmissionPayload;
use tokio::net::TcpListener;

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn payload() -> SubmissionPayload {
    SubmissionPayload {
        name: "Ann".to_string(),
        email: "a@b.co".to_string(),
    }
}

#[tokio::test]
async fn submit_success_returns_server_message() {
    let app = Router::new().route(
        "/submit",
        post(|Json(body): Json<SubmissionPayload>| async move {
            Json(json!({
                "status": "success",
                "message": "Data received successfully",
                "data": body,
            }))
        }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let reply = client.submit(&payload()).await.unwrap();
    assert_eq!(reply.status, 200);
    assert!(reply.is_success());
    assert_eq!(reply.message.as_deref(), Some("Data received successfully"));
}

#[tokio::test]
async fn submit_rejection_keeps_status_and_message() {
    let app = Router::new().route(
        "/submit",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"status": "error", "message": "Email format is invalid"})),
            )
        }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let reply = client.submit(&payload()).await.unwrap();
    assert_eq!(reply.status, 400);
    assert!(!reply.is_success());
    assert_eq!(reply.message.as_deref(), Some("Email format is invalid"));
}

#[tokio::test]
async fn submit_rejection_without_message() {
    let app = Router::new().route(
        "/submit",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"status": "error"}))) }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let reply = client.submit(&payload()).await.unwrap();
    assert_eq!(reply.status, 400);
    assert_eq!(reply.message, None);
}

#[tokio::test]
async fn submit_non_json_body_is_parse_error() {
    let app = Router::new().route(
        "/submit",
        post(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let err = client.submit(&payload()).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn fetch_products_parses_list() {
    let app = Router::new().route(
        "/api/products",
        get(|| async {
            Json(json!({"products": [
                {"id": 1, "name": "Laptop", "price": 35000},
                {"id": 2, "name": "Mouse", "price": 800.5},
            ]}))
        }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let response = client.fetch_products().await.unwrap();
    assert_eq!(response.products.len(), 2);
    assert_eq!(response.products[0].name, "Laptop");
    assert_eq!(response.products[1].price, 800.5);
}

#[tokio::test]
async fn submit_success_with_unfamiliar_data_still_succeeds() {
    let app = Router::new().route(
        "/submit",
        post(|| async { Json(json!({"message": "ok", "data": {"id": 5}, "status": 1})) }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let reply = client.submit(&payload()).await.unwrap();
    assert!(reply.is_success());
    assert_eq!(reply.message.as_deref(), Some("ok"));
}

#[tokio::test]
async fn fetch_products_tolerates_foreign_ids_and_extra_fields() {
    let app = Router::new().route(
        "/api/products",
        get(|| async {
            Json(json!({"products": [
                {"id": "sku-1", "name": "Laptop", "price": 35000, "stock": 3},
                {"name": "Mouse", "price": 800},
                {"id": 7, "name": "Monitor", "price": 7000},
            ]}))
        }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let response = client.fetch_products().await.unwrap();
    let ids: Vec<_> = response.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![None, None, Some(7)]);
    assert_eq!(response.products[0].name, "Laptop");
}

#[tokio::test]
async fn fetch_products_missing_field_is_empty() {
    let app = Router::new().route("/api/products", get(|| async { Json(json!({})) }));
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let response = client.fetch_products().await.unwrap();
    assert!(response.products.is_empty());
}

#[tokio::test]
async fn fetch_products_server_error_carries_body() {
    let app = Router::new().route(
        "/api/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let err = client.fetch_products().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500. message: db down");
}

#[tokio::test]
async fn fetch_products_server_error_empty_body() {
    let app = Router::new().route(
        "/api/products",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let client = StorefrontClient::with_base_url(spawn(app).await).unwrap();

    let err = client.fetch_products().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "HTTP error! status: 503. message: Unknown error"
    );
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = StorefrontClient::with_base_url(format!("http://{}", addr)).unwrap();

    let err = client.fetch_products().await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");

    let err = client.submit(&payload()).await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}
