use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::RawQuery;
use axum::http::Request;
use axum::routing::{get, post};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;
use crate::routes::api_routes;

/// Start a stand-in ERP API on an ephemeral port and return its base URL.
async fn spawn_upstream() -> String {
    let upstream = Router::new()
        .route(
            "/products",
            get(|RawQuery(query): RawQuery, headers: HeaderMap| async move {
                let auth = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()).unwrap_or("").to_owned();
                axum::Json(serde_json::json!({ "query": query, "auth": auth }))
            }),
        )
        .route("/sales-orders", post(|body: String| async move { (StatusCode::CREATED, body) }))
        .route(
            "/missing",
            get(|| async {
                (StatusCode::NOT_FOUND, axum::Json(serde_json::json!({ "status": 404, "message": "Product not found" })))
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "late"
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

fn router(upstream: &str, timeout: Duration) -> Router {
    let config = ServerConfig { port: 0, upstream: upstream.to_owned(), proxy_timeout: timeout };
    api_routes(AppState::new(&config).unwrap())
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_strips_api_prefix_and_keeps_query() {
    let uri: Uri = "/api/products?page=2&size=20".parse().unwrap();
    assert_eq!(upstream_url("http://erp:8080/api", &uri), "http://erp:8080/api/products?page=2&size=20");
}

#[test]
fn upstream_url_without_query() {
    let uri: Uri = "/api/sales-orders/7/ship".parse().unwrap();
    assert_eq!(upstream_url("http://erp/api", &uri), "http://erp/api/sales-orders/7/ship");
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn get_forwards_query_and_authorization() {
    let upstream = spawn_upstream().await;
    let response = router(&upstream, Duration::from_secs(5))
        .oneshot(
            Request::builder()
                .uri("/api/products?search=bolt&page=0")
                .header(header::AUTHORIZATION, "Bearer abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    let body = body_json(response).await;
    assert_eq!(body["query"], "search=bolt&page=0");
    assert_eq!(body["auth"], "Bearer abc");
}

#[tokio::test]
async fn post_body_and_status_pass_through() {
    let upstream = spawn_upstream().await;
    let response = router(&upstream, Duration::from_secs(5))
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/sales-orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"customerId":1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], br#"{"customerId":1}"#);
}

#[tokio::test]
async fn upstream_errors_are_returned_verbatim() {
    let upstream = spawn_upstream().await;
    let response = router(&upstream, Duration::from_secs(5))
        .oneshot(Request::builder().uri("/api/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Product not found");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Bind then drop so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = router(&format!("http://{addr}"), Duration::from_secs(5))
        .oneshot(Request::builder().uri("/api/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["status"], 502);
    assert_eq!(body["errorCode"], "UPSTREAM_UNAVAILABLE");
    assert_eq!(body["path"], "/api/products");
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let upstream = spawn_upstream().await;
    let response = router(&upstream, Duration::from_millis(100))
        .oneshot(Request::builder().uri("/api/slow").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body_json(response).await["errorCode"], "UPSTREAM_TIMEOUT");
}

#[tokio::test]
async fn healthz_is_ok_without_upstream() {
    let response = router("http://127.0.0.1:9", Duration::from_secs(1))
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
