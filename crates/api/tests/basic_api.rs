//! Integration tests for the smoke-test endpoints, the listing page and
//! general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, create_product, get, send};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Smoke tests
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn plain_text_returns_hello_world(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/plain-text").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body_text(response).await, "Hello, world!");
}

#[sqlx::test]
async fn json_returns_message(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/json").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Hello, world from JSON serialization endpoint!"})
    );
}

// ---------------------------------------------------------------------------
// Fortune page
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn fortune_renders_products_as_html(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    create_product(&app, json!({"name": "Teapot", "price": "12.5"})).await;
    create_product(&app, json!({"name": "Kettle & Co"})).await;

    let response = get(&app, "/fortune").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap().clone();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let page = body_text(response).await;
    assert!(page.contains("<td>Teapot</td>"));
    assert!(page.contains("<td>Kettle &amp; Co</td>"));
}

#[sqlx::test]
async fn fortune_caps_at_one_hundred_rows(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    sqlx::query(
        "INSERT INTO product (name, description, brand, category, price, currency, stock, \
                              ean, color, size, availability, internal_id) \
         SELECT 'p' || g, '', '', '', 1, 'USD', 1, '', '', '', '', '' \
         FROM generate_series(1, 105) g",
    )
    .execute(&pool)
    .await
    .unwrap();

    let page = body_text(get(&app, "/fortune").await).await;
    assert_eq!(page.matches("<tr><td>").count(), 100);
}

// ---------------------------------------------------------------------------
// Routing and middleware
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/json").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

#[sqlx::test]
async fn cors_preflight_returns_correct_headers(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/products")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PUT"),
        "Allow-Methods should contain PUT, got: {allow_methods}"
    );
}
