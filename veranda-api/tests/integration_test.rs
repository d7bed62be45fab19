use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use veranda_api::{app, AppState};
use veranda_catalog::PricingMap;

fn test_app() -> axum::Router {
    app(AppState {
        pricing: Arc::new(PricingMap::standard()),
    })
}

async fn post_json(router: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn two_panel_request() -> Value {
    json!({
        "panels": [
            {
                "product_line": "MESH_CURTAIN",
                "width_feet": 20.0,
                "width_inches": 0.0,
                "height_inches": 96.0,
                "fabric": "HEAVY_MOSQUITO",
                "color": "BLACK",
                "attachment": "TRACKING",
            },
            {
                "product_line": "VINYL_PANEL",
                "width_feet": 10.0,
                "width_inches": 0.0,
                "height_inches": 96.0,
                "series": "CLEAR_VINYL",
                "size": "STANDARD",
                "canvas": "WHITE",
                "attachment": "BINDING_ONLY",
            },
        ],
        "accessories": [
            {"accessory": "TRACK_SECTION", "quantity": 3},
        ],
        "ship_location": "DOMESTIC",
    })
}

#[tokio::test]
async fn test_quote_endpoint_prices_panels_and_accessories() {
    let (status, body) = post_json(test_app(), "/v1/quotes", two_panel_request()).await;

    assert_eq!(status, StatusCode::OK);
    // 11400 + 10000 + 3 * 1250 = 25150, middle domestic bracket ships at 4500
    assert_eq!(body["subtotal_cents"], 25_150);
    assert_eq!(body["shipping_cents"], 4_500);
    assert_eq!(body["total_cents"], 29_650);
    assert_eq!(body["display_total"], "$296.50");
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["lines"].as_array().unwrap().len(), 3);
    assert_eq!(body["lines"][0]["total_cents"], 11_400);
}

#[tokio::test]
async fn test_invalid_width_inches_names_the_field() {
    let mut request = two_panel_request();
    request["panels"][0]["width_inches"] = json!(12.0);

    let (status, body) = post_json(test_app(), "/v1/quotes", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("width_inches"));
}

#[tokio::test]
async fn test_zero_height_names_the_field() {
    let mut request = two_panel_request();
    request["panels"][1]["height_inches"] = json!(0.0);

    let (status, body) = post_json(test_app(), "/v1/quotes", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("height"));
}

#[tokio::test]
async fn test_unsupported_feature_is_rejected() {
    let mut request = two_panel_request();
    request["panels"][1]["size"] = json!("OVERSIZE");
    request["panels"][1]["has_zipper"] = json!(true);

    let (status, body) = post_json(test_app(), "/v1/quotes", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Zipper"));
}

#[tokio::test]
async fn test_empty_quote_is_a_bad_request() {
    let request = json!({
        "panels": [],
        "accessories": [],
        "ship_location": "DOMESTIC",
    });

    let (status, body) = post_json(test_app(), "/v1/quotes", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("at least one"));
}

#[tokio::test]
async fn test_cart_preview_rows_sum_to_grand_total() {
    let (status, body) = post_json(test_app(), "/v1/carts/preview", two_panel_request()).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    // two panels + one accessory + shipping
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["kind"], "SHIPPING");

    let sum: i64 = rows
        .iter()
        .map(|row| {
            row["unit_price_cents"].as_i64().unwrap() * row["quantity"].as_i64().unwrap()
        })
        .sum();
    assert_eq!(sum, 29_650);
}

#[tokio::test]
async fn test_catalog_lists_the_rate_tables() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert!(!body["mesh_rates"].as_array().unwrap().is_empty());
    assert!(!body["shipping_tiers"].as_array().unwrap().is_empty());
    // Deterministic ordering: entries are sorted by their key
    let first = &body["mesh_rates"][0];
    assert_eq!(first["fabric"], "HEAVY_MOSQUITO");
}

#[tokio::test]
async fn test_health() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
