//! Request handler tests driven through the router with `tower::ServiceExt`.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use helpers::{Reply, ScriptedProber};
use product_links::error_handling::{ErrorType, ProcessingStats};
use product_links::server::{router, AppState};
use product_links::build_search_url;

fn state(prober: ScriptedProber) -> AppState<ScriptedProber> {
    AppState::new(
        Arc::new(prober),
        Arc::new(ProcessingStats::new()),
        Duration::from_millis(200),
    )
}

async fn post_json(state: AppState<ScriptedProber>, body: Value) -> (StatusCode, Value) {
    post_raw(state, body.to_string(), Some("application/json")).await
}

async fn post_raw(
    state: AppState<ScriptedProber>,
    body: String,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/validate-product-urls");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).expect("request");

    let response = router(state).oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, serde_json::from_slice(&bytes).expect("JSON body"))
}

#[tokio::test]
async fn test_missing_products_is_bad_request() {
    let (status, body) = post_json(state(ScriptedProber::new()), json!({ "items": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Products array is required" }));
}

#[tokio::test]
async fn test_unparsable_body_is_server_error() {
    let app_state = state(ScriptedProber::new());
    let prober = Arc::clone(&app_state.prober);
    let (status, body) =
        post_raw(app_state, "not json".to_string(), Some("application/json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to validate product URLs");
    assert!(body["details"].as_str().is_some_and(|d| !d.is_empty()));
    assert!(prober.calls().is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_server_error() {
    let (status, body) = post_raw(
        state(ScriptedProber::new()),
        json!({ "products": [] }).to_string(),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to validate product URLs");
}

#[tokio::test]
async fn test_non_array_products_is_bad_request() {
    let (status, _) =
        post_json(state(ScriptedProber::new()), json!({ "products": { "a": 1 } })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_products_are_merged_with_results() {
    let live = "https://www.amazon.com/dp/B000000001";
    let malformed = "https://aliexpress.com/some/random/page";
    let search = build_search_url("aliexpress", "wireless earbuds");
    let prober = ScriptedProber::new()
        .reply(live, Reply::Status(200))
        .reply(search.clone(), Reply::Status(200));

    let (status, body) = post_json(
        state(prober),
        json!({
            "products": [
                {
                    "id": "a1",
                    "product_url": live,
                    "platform": "Amazon",
                    "product_name": "lamp",
                    "price": 12.5
                },
                {
                    "id": "b2",
                    "product_url": malformed,
                    "platform": "AliExpress",
                    "product_name": "wireless earbuds"
                },
                {
                    "id": "c3",
                    "product_url": "https://www.ebay.com/itm/9",
                    "platform": "eBay",
                    "product_name": "hub"
                }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["summary"],
        json!({ "total": 3, "valid": 1, "replaced": 1, "invalid": 1 })
    );

    let products = body["products"].as_array().expect("products array");
    assert_eq!(products[0]["id"], "a1");
    assert_eq!(products[0]["price"], 12.5);
    assert_eq!(products[0]["product_url"], live);
    assert_eq!(products[0]["url_status"], "valid");
    assert!(products[0].get("original_url").is_none());

    assert_eq!(products[1]["product_url"], search.as_str());
    assert_eq!(products[1]["url_status"], "replaced");
    assert_eq!(products[1]["original_url"], malformed);

    assert_eq!(products[2]["url_status"], "invalid");
    assert_eq!(products[2]["product_url"], "https://www.ebay.com/itm/9");

    for product in products {
        let stamp = product["last_validated"].as_str().expect("timestamp");
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok(), "{stamp}");
    }
}

#[tokio::test]
async fn test_request_timeout_overrides_default() {
    let url = "https://www.ebay.com/itm/1";
    let prober = ScriptedProber::new().reply(url, Reply::Hang);

    let start = std::time::Instant::now();
    let (status, body) = post_json(
        state(prober),
        json!({
            "timeout_ms": 20,
            "products": [{ "product_url": url, "platform": "ebay", "product_name": "hub" }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(start.elapsed() < Duration::from_millis(200));
    assert_eq!(body["products"][0]["url_status"], "invalid");
}

#[tokio::test]
async fn test_empty_products() {
    let (status, body) = post_json(state(ScriptedProber::new()), json!({ "products": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"], json!([]));
    assert_eq!(body["summary"]["total"], 0);
}

#[tokio::test]
async fn test_status_reports_probe_counters() {
    let state = state(ScriptedProber::new());
    state.stats.increment_probes();
    state.stats.increment_probes();
    state.stats.increment_error(ErrorType::HttpRequestTimeoutError);

    let request = Request::builder()
        .uri("/status")
        .body(Body::empty())
        .expect("request");
    let response = router(state).oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("JSON body");
    assert_eq!(body["probes"], 2);
    assert_eq!(body["errors"]["total"], 1);
    assert_eq!(
        body["errors"]["by_type"][ErrorType::HttpRequestTimeoutError.as_str()],
        1
    );
    assert_eq!(body["info"]["total"], 0);
}
