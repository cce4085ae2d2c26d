//! Product URL validation handler.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, warn};
use serde_json::Value;

use super::super::types::{AppState, ErrorResponse};
use crate::probe::Probe;
use crate::validate::validate_products;

/// Validates `products` and returns them with rewritten URL fields.
///
/// A body that is not JSON is answered with 500 and the parse failure in
/// `details`. A request without a `products` array is rejected with 400.
/// Individual product failures never fail the request; they come back as
/// `invalid`.
pub async fn validate_handler<P>(
    State(state): State<AppState<P>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    P: Probe + Send + Sync + 'static,
{
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Failed to read validation request: {}", rejection.body_text());
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to validate product URLs".to_string(),
                    details: Some(rejection.body_text()),
                }),
            )
                .into_response();
        }
    };

    let Some(products) = body.get("products").and_then(Value::as_array).cloned() else {
        warn!("Rejected validation request without a products array");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Products array is required".to_string(),
                details: None,
            }),
        )
            .into_response();
    };

    let timeout = body
        .get("timeout_ms")
        .and_then(Value::as_u64)
        .map(Duration::from_millis)
        .unwrap_or(state.default_timeout);
    debug!(
        "Validating {} products (timeout {}ms)",
        products.len(),
        timeout.as_millis()
    );

    let validated = validate_products(state.prober.as_ref(), products, timeout).await;
    (StatusCode::OK, Json(validated)).into_response()
}
