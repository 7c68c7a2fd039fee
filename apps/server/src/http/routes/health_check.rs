use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use models::HealthResponse;

use crate::http::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/health", get(health))
}

/// Liveness probe for the container platform.
///
/// The status is spelled out rather than left to the framework default.
async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}
