use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use models::RootResponse;

use crate::http::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/", get(root))
}

async fn root(State(ctx): State<ApiContext>) -> Json<RootResponse> {
    Json(RootResponse::new(ctx.config.root_version))
}
