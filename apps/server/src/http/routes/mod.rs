mod health_check;
mod root;

use axum::Router;

use super::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .merge(root::router())
        .merge(health_check::router())
}
