use crate::config::Config;
use anyhow::Context;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::{body::Body, http::Request, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_request_id::{RequestId, RequestIdLayer};
use tracing::info_span;

/// Defines a common error type to use for all request handlers
mod error;

/// Contains all the routes of the application
mod routes;

/// Waits for the termination signals that trigger a graceful shutdown
mod shutdown;

pub use error::{Error, ErrorBody};

use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Config>,
}

/// Builds the complete application without binding a socket.
pub fn router(config: Config) -> Router {
    Router::<ApiContext>::new()
        .merge(routes::router())
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new().layer(RequestIdLayer).layer(
                TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "unknown".into());

                    info_span!(
                        "request",
                        id = %request_id,
                        method = %request.method(),
                        uri = %request.uri()
                    )
                }),
            ),
        )
        .with_state(ApiContext {
            config: Arc::new(config),
        })
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = SocketAddr::new(config.address, config.port);

    tracing::info!(root_version = config.root_version, "starting API");

    let app = router(config);

    let server = axum::Server::try_bind(&addr)
        .with_context(|| format!("failed to bind {addr}"))?
        .serve(app.into_make_service());

    tracing::info!(%addr, "listening");

    server
        .with_graceful_shutdown(shutdown::signal())
        .await
        .context("error running HTTP server")
}

async fn not_found_handler(_: Uri) -> impl IntoResponse {
    Error::NotFound
}
