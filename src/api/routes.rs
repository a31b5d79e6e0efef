use crate::api::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    services::ServeFile,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
///
/// `static_dir` must contain `index.html`, served at `/`.
pub fn build_router(state: AppState, static_dir: &Path, request_timeout: Duration) -> Router {
    Router::new()
        // Web form
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        // Analysis
        .route("/analyze", post(handlers::analyze))
        // Health and introspection
        .route("/health", get(handlers::health_check))
        .route("/v1/models", get(handlers::list_models))
        .route("/metrics", get(handlers::metrics))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
}
