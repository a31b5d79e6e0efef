//! Common test utilities
//!
//! Shared trained engine, router construction and helpers for reading
//! responses and Prometheus output.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use disaster_triage::{
    api::{build_router, AppState},
    config::AnalysisConfig,
    AnalysisEngine,
};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Training is deterministic, so one engine serves every test in a binary
pub static ENGINE: Lazy<Arc<AnalysisEngine>> = Lazy::new(|| {
    Arc::new(AnalysisEngine::train(&AnalysisConfig::default()).expect("Failed to train engine"))
});

pub fn engine() -> &'static AnalysisEngine {
    &ENGINE
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Build the full router over the shared engine
pub fn test_app() -> Router {
    build_router(
        AppState::new(ENGINE.clone()),
        &static_dir(),
        Duration::from_secs(30),
    )
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Check if a metric exists in Prometheus output
pub fn metric_exists(output: &str, metric_name: &str) -> bool {
    output.lines().any(|line| {
        line.starts_with(&format!("# HELP {}", metric_name))
            || line.starts_with(&format!("# TYPE {}", metric_name))
            || line.starts_with(metric_name)
    })
}

/// Extract metric value from a Prometheus output line
/// Example: `metric_name{label1="value1"} 42.5` -> Some(42.5)
pub fn extract_metric_value(line: &str) -> Option<f64> {
    line.split_whitespace().last()?.parse::<f64>().ok()
}

/// Value of the first sample line that starts with `prefix`
pub fn sample_value(output: &str, prefix: &str) -> Option<f64> {
    output
        .lines()
        .find(|line| line.starts_with(prefix))
        .and_then(extract_metric_value)
}
