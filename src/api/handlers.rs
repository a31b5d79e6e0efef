use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::ml::ModelMetadata;
use crate::models::Assessment;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Body of `POST /analyze`
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Absent and null are treated like an empty string
    #[serde(default)]
    pub text: Option<String>,
}

/// Either a full assessment or an in-band rejection.
///
/// Rejections keep status 200 so the web form can show the message inline.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyzeReply {
    Assessment(Box<Assessment>),
    Rejected { error: String },
}

/// Analyze a situation report
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeReply>> {
    let text = request.text.unwrap_or_default();

    match state.engine.analyze(&text) {
        Ok(assessment) => Ok(Json(AnalyzeReply::Assessment(Box::new(assessment)))),
        Err(AppError::Validation(message)) => {
            info!(reason = %message, "Analysis request rejected");
            metrics::record_rejection();
            Ok(Json(AnalyzeReply::Rejected { error: message }))
        }
        Err(e) => Err(e),
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: if state.engine.is_ready() {
            "healthy"
        } else {
            "degraded"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        models_trained: state.engine.is_ready(),
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub models_trained: bool,
}

/// Describe the trained statistical models
pub async fn list_models(State(state): State<AppState>) -> Result<Json<ModelsResponse>> {
    Ok(Json(ModelsResponse {
        models: state.engine.model_metadata(),
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelMetadata>,
}

/// Prometheus scrape endpoint
pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}
