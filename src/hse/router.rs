use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::domain::{Answer, DiagnosticItem, Dimension, DimensionSummary, Question, Rule};
use super::report::{compose_from_dataset, ComposeRequest};
use super::report::views::HseReport;
use super::scoring::{
    compute_diagnostics, split_strengths_weaknesses, summarize_dimensions, StrengthsWeaknesses,
};

/// Router exposing the diagnostic and report endpoints.
///
/// Both endpoints are pure computations over the dataset carried in the
/// request body; fetching that dataset (and retrying on backend failures) is
/// the caller's responsibility.
pub fn hse_router() -> Router {
    Router::new()
        .route("/api/v1/hse/diagnostics", post(diagnostics_handler))
        .route("/api/v1/hse/report", post(report_handler))
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsRequest {
    pub dimensions: Vec<Dimension>,
    pub rules: Vec<Rule>,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsResponse {
    pub diagnostics: Vec<DiagnosticItem>,
    pub summaries: Vec<DimensionSummary>,
    pub split: StrengthsWeaknesses,
}

pub(crate) async fn diagnostics_handler(
    Json(request): Json<DiagnosticsRequest>,
) -> Json<DiagnosticsResponse> {
    let diagnostics = compute_diagnostics(
        &request.questions,
        &request.answers,
        &request.dimensions,
        &request.rules,
    );
    let summaries = summarize_dimensions(
        &request.dimensions,
        &request.questions,
        &request.answers,
        &request.rules,
    );
    let split = split_strengths_weaknesses(summaries.clone());

    Json(DiagnosticsResponse {
        diagnostics,
        summaries,
        split,
    })
}

pub(crate) async fn report_handler(Json(request): Json<ComposeRequest>) -> Json<HseReport> {
    Json(compose_from_dataset(&request))
}
