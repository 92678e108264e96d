use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::scoring::ScoreReport;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume: ResumeRecord,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// POST /api/v1/resume/score
pub async fn handle_score(
    State(state): State<AppState>,
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreReport>, AppError> {
    let Json(req) = body?;

    if let Some(jd) = &req.job_description {
        let limit = state.config.max_job_description_chars;
        if jd.chars().count() > limit {
            return Err(AppError::Validation(format!(
                "jobDescription exceeds {limit} characters"
            )));
        }
    }

    let report = state
        .scorer
        .score(&req.resume, req.job_description.as_deref());

    info!(
        overall = report.overall_score,
        content = report.content_score,
        format = report.format_score,
        relevance = report.relevance_score,
        job_match = report.job_match.as_ref().map(|m| m.score),
        "Scored resume"
    );

    Ok(Json(report))
}
