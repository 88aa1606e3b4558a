//! Axum route handlers for job analysis.

use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::validation::{JobPosting, JobValidation};
use crate::models::job::Job;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub job: Job,
    pub validation: JobValidation,
    pub is_valid: bool,
    pub checklist: String,
}

/// Rejects empty postings, then validates and interprets.
pub(crate) fn prepare_job(posting: JobPosting) -> Result<(Job, JobValidation), AppError> {
    if posting.title.trim().is_empty() && posting.description.trim().is_empty() {
        return Err(AppError::Validation(
            "title and description cannot both be empty".to_string(),
        ));
    }
    Ok(Job::from_posting(posting))
}

/// POST /api/v1/jobs/analyze
///
/// Returns the interpreted job plus the scrape-quality checklist.
/// Useful for previewing extraction before matching.
pub async fn handle_analyze(
    Json(posting): Json<JobPosting>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (job, validation) = prepare_job(posting)?;

    Ok(Json(AnalyzeResponse {
        job,
        is_valid: validation.is_valid(),
        checklist: validation.checklist(),
        validation,
    }))
}
