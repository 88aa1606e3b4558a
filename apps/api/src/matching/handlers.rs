//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assembly::resume::build_resume;
use crate::errors::AppError;
use crate::extraction::handlers::prepare_job;
use crate::extraction::validation::{JobPosting, JobValidation};
use crate::models::job::Job;
use crate::models::matching::MatchResult;
use crate::models::resume::ResumeOutput;
use crate::state::AppState;
use crate::tailoring::force_full_match;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub job: Job,
    pub validation: JobValidation,
    pub result: MatchResult,
    pub coverage_report: String,
    pub should_proceed: bool,
}

impl MatchResponse {
    fn new(job: Job, validation: JobValidation, result: MatchResult) -> Self {
        Self {
            coverage_report: result.coverage_report(),
            should_proceed: result.should_proceed(),
            job,
            validation,
            result,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    #[serde(flatten)]
    pub posting: JobPosting,
    /// Build the résumé from a forced 100% match instead of the regular one.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub result: MatchResult,
    pub resume: ResumeOutput,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn run_forced(state: &AppState, job: &Job) -> Result<MatchResult, AppError> {
    let result = force_full_match(
        &state.matcher,
        &state.profile,
        job,
        state.generator.as_deref(),
    )
    .await?;
    Ok(result)
}

/// POST /api/v1/match
///
/// Interprets the posting and matches it against the loaded profile.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<MatchResponse>, AppError> {
    let (job, validation) = prepare_job(posting)?;
    let result = state.matcher.match_job(&state.profile, &job)?;

    Ok(Json(MatchResponse::new(job, validation, result)))
}

/// POST /api/v1/match/force
///
/// Forced 100% match. Rewrites bullets and summary when an LLM key is configured.
pub async fn handle_force_match(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<MatchResponse>, AppError> {
    let (job, validation) = prepare_job(posting)?;
    let result = run_forced(&state, &job).await?;

    Ok(Json(MatchResponse::new(job, validation, result)))
}

/// POST /api/v1/resume
///
/// Match plus the fully resolved résumé structure for the renderer.
pub async fn handle_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let (job, _) = prepare_job(request.posting)?;
    let result = if request.force {
        run_forced(&state, &job).await?
    } else {
        state.matcher.match_job(&state.profile, &job)?
    };
    let resume = build_resume(&state.profile, &result, &job);

    Ok(Json(ResumeResponse { result, resume }))
}
