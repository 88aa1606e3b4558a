//! Axum route handler for the strategic plan.

use axum::Json;
use serde::Serialize;

use crate::assembly::strategy::{analyze, StrategicPlan};
use crate::errors::AppError;
use crate::extraction::handlers::prepare_job;
use crate::extraction::validation::JobPosting;
use crate::models::job::Job;

#[derive(Debug, Serialize)]
pub struct StrategyResponse {
    pub job: Job,
    pub plan: StrategicPlan,
}

/// POST /api/v1/jobs/strategy
pub async fn handle_strategy(
    Json(posting): Json<JobPosting>,
) -> Result<Json<StrategyResponse>, AppError> {
    let (job, _) = prepare_job(posting)?;
    let plan = analyze(&job);
    Ok(Json(StrategyResponse { job, plan }))
}
