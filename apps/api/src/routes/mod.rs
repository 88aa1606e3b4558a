pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assembly::handlers as assembly;
use crate::extraction::handlers as extraction;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job analysis
        .route("/api/v1/jobs/analyze", post(extraction::handle_analyze))
        .route("/api/v1/jobs/strategy", post(assembly::handle_strategy))
        // Matching
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/match/force", post(matching::handle_force_match))
        .route("/api/v1/resume", post(matching::handle_resume))
        // Profile
        .route("/api/v1/profile/headlines", get(profile::handle_headlines))
        .with_state(state)
}
