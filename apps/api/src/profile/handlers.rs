use axum::{extract::State, Json};

use crate::models::profile::Variant;
use crate::state::AppState;

/// GET /api/v1/profile/headlines
///
/// Public headline variants in profile order.
pub async fn handle_headlines(State(state): State<AppState>) -> Json<Vec<Variant>> {
    Json(
        state
            .profile
            .headlines
            .iter()
            .filter(|v| v.is_public())
            .cloned()
            .collect(),
    )
}
