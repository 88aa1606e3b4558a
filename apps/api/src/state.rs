use std::sync::Arc;

use crate::matching::Matcher;
use crate::models::profile::Profile;
use crate::tailoring::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub profile: Arc<Profile>,
    pub matcher: Matcher,
    /// Rewrites text in the force-match flow. `None` when no API key is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
}
