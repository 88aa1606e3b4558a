mod assembly;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod matching;
mod models;
mod profile;
mod routes;
mod state;
mod tailoring;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::Matcher;
use crate::profile::load_profile;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tailoring::TextGenerator;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Load the master profile once; it is read-only from here on
    let profile = load_profile(&config.profile_path, &config.matching)
        .await
        .with_context(|| format!("Failed to load profile {}", config.profile_path.display()))?;

    // Optional LLM client for the force-match rewrite pass
    let generator: Option<Arc<dyn TextGenerator>> = match &config.anthropic_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            let client = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            Some(Arc::new(client))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; forced matches keep original text");
            None
        }
    };

    info!(
        "Matching config: max_experiences={}, guaranteed_core={}, thresholds={}/{}/{}",
        config.matching.max_experiences,
        config.matching.guaranteed_core,
        config.matching.high_match_threshold,
        config.matching.medium_match_threshold,
        config.matching.minimum_match_threshold
    );

    // Build app state
    let state = AppState {
        profile: Arc::new(profile),
        matcher: Matcher::new(config.matching.clone()),
        generator,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
