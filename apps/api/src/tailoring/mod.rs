//! Tailoring: the caller-driven force-match flow and its text-generation seam.
//!
//! `AppState` holds an optional `Arc<dyn TextGenerator>`; without one the flow
//! still runs and keeps the profile's original text.

use async_trait::async_trait;

use crate::llm_client::LlmError;

pub mod force;
pub mod prompts;

pub use force::force_full_match;

/// Takes a prompt and returns prose. Implement this to swap LLM backends
/// without touching the force-match flow.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}
