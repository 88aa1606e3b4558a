//! LLM Client: Anthropic Messages API behind the `TextGenerator` seam.
//!
//! Only the force-match flow talks to the model, and only through
//! `TextGenerator`, so tests substitute a stub and the service runs without a key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::tailoring::TextGenerator;

pub mod prompts;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
/// Model used for every rewrite call.
pub const MODEL: &str = "claude-sonnet-4-5";
/// Rewrites are a handful of bullets or one paragraph.
const MAX_TOKENS: u32 = 1024;
const MAX_ATTEMPTS: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Serialize)]
struct RewriteRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
}

#[derive(Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

/// The part of a Messages reply the rewrite flow reads.
#[derive(Deserialize)]
struct RewriteReply {
    content: Vec<ReplyBlock>,
}

/// Non-text blocks (tool use, thinking) carry no `text` and are skipped.
#[derive(Deserialize)]
struct ReplyBlock {
    #[serde(default)]
    text: Option<String>,
}

impl RewriteReply {
    fn into_text(self) -> Result<String, LlmError> {
        let text: String = self
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("\n");
        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Pulls the human-readable message out of an error body, or keeps the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// Sends one rewrite request and returns the reply text.
    /// Transport errors, 429 and 5xx are retried with 1s, 2s backoff.
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let body = RewriteRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [UserTurn {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 1;
        loop {
            let err = match self.send(&body).await {
                Ok(reply) => return reply.into_text(),
                Err(err) => err,
            };
            let retryable = match &err {
                LlmError::Http(_) => true,
                LlmError::Api { status, .. } => StatusCode::from_u16(*status)
                    .map(is_retryable)
                    .unwrap_or(false),
                _ => false,
            };
            if !retryable || attempt >= MAX_ATTEMPTS {
                return Err(err);
            }
            let delay = Duration::from_secs(1 << (attempt - 1));
            warn!("LLM attempt {attempt}/{MAX_ATTEMPTS} failed ({err}), retrying in {delay:?}");
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn send(&self, body: &RewriteRequest<'_>) -> Result<RewriteReply, LlmError> {
        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(text),
            });
        }
        debug!("LLM reply received ({status})");
        Ok(response.json().await?)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.complete(prompt, system).await
    }
}

/// Deserializes a model reply as JSON. The prompt must ask for JSON only.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    Ok(serde_json::from_str(strip_json_fences(text))?)
}

/// Removes a surrounding markdown code fence, with or without a `json` tag.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated() {
        assert_eq!(strip_json_fences("```json\n[\"a\"]"), "[\"a\"]");
    }

    #[test]
    fn test_parse_json_reply_bullet_list() {
        let bullets: Vec<String> = parse_json_reply("```json\n[\"a\", \"b\"]\n```").unwrap();
        assert_eq!(bullets, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_json_reply_rejects_prose() {
        let err = parse_json_reply::<Vec<String>>("Sure! Here are your bullets").unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn test_reply_joins_text_blocks_and_skips_others() {
        let reply: RewriteReply = serde_json::from_str(
            r#"{"id":"msg_1","content":[{"type":"thinking","thinking":"..."},{"type":"text","text":" Hello "}],"usage":{"input_tokens":3}}"#,
        )
        .unwrap();
        assert_eq!(reply.into_text().unwrap(), "Hello");
    }

    #[test]
    fn test_reply_without_text_is_empty_content() {
        let reply: RewriteReply =
            serde_json::from_str(r#"{"content":[{"type":"tool_use","id":"t1"}]}"#).unwrap();
        assert!(matches!(reply.into_text(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_api_error_message_prefers_envelope() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        assert_eq!(api_error_message(body.to_string()), "Overloaded");
        assert_eq!(api_error_message("bad gateway".to_string()), "bad gateway");
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable(StatusCode::BAD_REQUEST));
        assert!(!is_retryable(StatusCode::UNAUTHORIZED));
    }
}
