use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub profile_path: PathBuf,
    /// Optional: enables LLM rewriting in the force-match flow.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub matching: MatchingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let matching = MatchingConfig::from_env()?;
        matching.validate()?;

        Ok(Config {
            profile_path: PathBuf::from(require_env("PROFILE_PATH")?),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            matching,
        })
    }
}

/// Tunables for the matching and selection engines.
/// Passed by value into `Matcher::new`; there is no global instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub high_match_threshold: f64,
    pub medium_match_threshold: f64,
    pub minimum_match_threshold: f64,
    pub max_experiences: usize,
    /// Most recent core experiences always included.
    pub guaranteed_core: usize,
    pub max_bullets_per_experience: usize,
    pub max_skills: usize,
    pub core_weight: f64,
    pub contextual_weight: f64,
    /// Shortest bullet word that becomes a derived experience tag.
    pub min_keyword_length: usize,
    pub ignored_words: Vec<String>,
}

const DEFAULT_IGNORED_WORDS: &[&str] = &[
    "the", "and", "for", "with", "you", "are", "our", "will", "que", "com", "para", "uma", "seu",
    "sua", "nos", "das", "dos",
];

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            high_match_threshold: 0.70,
            medium_match_threshold: 0.40,
            minimum_match_threshold: 0.10,
            max_experiences: 7,
            guaranteed_core: 3,
            max_bullets_per_experience: 12,
            max_skills: 20,
            core_weight: 1.5,
            contextual_weight: 1.0,
            min_keyword_length: 3,
            ignored_words: DEFAULT_IGNORED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl MatchingConfig {
    /// Defaults, overridden by any `MATCH_*` variable that is set.
    pub fn from_env() -> Result<Self> {
        let d = Self::default();
        Ok(Self {
            high_match_threshold: env_or("MATCH_HIGH_THRESHOLD", d.high_match_threshold)?,
            medium_match_threshold: env_or("MATCH_MEDIUM_THRESHOLD", d.medium_match_threshold)?,
            minimum_match_threshold: env_or("MATCH_MIN_THRESHOLD", d.minimum_match_threshold)?,
            max_experiences: env_or("MATCH_MAX_EXPERIENCES", d.max_experiences)?,
            guaranteed_core: env_or("MATCH_GUARANTEED_CORE", d.guaranteed_core)?,
            max_bullets_per_experience: env_or("MATCH_MAX_BULLETS", d.max_bullets_per_experience)?,
            max_skills: env_or("MATCH_MAX_SKILLS", d.max_skills)?,
            core_weight: env_or("MATCH_CORE_WEIGHT", d.core_weight)?,
            contextual_weight: env_or("MATCH_CONTEXTUAL_WEIGHT", d.contextual_weight)?,
            ..d
        })
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("high_match_threshold", self.high_match_threshold),
            ("medium_match_threshold", self.medium_match_threshold),
            ("minimum_match_threshold", self.minimum_match_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{name} ({value}) must be within 0.0 and 1.0");
            }
        }
        if self.medium_match_threshold > self.high_match_threshold {
            bail!(
                "medium_match_threshold ({}) must not exceed high_match_threshold ({})",
                self.medium_match_threshold,
                self.high_match_threshold
            );
        }
        let valid_weight = |w: f64| w.is_finite() && w > 0.0;
        if !valid_weight(self.core_weight) || !valid_weight(self.contextual_weight) {
            bail!("category weights must be positive and finite");
        }
        if self.max_experiences == 0 {
            bail!("max_experiences must be at least 1");
        }
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let c = MatchingConfig::default();
        assert_eq!(c.high_match_threshold, 0.70);
        assert_eq!(c.medium_match_threshold, 0.40);
        assert_eq!(c.max_experiences, 7);
        assert_eq!(c.guaranteed_core, 3);
        assert_eq!(c.core_weight, 1.5);
        assert_eq!(c.contextual_weight, 1.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let c = MatchingConfig {
            medium_match_threshold: 0.8,
            ..MatchingConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let c = MatchingConfig {
            max_experiences: 0,
            ..MatchingConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_weights() {
        for weight in [f64::NAN, f64::INFINITY, -1.0, 0.0] {
            let c = MatchingConfig {
                core_weight: weight,
                ..MatchingConfig::default()
            };
            assert!(c.validate().is_err(), "accepted core_weight {weight}");
        }
        let c = MatchingConfig {
            contextual_weight: f64::NAN,
            ..MatchingConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_thresholds() {
        let c = MatchingConfig {
            high_match_threshold: 1.5,
            ..MatchingConfig::default()
        };
        assert!(c.validate().is_err());
        let c = MatchingConfig {
            minimum_match_threshold: -0.1,
            ..MatchingConfig::default()
        };
        assert!(c.validate().is_err());
        let c = MatchingConfig {
            medium_match_threshold: f64::NAN,
            ..MatchingConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_env_or_falls_back_when_unset() {
        let v: usize = env_or("TAILOR_TEST_SURELY_UNSET_VAR", 5).unwrap();
        assert_eq!(v, 5);
    }
}
