//! Profile Store: loads the master profile once and derives experience tags.
//!
//! The returned `Profile` is immutable; callers share it behind an `Arc`.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::MatchingConfig;
use crate::models::profile::{Experience, Profile};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate experience id {0}")]
    DuplicateId(u32),
}

/// Reads and parses the profile file at `path`.
pub async fn load_profile(path: &Path, config: &MatchingConfig) -> Result<Profile, ProfileError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let profile = from_json(&raw, config)?;
    info!(
        "Loaded profile from {}: {} experiences, {} headlines, {} skills",
        path.display(),
        profile.experiences.len(),
        profile.headlines.len(),
        profile.skills.len()
    );
    Ok(profile)
}

/// Parses a profile document and derives the tag set of every experience.
pub fn from_json(raw: &str, config: &MatchingConfig) -> Result<Profile, ProfileError> {
    let mut profile: Profile = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for experience in &profile.experiences {
        if !seen.insert(experience.id) {
            return Err(ProfileError::DuplicateId(experience.id));
        }
    }

    if profile.experiences.is_empty() {
        warn!("Profile has no experiences; every match request will be rejected");
    }

    for experience in &mut profile.experiences {
        experience.tags = derive_tags(experience, config);
    }

    Ok(profile)
}

/// keywords ∪ stack ∪ significant bullet words, lower-cased.
pub fn derive_tags(experience: &Experience, config: &MatchingConfig) -> BTreeSet<String> {
    let ignored: HashSet<&str> = config.ignored_words.iter().map(String::as_str).collect();

    let explicit = experience
        .keywords
        .iter()
        .chain(&experience.stack)
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let from_bullets = experience
        .bullets
        .iter()
        .flat_map(|b| b.split(|c: char| !c.is_alphabetic()))
        .filter(|w| w.chars().count() >= config.min_keyword_length)
        .map(str::to_lowercase)
        .filter(|w| !ignored.contains(w.as_str()));

    explicit.chain(from_bullets).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ExperienceCategory;

    const PROFILE: &str = r#"{
        "experiences": [
            {
                "id": 1,
                "company": "Acme",
                "role": "Growth Lead",
                "category": "core",
                "period": "2020 - 2023",
                "bullets": ["Built the CRM pipeline with the sales team", "Cut CAC by 30%"],
                "keywords": ["Growth", " SEO "],
                "stack": ["HubSpot", ""]
            }
        ]
    }"#;

    #[test]
    fn test_tags_union_keywords_stack_and_bullet_words() {
        let profile = from_json(PROFILE, &MatchingConfig::default()).unwrap();
        let tags = &profile.experiences[0].tags;
        for expected in ["growth", "seo", "hubspot", "crm", "pipeline", "sales", "cac"] {
            assert!(tags.contains(expected), "missing {expected}: {tags:?}");
        }
    }

    #[test]
    fn test_short_and_ignored_words_are_not_tags() {
        let profile = from_json(PROFILE, &MatchingConfig::default()).unwrap();
        let tags = &profile.experiences[0].tags;
        assert!(!tags.contains("the"));
        assert!(!tags.contains("with"));
        assert!(!tags.contains("by"));
        assert!(!tags.contains("30"));
        assert!(!tags.contains(""));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"{"experiences": [{"id": 1}, {"id": 1}]}"#;
        let err = from_json(raw, &MatchingConfig::default()).unwrap_err();
        assert!(matches!(err, ProfileError::DuplicateId(1)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = from_json("{not json", &MatchingConfig::default()).unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn test_star_bullets_are_flattened_and_junk_skipped() {
        let raw = r#"{"experiences": [{
            "id": 1,
            "bullets": [
                "Plain bullet",
                {"situation": "Churn", "action": "Rebuilt onboarding", "result": "Churn down 20%"},
                {"action": "Ran the SEO audit."},
                42,
                null,
                {"result": "orphan result"}
            ]
        }]}"#;
        let profile = from_json(raw, &MatchingConfig::default()).unwrap();
        assert_eq!(
            profile.experiences[0].bullets,
            vec![
                "Plain bullet",
                "Rebuilt onboarding. Result: Churn down 20%",
                "Ran the SEO audit.",
            ]
        );
        assert!(profile.experiences[0].tags.contains("onboarding"));
    }

    #[test]
    fn test_unknown_tier_loads_as_contextual() {
        let raw = r#"{"experiencias": [
            {"id": 1, "tier": "supporting"},
            {"id": 2, "tier": "core"}
        ]}"#;
        let profile = from_json(raw, &MatchingConfig::default()).unwrap();
        assert_eq!(profile.experiences[0].category, ExperienceCategory::Contextual);
        assert_eq!(profile.experiences[1].category, ExperienceCategory::Core);
    }

    #[test]
    fn test_empty_profile_loads() {
        let profile = from_json("{}", &MatchingConfig::default()).unwrap();
        assert!(profile.experiences.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = load_profile(
            Path::new("/definitely/not/here/profile.json"),
            &MatchingConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
    }
}
