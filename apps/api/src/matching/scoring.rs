//! Per-experience scoring against a job's requirement tags.
//!
//! `base = |matched| / |job_tags|`, `weighted = base × category_weight`.
//! The weighted score is not clamped: a core experience can exceed 1.0.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::MatchingConfig;
use crate::matching::overlap::{normalize_tag, normalized_overlap};
use crate::models::matching::ExperienceScore;
use crate::models::profile::{Experience, ExperienceCategory};

pub fn category_weight(category: ExperienceCategory, config: &MatchingConfig) -> f64 {
    match category {
        ExperienceCategory::Core => config.core_weight,
        ExperienceCategory::Contextual => config.contextual_weight,
    }
}

/// Job tags licensed by at least one experience tag, in sorted order.
pub fn matched_tags(job_tags: &BTreeSet<String>, experience_tags: &BTreeSet<String>) -> Vec<String> {
    let experience_norm: Vec<String> = experience_tags.iter().map(|t| normalize_tag(t)).collect();

    job_tags
        .iter()
        .filter(|job_tag| {
            let job_norm = normalize_tag(job_tag);
            experience_norm
                .iter()
                .any(|e| normalized_overlap(&job_norm, e))
        })
        .cloned()
        .collect()
}

/// Scores one experience. Bullets and selection reason are filled in by selection.
pub fn score_experience(
    experience: &Experience,
    job_tags: &BTreeSet<String>,
    config: &MatchingConfig,
) -> ExperienceScore {
    let matched = matched_tags(job_tags, &experience.tags);

    let base = if job_tags.is_empty() {
        0.0
    } else {
        matched.len() as f64 / job_tags.len() as f64
    };
    let score = base * category_weight(experience.category, config);

    debug!(
        "Experience {} ({}): {}/{} tags, score {:.3}",
        experience.id,
        experience.company,
        matched.len(),
        job_tags.len(),
        score
    );

    ExperienceScore {
        experience_id: experience.id,
        company: experience.company.clone(),
        role: experience.role.clone(),
        category: experience.category,
        score,
        matched_tags: matched,
        selected_bullets: Vec::new(),
        selection_reason: None,
    }
}

/// One score per experience, in profile order.
pub fn score_all(
    experiences: &[Experience],
    job_tags: &BTreeSet<String>,
    config: &MatchingConfig,
) -> Vec<ExperienceScore> {
    experiences
        .iter()
        .map(|e| score_experience(e, job_tags, config))
        .collect()
}
