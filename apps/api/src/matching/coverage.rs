//! Coverage score and tier.

use std::collections::BTreeSet;

use crate::config::MatchingConfig;
use crate::models::matching::{ExperienceScore, MatchTier};

#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    /// `|covered| / |job_tags|`, 0.0 when the job has no tags.
    pub score: f64,
    pub percentage: u32,
    /// Sorted.
    pub covered: Vec<String>,
    /// Sorted. `covered ∪ missing` is exactly the job tag set.
    pub missing: Vec<String>,
}

pub fn to_percentage(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

/// Union of the selected experiences' matched tags, measured against the job tags.
pub fn compute_coverage(selected: &[ExperienceScore], job_tags: &BTreeSet<String>) -> Coverage {
    let union: BTreeSet<&str> = selected
        .iter()
        .flat_map(|s| s.matched_tags.iter().map(String::as_str))
        .collect();

    let (covered, missing): (Vec<String>, Vec<String>) = job_tags
        .iter()
        .cloned()
        .partition(|t| union.contains(t.as_str()));

    let score = if job_tags.is_empty() {
        0.0
    } else {
        covered.len() as f64 / job_tags.len() as f64
    };

    Coverage {
        score,
        percentage: to_percentage(score),
        covered,
        missing,
    }
}

pub fn tier_for(score: f64, config: &MatchingConfig) -> MatchTier {
    if score >= config.high_match_threshold {
        MatchTier::High
    } else if score >= config.medium_match_threshold {
        MatchTier::Medium
    } else {
        MatchTier::Low
    }
}
