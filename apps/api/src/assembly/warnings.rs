//! Advisory warnings. Text only; they never feed back into score or selection.

use crate::config::MatchingConfig;
use crate::matching::coverage::Coverage;
use crate::models::job::Job;
use crate::models::matching::{ExperienceScore, SelectionReason};

const MAX_MISSING_BEFORE_WARNING: usize = 5;

pub fn collect_warnings(
    job: &Job,
    coverage: &Coverage,
    selected: &[ExperienceScore],
    config: &MatchingConfig,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if job.requirement_tags.is_empty() {
        warnings.push("No requirements detected in the posting; score is 0%.".to_string());
    }

    if job.low_confidence {
        warnings.push(
            "Posting text is too short for reliable extraction; re-scrape before applying."
                .to_string(),
        );
    }

    if coverage.score < config.medium_match_threshold {
        warnings.push(format!(
            "Low match ({}%). This role may not be a good fit.",
            coverage.percentage
        ));
    }

    if coverage.missing.len() > MAX_MISSING_BEFORE_WARNING {
        warnings.push(format!(
            "{} requirements are not covered by the résumé.",
            coverage.missing.len()
        ));
    }

    if job.seniority.is_some_and(|s| s.is_leadership()) {
        warnings.push(
            "Leadership role: prefer strategic, outcome-focused bullets over vague ones."
                .to_string(),
        );
    }

    let filler: Vec<String> = selected
        .iter()
        .filter(|s| s.selection_reason == Some(SelectionReason::CapacityFill))
        .map(|s| s.company.clone())
        .collect();
    if !filler.is_empty() {
        warnings.push(format!(
            "{} experience(s) included below the relevance threshold to fill capacity: {}",
            filler.len(),
            filler.join(", ")
        ));
    }

    warnings
}
