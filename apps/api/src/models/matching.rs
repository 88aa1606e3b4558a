use serde::{Deserialize, Serialize};

use crate::models::profile::ExperienceCategory;

/// Coarse match-quality bucket derived from the coverage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

/// Why an experience made it into the selected set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    /// One of the most recent core experiences; kept regardless of score.
    GuaranteedCore,
    /// Score at or above the minimum match threshold.
    Relevant,
    /// Below threshold, kept only because capacity was not yet filled.
    CapacityFill,
    /// Produced by the force-match flow.
    Forced,
}

/// Score of one experience against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceScore {
    pub experience_id: u32,
    pub company: String,
    pub role: String,
    pub category: ExperienceCategory,
    /// `overlap / |job_tags| × category_weight`. Not clamped.
    pub score: f64,
    /// Job tags this experience satisfies, sorted.
    pub matched_tags: Vec<String>,
    pub selected_bullets: Vec<String>,
    /// `None` until the selection stage places the experience.
    pub selection_reason: Option<SelectionReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedExperience {
    pub experience_id: u32,
    pub reason: String,
}

/// Aggregate outcome for one (job, profile) pair. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Coverage score, 0.0 – 1.0
    pub score: f64,
    /// `round(score × 100)`
    pub percentage: u32,
    pub tier: MatchTier,
    pub headline_id: String,
    pub headline: String,
    pub summary_id: String,
    pub summary: String,
    /// Most recent first.
    pub selected_experiences: Vec<ExperienceScore>,
    pub excluded_experiences: Vec<ExcludedExperience>,
    pub selected_skills: Vec<String>,
    pub covered_tags: Vec<String>,
    pub missing_tags: Vec<String>,
    pub warnings: Vec<String>,
    /// True only for results built by the force-match flow.
    #[serde(default)]
    pub forced: bool,
}

/// Minimum percentage at which tailoring is worth pursuing.
const PROCEED_PERCENTAGE: u32 = 60;

impl MatchResult {
    pub fn should_proceed(&self) -> bool {
        self.percentage >= PROCEED_PERCENTAGE
    }

    /// Short human-readable coverage summary (top 10 covered, top 5 missing).
    pub fn coverage_report(&self) -> String {
        let mut lines = vec![
            format!("Match score: {}%", self.percentage),
            String::new(),
            format!("Covered requirements ({}):", self.covered_tags.len()),
        ];
        lines.extend(self.covered_tags.iter().take(10).map(|t| format!("  - {t}")));

        if !self.missing_tags.is_empty() {
            lines.push(String::new());
            lines.push(format!("Not covered ({}):", self.missing_tags.len()));
            lines.extend(self.missing_tags.iter().take(5).map(|t| format!("  - {t}")));
        }

        lines.join("\n")
    }
}
