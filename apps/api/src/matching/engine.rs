//! `Matcher`: runs extraction output through scoring, selection, coverage and assembly.

use tracing::{debug, info};

use crate::assembly::headline::{choose_headline, choose_summary};
use crate::assembly::skills::select_skills;
use crate::assembly::warnings::collect_warnings;
use crate::config::MatchingConfig;
use crate::matching::coverage::{compute_coverage, tier_for};
use crate::matching::scoring::score_all;
use crate::matching::selection::{attach_bullets, select_experiences};
use crate::matching::MatchError;
use crate::models::job::Job;
use crate::models::matching::MatchResult;
use crate::models::profile::Profile;

/// Stateless apart from its configuration; cheap to clone and share.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchingConfig,
}

impl Matcher {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Scores every experience, selects a bounded subset and assembles the result.
    ///
    /// Fails only when the profile has no experiences. An empty job tag set is a
    /// valid input and yields a zero score with a warning.
    pub fn match_job(&self, profile: &Profile, job: &Job) -> Result<MatchResult, MatchError> {
        if profile.experiences.is_empty() {
            return Err(MatchError::EmptyProfile);
        }

        let job_tags = &job.requirement_tags;
        let scores = score_all(&profile.experiences, job_tags, &self.config);

        let mut selection = select_experiences(scores, &profile.experiences, &self.config);
        attach_bullets(
            &mut selection.selected,
            &profile.experiences,
            job_tags,
            &self.config,
        );
        debug!(
            "Selected {} experiences, excluded {}",
            selection.selected.len(),
            selection.excluded.len()
        );

        let coverage = compute_coverage(&selection.selected, job_tags);
        let tier = tier_for(coverage.score, &self.config);

        let (headline_id, headline) = choose_headline(profile, job.job_type, job.seniority);
        let (summary_id, summary) = choose_summary(profile, &headline_id);
        let selected_skills = select_skills(&profile.skills, &coverage.covered, self.config.max_skills);
        let warnings = collect_warnings(job, &coverage, &selection.selected, &self.config);

        info!(
            "Matched job '{}' at {}: {}% ({:?})",
            job.title, job.company, coverage.percentage, tier
        );

        Ok(MatchResult {
            score: coverage.score,
            percentage: coverage.percentage,
            tier,
            headline_id,
            headline,
            summary_id,
            summary,
            selected_experiences: selection.selected,
            excluded_experiences: selection.excluded,
            selected_skills,
            covered_tags: coverage.covered,
            missing_tags: coverage.missing,
            warnings,
            forced: false,
        })
    }
}
