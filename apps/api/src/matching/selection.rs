//! Selection & composition: turns every experience score into a bounded,
//! explainable subset, then picks bullets for each selected experience.
//!
//! Algorithm:
//! 1. Split scores into core and contextual
//! 2. The `min(guaranteed_core, max_experiences)` most recent core entries are kept unconditionally
//! 3. Remaining core and all contextual entries are ranked by weighted score
//!    descending, exact ties by recency descending
//! 4. Ranked candidates fill the remaining capacity; those under the minimum
//!    threshold are marked `CapacityFill`, those past capacity are excluded
//! 5. The selected set is returned most recent first

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use crate::config::MatchingConfig;
use crate::models::matching::{ExcludedExperience, ExperienceScore, SelectionReason};
use crate::models::profile::{Experience, Recency};

#[derive(Debug, Clone)]
pub struct Selection {
    /// Most recent first.
    pub selected: Vec<ExperienceScore>,
    pub excluded: Vec<ExcludedExperience>,
}

struct RecencyIndex(HashMap<u32, Recency>);

impl RecencyIndex {
    fn new(experiences: &[Experience]) -> Self {
        Self(experiences.iter().map(|e| (e.id, e.recency())).collect())
    }

    fn of(&self, score: &ExperienceScore) -> Recency {
        self.0.get(&score.experience_id).copied().unwrap_or(Recency {
            end_year: 0,
            id: score.experience_id,
        })
    }

    /// Most recent first.
    fn cmp_desc(&self, a: &ExperienceScore, b: &ExperienceScore) -> Ordering {
        self.of(b).cmp(&self.of(a))
    }
}

pub fn select_experiences(
    scores: Vec<ExperienceScore>,
    experiences: &[Experience],
    config: &MatchingConfig,
) -> Selection {
    let recency = RecencyIndex::new(experiences);

    let (mut core, contextual): (Vec<_>, Vec<_>) = scores
        .into_iter()
        .partition(|s| s.category.is_core());
    core.sort_by(|a, b| recency.cmp_desc(a, b));

    let guaranteed = config
        .guaranteed_core
        .min(config.max_experiences)
        .min(core.len());
    let mut candidates = core.split_off(guaranteed);
    let mut selected = core;
    for s in &mut selected {
        s.selection_reason = Some(SelectionReason::GuaranteedCore);
    }

    candidates.extend(contextual);
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| recency.cmp_desc(a, b))
    });

    let mut excluded = Vec::new();
    for mut candidate in candidates {
        if selected.len() < config.max_experiences {
            let reason = if candidate.score >= config.minimum_match_threshold {
                SelectionReason::Relevant
            } else {
                SelectionReason::CapacityFill
            };
            candidate.selection_reason = Some(reason);
            selected.push(candidate);
        } else {
            excluded.push(ExcludedExperience {
                experience_id: candidate.experience_id,
                reason: format!(
                    "Capacity reached ({} max experiences); score {:.2}",
                    config.max_experiences, candidate.score
                ),
            });
        }
    }

    selected.sort_by(|a, b| recency.cmp_desc(a, b));

    Selection { selected, excluded }
}

/// Lower-case alphanumeric words separated by single spaces, padded on both ends.
fn mention_form(text: &str) -> String {
    let words: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    format!(" {} ", words.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Up to `max` bullets, preferring those that mention more job tags, in original order.
pub fn select_bullets(bullets: &[String], job_tags: &BTreeSet<String>, max: usize) -> Vec<String> {
    if bullets.len() <= max {
        return bullets.to_vec();
    }

    let tag_forms: Vec<String> = job_tags
        .iter()
        .map(|t| mention_form(t))
        .filter(|t| !t.trim().is_empty())
        .collect();

    let mut ranked: Vec<(usize, usize)> = bullets
        .iter()
        .enumerate()
        .map(|(i, bullet)| {
            let form = mention_form(bullet);
            let mentions = tag_forms.iter().filter(|t| form.contains(t.as_str())).count();
            (i, mentions)
        })
        .collect();
    // sort_by is stable, so equal counts keep their original order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut keep: Vec<usize> = ranked.into_iter().take(max).map(|(i, _)| i).collect();
    keep.sort_unstable();
    keep.into_iter().map(|i| bullets[i].clone()).collect()
}

/// Fills `selected_bullets` for every selected score from its experience.
pub fn attach_bullets(
    selected: &mut [ExperienceScore],
    experiences: &[Experience],
    job_tags: &BTreeSet<String>,
    config: &MatchingConfig,
) {
    for score in selected {
        score.selected_bullets = experiences
            .iter()
            .find(|e| e.id == score.experience_id)
            .map(|e| select_bullets(&e.bullets, job_tags, config.max_bullets_per_experience))
            .unwrap_or_default();
    }
}
