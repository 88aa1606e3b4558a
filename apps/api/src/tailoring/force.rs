//! Force 100% match.
//!
//! Builds a new `MatchResult` that presents every job tag as covered, using the
//! most recent experiences. The normal match still runs first so the headline,
//! summary and skills come from the regular assembly path.

use tracing::{info, warn};

use crate::assembly::skills::select_skills;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PROSE_ONLY_SYSTEM};
use crate::llm_client::parse_json_reply;
use crate::matching::selection::select_bullets;
use crate::matching::{MatchError, Matcher};
use crate::models::job::Job;
use crate::models::matching::{
    ExcludedExperience, ExperienceScore, MatchResult, MatchTier, SelectionReason,
};
use crate::models::profile::{Experience, Profile};
use crate::tailoring::prompts::{build_bullet_prompt, build_summary_prompt};
use crate::tailoring::TextGenerator;

pub async fn force_full_match(
    matcher: &Matcher,
    profile: &Profile,
    job: &Job,
    generator: Option<&dyn TextGenerator>,
) -> Result<MatchResult, MatchError> {
    let base = matcher.match_job(profile, job)?;
    let config = matcher.config();
    let all_tags: Vec<String> = job.requirement_tags.iter().cloned().collect();

    let mut timeline: Vec<&Experience> = profile.experiences.iter().collect();
    timeline.sort_by(|a, b| b.recency().cmp(&a.recency()));
    let overflow = timeline.split_off(config.max_experiences.min(timeline.len()));
    let chosen = timeline;

    let mut warnings = vec![
        "Forced 100% match: the score does not reflect actual requirement coverage.".to_string(),
    ];

    let mut selected = Vec::with_capacity(chosen.len());
    for experience in &chosen {
        let mut bullets = select_bullets(
            &experience.bullets,
            &job.requirement_tags,
            config.max_bullets_per_experience,
        );

        if let Some(generator) = generator.filter(|_| !bullets.is_empty()) {
            let prompt = build_bullet_prompt(job, experience, &bullets);
            match generator.generate(&prompt, JSON_ONLY_SYSTEM).await {
                Ok(reply) => match parse_json_reply::<Vec<String>>(&reply) {
                    Ok(mut rewritten) if !rewritten.is_empty() => {
                        rewritten.truncate(config.max_bullets_per_experience);
                        bullets = rewritten;
                    }
                    Ok(_) => warnings.push(rewrite_failed(experience, "empty reply")),
                    Err(e) => warnings.push(rewrite_failed(experience, &e.to_string())),
                },
                Err(e) => {
                    warn!("Bullet rewrite failed for experience {}: {e}", experience.id);
                    warnings.push(rewrite_failed(experience, &e.to_string()));
                }
            }
        }

        selected.push(ExperienceScore {
            experience_id: experience.id,
            company: experience.company.clone(),
            role: experience.role.clone(),
            category: experience.category,
            score: 1.0,
            matched_tags: all_tags.clone(),
            selected_bullets: bullets,
            selection_reason: Some(SelectionReason::Forced),
        });
    }

    let mut summary = base.summary;
    if let Some(generator) = generator.filter(|_| !summary.is_empty()) {
        match generator
            .generate(&build_summary_prompt(job, &summary), PROSE_ONLY_SYSTEM)
            .await
        {
            Ok(text) => summary = text.trim().to_string(),
            Err(e) => {
                warn!("Summary rewrite failed: {e}");
                warnings.push(format!("Summary rewrite failed, original kept: {e}"));
            }
        }
    }

    let excluded = overflow
        .into_iter()
        .map(|e| ExcludedExperience {
            experience_id: e.id,
            reason: format!(
                "Outside the {} most recent experiences",
                config.max_experiences
            ),
        })
        .collect();

    info!(
        "Forced match for '{}' at {}: {} experiences",
        job.title,
        job.company,
        selected.len()
    );

    Ok(MatchResult {
        score: 1.0,
        percentage: 100,
        tier: MatchTier::High,
        headline_id: base.headline_id,
        headline: base.headline,
        summary_id: base.summary_id,
        summary,
        selected_experiences: selected,
        excluded_experiences: excluded,
        selected_skills: select_skills(&profile.skills, &all_tags, config.max_skills),
        covered_tags: all_tags,
        missing_tags: Vec::new(),
        warnings,
        forced: true,
    })
}

fn rewrite_failed(experience: &Experience, reason: &str) -> String {
    format!(
        "Bullet rewrite failed for {} ({reason}); original bullets kept.",
        experience.company
    )
}
