//! Résumé assembly: resolves a match into the structure the renderer consumes.

use chrono::Utc;

use crate::models::job::Job;
use crate::models::matching::MatchResult;
use crate::models::profile::{Experience, Profile};
use crate::models::resume::{ResumeEducation, ResumeExperience, ResumeOutput, ResumeProject};

/// Every profile experience in timeline order. Selected experiences carry their
/// selected bullets; the others keep their own.
pub fn build_resume(profile: &Profile, result: &MatchResult, job: &Job) -> ResumeOutput {
    let mut timeline: Vec<&Experience> = profile.experiences.iter().collect();
    timeline.sort_by(|a, b| b.recency().cmp(&a.recency()));

    let experiences = timeline
        .into_iter()
        .map(|e| {
            let bullets = result
                .selected_experiences
                .iter()
                .find(|s| s.experience_id == e.id)
                .map(|s| s.selected_bullets.clone())
                .unwrap_or_else(|| e.bullets.clone());
            ResumeExperience {
                company: e.company.clone(),
                role: e.role.clone(),
                period: e.period.clone().unwrap_or_default(),
                location: e.location.clone().unwrap_or_default(),
                bullets,
            }
        })
        .collect();

    let education = profile
        .education
        .iter()
        .filter(|ed| ed.tier.is_core())
        .map(|ed| ResumeEducation {
            institution: ed.institution.clone(),
            program: ed.program.clone(),
            year: ed.year.clone(),
            highlight: ed.highlight.clone(),
        })
        .collect();

    let ai_projects = profile
        .ai_projects
        .iter()
        .map(|p| ResumeProject {
            name: p.name.clone(),
            bullet: p.bullet.clone(),
        })
        .collect();

    let candidate = &profile.candidate;
    ResumeOutput {
        name: candidate.full_name.clone(),
        location: candidate.location.display(),
        email: candidate.contact.email.clone(),
        linkedin: candidate.contact.linkedin.clone(),
        phone: candidate.contact.phone.clone(),
        headline: result.headline.clone(),
        summary: result.summary.clone(),
        experiences,
        education,
        skills: result.selected_skills.clone(),
        ai_projects,
        language: job.language,
        generated_at: Utc::now(),
        job_url: job.url.clone(),
        match_score: result.percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchingConfig;
    use crate::matching::Matcher;
    use crate::profile::store::from_json;

    const PROFILE: &str = r#"{
        "candidato": {"nome_completo": "Ana Souza", "localizacao": "Lisbon", "contato": {"email": "ana@example.com"}},
        "headlines": {"growth_lead": "Growth Lead"},
        "summaries": {"growth_lead": "Ten years of growth."},
        "experiencias": [
            {"id": 1, "empresa": "Old Co", "tier": "contextual", "periodo": "2012 - 2014", "bullets": ["Did old things"]},
            {"id": 2, "empresa": "New Co", "tier": "core", "periodo": "2020 - Present", "bullets": ["Ran SQL reporting"]}
        ],
        "formacao": [
            {"instituicao": "USP", "programa": "MBA", "ano": "2018", "tier": "core"},
            {"instituicao": "Online", "programa": "Course", "tier": "contextual"}
        ],
        "projetos_ai": [{"nome": "Bot", "bullet": "Built a bot"}],
        "skills": ["SQL", "Figma"]
    }"#;

    #[test]
    fn test_build_resume_orders_timeline_and_filters_education() {
        let config = MatchingConfig {
            max_experiences: 1,
            guaranteed_core: 1,
            ..MatchingConfig::default()
        };
        let profile = from_json(PROFILE, &config).unwrap();
        let job = Job {
            url: "https://jobs.example.com/9".into(),
            requirement_tags: Job::tag_set(["sql"]),
            ..Default::default()
        };
        let result = Matcher::new(config).match_job(&profile, &job).unwrap();

        let resume = build_resume(&profile, &result, &job);

        assert_eq!(resume.name, "Ana Souza");
        assert_eq!(resume.location, "Lisbon");
        assert_eq!(resume.email, "ana@example.com");
        let companies: Vec<_> = resume.experiences.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["New Co", "Old Co"]);
        assert_eq!(resume.experiences[1].bullets, vec!["Did old things"]);
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].institution, "USP");
        assert_eq!(resume.ai_projects[0].name, "Bot");
        assert_eq!(resume.skills[0], "SQL");
        assert_eq!(resume.match_score, 100);
        assert_eq!(resume.job_url, "https://jobs.example.com/9");
    }
}
