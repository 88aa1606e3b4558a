//! Strategic plan: application advice derived from the job alone.
//!
//! Ghost notes are needs a posting implies without stating. Vulnerabilities
//! are ways a senior profile can read badly for this role. The narrative
//! shift says whether to tone titles down. Like warnings, none of this feeds
//! back into score or selection.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::job::{Job, JobType, Seniority};

/// Employers large enough that corporate titles are expected. Matched against
/// whole words of the company name.
const LARGE_EMPLOYERS: &[&str] = &[
    "meta",
    "facebook",
    "google",
    "ambev",
    "abinbev",
    "suzano",
    "dow",
    "transperfect",
    "nubank",
    "ifood",
];

static ACADEMIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(mestrado|doutorado|phd|ph\.d|master'?s degree)\b")
        .expect("valid academic regex")
});

static LEAD_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(lead|leader|gerente)\b").expect("valid title regex"));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategicPlan {
    pub ghost_notes: Vec<String>,
    pub vulnerability_report: Vec<String>,
    pub anti_overqualification_applied: bool,
    pub suggested_narrative_shift: String,
}

pub fn analyze(job: &Job) -> StrategicPlan {
    let large_employer = is_large_employer(&job.company);
    let (anti_overqualification_applied, suggested_narrative_shift) = if large_employer {
        (
            false,
            "Narrative: 'Strategic Leader'. Keep original titles and focus on large-scale P&L impact."
                .to_string(),
        )
    } else {
        (
            true,
            "Narrative: 'Hands-on Lead'. Hide 'Head' and 'Senior Manager' titles so the budget does not flinch."
                .to_string(),
        )
    };

    StrategicPlan {
        ghost_notes: ghost_notes(job),
        vulnerability_report: vulnerabilities(job, large_employer),
        anti_overqualification_applied,
        suggested_narrative_shift,
    }
}

fn is_large_employer(company: &str) -> bool {
    company
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| LARGE_EMPLOYERS.iter().any(|e| word.eq_ignore_ascii_case(e)))
}

fn ghost_notes(job: &Job) -> Vec<String> {
    let mut notes: Vec<String> = match job.job_type {
        JobType::Marketing => vec![
            "Implicitly needs stakeholder management and alignment with sales (sales enablement).",
            "Likely needs aggressive ROI justification in front of the board.",
        ],
        JobType::Growth => vec![
            "Extreme focus on CAC/LTV and fast experimentation, possibly without infrastructure in place.",
            "Will have to get hands dirty with data before automating anything.",
        ],
        JobType::AiOps => vec![
            "Inflated expectations about AI: sell operational efficiency rather than technology.",
        ],
        _ => Vec::new(),
    }
    .into_iter()
    .map(String::from)
    .collect();

    if LEAD_TITLE_RE.is_match(&job.title) {
        notes.push(
            "Needs someone who resolves team conflicts without escalating to the VP.".to_string(),
        );
    }
    notes
}

fn vulnerabilities(job: &Job, large_employer: bool) -> Vec<String> {
    let mut report = Vec::new();

    if ACADEMIC_RE.is_match(&job.description) {
        report.push(
            "RISK: An academic background may read as too theoretical for this role.".to_string(),
        );
    }

    if !large_employer && job.seniority.is_some_and(Seniority::is_leadership) {
        report.push(format!(
            "RISK: Large-company experience may look too corporate for {}.",
            job.company
        ));
        report.push(
            "TIP: Emphasize agility and hands-on execution (fewer processes, more results)."
                .to_string(),
        );
    }

    if job.seniority == Some(Seniority::Junior) {
        report.push(
            "CRITICAL: A 15+ year profile is overqualified here. Titles need a full downgrade."
                .to_string(),
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, company: &str, job_type: JobType, seniority: Option<Seniority>) -> Job {
        Job {
            title: title.into(),
            company: company.into(),
            job_type,
            seniority,
            ..Default::default()
        }
    }

    #[test]
    fn test_marketing_ghost_notes() {
        let plan = analyze(&job("Marketing Manager", "Acme", JobType::Marketing, None));
        assert_eq!(plan.ghost_notes.len(), 2);
        assert!(plan.ghost_notes[0].contains("sales enablement"));
        assert!(plan.ghost_notes[1].contains("ROI"));
    }

    #[test]
    fn test_growth_ghost_notes() {
        let plan = analyze(&job("Growth Manager", "Acme", JobType::Growth, None));
        assert_eq!(plan.ghost_notes.len(), 2);
        assert!(plan.ghost_notes[0].contains("CAC/LTV"));
    }

    #[test]
    fn test_ai_ops_ghost_note() {
        let plan = analyze(&job("AI Ops Manager", "Acme", JobType::AiOps, None));
        assert_eq!(plan.ghost_notes.len(), 1);
        assert!(plan.ghost_notes[0].contains("operational efficiency"));
    }

    #[test]
    fn test_general_job_has_no_ghost_notes() {
        let plan = analyze(&job("Analyst", "Acme", JobType::General, None));
        assert!(plan.ghost_notes.is_empty());
    }

    #[test]
    fn test_lead_titles_add_conflict_note() {
        for title in ["Growth Lead", "Gerente de Marketing", "Team Leader"] {
            let plan = analyze(&job(title, "Acme", JobType::General, None));
            assert_eq!(plan.ghost_notes.len(), 1, "{title}");
            assert!(plan.ghost_notes[0].contains("conflicts"));
        }
        let plan = analyze(&job("Misleading Title", "Acme", JobType::General, None));
        assert!(plan.ghost_notes.is_empty());
    }

    #[test]
    fn test_academic_description_is_a_risk() {
        let mut posting = job("Analyst", "Acme", JobType::General, None);
        posting.description = "Mestrado USP preferred.".into();
        let plan = analyze(&posting);
        assert_eq!(plan.vulnerability_report.len(), 1);
        assert!(plan.vulnerability_report[0].contains("academic"));

        posting.description = "Master's degree in statistics is a plus.".into();
        assert_eq!(analyze(&posting).vulnerability_report.len(), 1);
    }

    #[test]
    fn test_leadership_at_smaller_company_warns_corporate() {
        let plan = analyze(&job(
            "Head of Growth",
            "Tiny Startup",
            JobType::Growth,
            Some(Seniority::Lead),
        ));
        assert_eq!(plan.vulnerability_report.len(), 2);
        assert!(plan.vulnerability_report[0].contains("Tiny Startup"));
        assert!(plan.vulnerability_report[1].starts_with("TIP"));
    }

    #[test]
    fn test_leadership_at_large_employer_is_not_a_risk() {
        let plan = analyze(&job(
            "Marketing Manager",
            "Google Brasil",
            JobType::Marketing,
            Some(Seniority::Manager),
        ));
        assert!(plan.vulnerability_report.is_empty());
    }

    #[test]
    fn test_junior_role_is_critical() {
        let plan = analyze(&job(
            "Marketing Assistant",
            "Google",
            JobType::Marketing,
            Some(Seniority::Junior),
        ));
        assert_eq!(plan.vulnerability_report.len(), 1);
        assert!(plan.vulnerability_report[0].starts_with("CRITICAL"));
    }

    #[test]
    fn test_narrative_shift_depends_on_employer_size() {
        let small = analyze(&job("Growth Lead", "Acme", JobType::Growth, None));
        assert!(small.anti_overqualification_applied);
        assert!(small.suggested_narrative_shift.contains("Hands-on Lead"));

        let large = analyze(&job("Growth Lead", "iFood", JobType::Growth, None));
        assert!(!large.anti_overqualification_applied);
        assert!(large.suggested_narrative_shift.contains("Strategic Leader"));
    }

    #[test]
    fn test_large_employer_matches_whole_words() {
        assert!(is_large_employer("Dow Chemical"));
        assert!(is_large_employer("Ambev S.A."));
        assert!(!is_large_employer("Dowling & Co"));
        assert!(!is_large_employer("Metalúrgica Paulista"));
    }
}
