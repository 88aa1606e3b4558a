//! Job Interpreter: derives requirement tags and role signals from raw posting text.
//!
//! Pure pattern matching over the static dictionaries in `patterns`. Nothing is
//! inferred: every tag corresponds to a literal whole-word hit in the text.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::patterns::TABLES;
use crate::models::job::{JobType, Language, Seniority, WorkMode};

/// Below this many characters the text is too thin to extract from.
pub const MIN_CONFIDENT_TEXT_CHARS: usize = 30;

/// Everything the interpreter derives from one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInterpretation {
    pub requirement_tags: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    pub seniority: Option<Seniority>,
    pub job_type: JobType,
    pub language: Language,
    pub work_mode: Option<WorkMode>,
    pub low_confidence: bool,
}

/// Interprets a posting from its title and description.
pub fn interpret(title: &str, description: &str) -> JobInterpretation {
    let text = format!("{title} {description}");
    let low_confidence = text.trim().chars().count() < MIN_CONFIDENT_TEXT_CHARS;

    let requirement_tags = if low_confidence {
        BTreeSet::new()
    } else {
        extract_requirement_tags(&text)
    };

    let interpretation = JobInterpretation {
        requirement_tags,
        soft_skills: extract_soft_skills(&text),
        seniority: detect_seniority(&text),
        job_type: detect_job_type(&text),
        language: detect_language(&text),
        work_mode: detect_work_mode(&text),
        low_confidence,
    };

    debug!(
        "Interpreted posting: {} tags, seniority={:?}, type={:?}, language={:?}, low_confidence={}",
        interpretation.requirement_tags.len(),
        interpretation.seniority,
        interpretation.job_type,
        interpretation.language,
        interpretation.low_confidence
    );

    interpretation
}

/// Hard-skill and metric tags with at least one literal hit.
pub fn extract_requirement_tags(text: &str) -> BTreeSet<String> {
    TABLES
        .hard_skills
        .matching_keys(text)
        .chain(TABLES.metrics.matching_keys(text))
        .map(str::to_string)
        .collect()
}

pub fn extract_soft_skills(text: &str) -> BTreeSet<String> {
    TABLES
        .soft_skills
        .matching_keys(text)
        .map(str::to_string)
        .collect()
}

/// Highest-priority seniority with any hit (Lead > Manager > Senior > Mid > Junior).
pub fn detect_seniority(text: &str) -> Option<Seniority> {
    TABLES.seniority.first_match(text)
}

/// Family with the most hits; equal counts go to the family listed first.
pub fn detect_job_type(text: &str) -> JobType {
    let mut best: Option<(JobType, usize)> = None;
    for (job_type, hits) in TABLES.job_types.hit_counts(text) {
        if hits == 0 {
            continue;
        }
        match best {
            Some((_, best_hits)) if hits <= best_hits => {}
            _ => best = Some((job_type, hits)),
        }
    }
    best.map(|(job_type, _)| job_type).unwrap_or_default()
}

/// Marker-word vote. English must win outright; ties go to Portuguese.
pub fn detect_language(text: &str) -> Language {
    let pt = TABLES.pt_markers.iter().filter(|m| m.is_match(text)).count();
    let en = TABLES.en_markers.iter().filter(|m| m.is_match(text)).count();
    if en > pt {
        Language::En
    } else {
        Language::Pt
    }
}

pub fn detect_work_mode(text: &str) -> Option<WorkMode> {
    TABLES.work_modes.first_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROWTH_JD: &str = "Growth Marketing Manager. You will own our go-to-market \
        motion, run A/B testing on paid search, report CAC and LTV to leadership, and \
        build dashboards in Looker. Requirements: SQL, HubSpot, stakeholder management. \
        Remote-friendly team.";

    const PT_JD: &str = "Você será responsável pela estratégia de marketing de conteúdo \
        da nossa empresa. Requisitos: experiência com SEO, Google Analytics e gestão de \
        projetos. Modelo híbrido.";

    #[test]
    fn test_extracts_expected_tags() {
        let i = interpret("Growth Marketing Manager", GROWTH_JD);
        for tag in [
            "gtm",
            "ab_testing",
            "sem",
            "growth",
            "dashboard",
            "sql",
            "crm",
            "stakeholder_management",
            "cac",
            "ltv",
        ] {
            assert!(i.requirement_tags.contains(tag), "missing tag {tag}");
        }
        assert!(!i.low_confidence);
    }

    #[test]
    fn test_never_invents_tags() {
        let tags = extract_requirement_tags("We sell shoes online and love our customers.");
        assert!(tags.is_empty(), "unexpected tags: {tags:?}");
    }

    #[test]
    fn test_whole_word_only() {
        // "pythonista" must not license "python"; "aim" must not license "ai".
        let tags = extract_requirement_tags("Looking for a pythonista who can aim high");
        assert!(!tags.contains("python"));
        assert!(!tags.contains("ai"));
    }

    #[test]
    fn test_soft_skills_are_not_requirement_tags() {
        let i = interpret(
            "Analyst",
            "Strong communication and leadership expected from every analyst here.",
        );
        assert!(i.soft_skills.contains("communication"));
        assert!(i.soft_skills.contains("leadership"));
        assert!(!i.requirement_tags.contains("communication"));
    }

    #[test]
    fn test_short_text_is_low_confidence_with_no_tags() {
        let i = interpret("SQL", "python");
        assert!(i.low_confidence);
        assert!(i.requirement_tags.is_empty());
    }

    #[test]
    fn test_empty_text_does_not_panic() {
        let i = interpret("", "");
        assert!(i.low_confidence);
        assert!(i.requirement_tags.is_empty());
        assert_eq!(i.job_type, JobType::General);
        assert!(i.seniority.is_none());
    }

    #[test]
    fn test_seniority_priority_lead_over_senior() {
        assert_eq!(
            detect_seniority("Senior engineer who will lead the squad"),
            Some(Seniority::Lead)
        );
        assert_eq!(
            detect_seniority("Senior manager, growth"),
            Some(Seniority::Manager)
        );
        assert_eq!(detect_seniority("Junior analyst"), Some(Seniority::Junior));
        assert_eq!(detect_seniority("Analyst"), None);
    }

    #[test]
    fn test_job_type_highest_count_wins() {
        assert_eq!(
            detect_job_type("product product roadmap, marketing"),
            JobType::Product
        );
    }

    #[test]
    fn test_job_type_tie_goes_to_earlier_family() {
        // One hit each for marketing and product: marketing is listed first.
        assert_eq!(detect_job_type("product marketing"), JobType::Marketing);
        assert_eq!(detect_job_type("marketing product"), JobType::Marketing);
    }

    #[test]
    fn test_language_detection() {
        assert_eq!(detect_language(GROWTH_JD), Language::En);
        assert_eq!(detect_language(PT_JD), Language::Pt);
    }

    #[test]
    fn test_language_tie_favors_portuguese() {
        assert_eq!(detect_language("nenhum marcador here"), Language::Pt);
        assert_eq!(detect_language("você you"), Language::Pt);
    }

    #[test]
    fn test_work_mode() {
        assert_eq!(detect_work_mode(PT_JD), Some(WorkMode::Hybrid));
        assert_eq!(detect_work_mode("Remote-friendly"), Some(WorkMode::Remote));
        assert_eq!(detect_work_mode("Office in Lisbon"), None);
    }

    #[test]
    fn test_portuguese_tags() {
        let tags = extract_requirement_tags(PT_JD);
        assert!(tags.contains("seo"));
        assert!(tags.contains("analytics"));
        assert!(tags.contains("content_marketing"));
        assert!(tags.contains("project_management"));
    }

    #[test]
    fn test_interpretation_is_deterministic() {
        let a = interpret("Growth Marketing Manager", GROWTH_JD);
        let b = interpret("Growth Marketing Manager", GROWTH_JD);
        assert_eq!(a, b);
    }
}
