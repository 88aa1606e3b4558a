//! Headline and summary variant selection.

use crate::models::job::{JobType, Seniority};
use crate::models::profile::{Profile, Variant};

const DEFAULT_HEADLINE_ID: &str = "marketing_manager";

fn headline_for_job_type(job_type: JobType) -> &'static str {
    match job_type {
        JobType::Marketing => "marketing_manager",
        JobType::Growth => "growth_lead",
        JobType::Branding => "branding",
        JobType::AiOps => "ai_lead",
        JobType::Product => "product_manager",
        JobType::RevOps => "revops",
        JobType::Content => "content_strategy",
        JobType::Crm => "customer_success",
        JobType::B2b => "b2b_marketing",
        JobType::General => DEFAULT_HEADLINE_ID,
    }
}

/// Preferred headline ids per seniority, best first.
fn seniority_preference(seniority: Seniority) -> &'static [&'static str] {
    match seniority {
        Seniority::Lead => &["gpm_ai", "martech_lead", "growth_lead"],
        Seniority::Manager => &["marketing_manager", "product_manager", "pmm"],
        Seniority::Senior => &["growth_cro", "branding", "media_trafego"],
        Seniority::Mid => &["marketing_manager", "growth_cro"],
        Seniority::Junior => &["marketing_manager"],
    }
}

/// Target headline id before checking what the profile actually has.
pub fn preferred_headline_id(job_type: JobType, seniority: Option<Seniority>) -> &'static str {
    seniority
        .and_then(|s| seniority_preference(s).first().copied())
        .unwrap_or_else(|| headline_for_job_type(job_type))
}

fn resolve<'a>(variants: &'a [Variant], id: &str) -> Option<&'a Variant> {
    variants
        .iter()
        .find(|v| v.id == id)
        .or_else(|| variants.iter().find(|v| v.is_public()))
}

/// `(id, text)` of the chosen headline. Empty strings when the profile has no public headline.
pub fn choose_headline(
    profile: &Profile,
    job_type: JobType,
    seniority: Option<Seniority>,
) -> (String, String) {
    let id = preferred_headline_id(job_type, seniority);
    resolve(&profile.headlines, id)
        .map(|v| (v.id.clone(), v.text.clone()))
        .unwrap_or_default()
}

/// Summary sharing the headline id, else the first public summary.
pub fn choose_summary(profile: &Profile, headline_id: &str) -> (String, String) {
    resolve(&profile.summaries, headline_id)
        .map(|v| (v.id.clone(), v.text.clone()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(pairs: &[(&str, &str)]) -> Vec<Variant> {
        pairs
            .iter()
            .map(|(id, text)| Variant {
                id: id.to_string(),
                text: text.to_string(),
            })
            .collect()
    }

    fn profile() -> Profile {
        Profile {
            headlines: variants(&[
                ("_comment", "not a headline"),
                ("marketing_manager", "Marketing Manager"),
                ("growth_lead", "Growth Lead"),
                ("gpm_ai", "Group PM, AI"),
            ]),
            summaries: variants(&[("_note", "x"), ("growth_lead", "Growth summary")]),
            ..Default::default()
        }
    }

    #[test]
    fn test_job_type_picks_headline() {
        let (id, text) = choose_headline(&profile(), JobType::Growth, None);
        assert_eq!(id, "growth_lead");
        assert_eq!(text, "Growth Lead");
    }

    #[test]
    fn test_seniority_overrides_job_type() {
        let (id, _) = choose_headline(&profile(), JobType::Growth, Some(Seniority::Lead));
        assert_eq!(id, "gpm_ai");
    }

    #[test]
    fn test_missing_id_falls_back_to_first_public() {
        let (id, text) = choose_headline(&profile(), JobType::RevOps, None);
        assert_eq!(id, "marketing_manager");
        assert_eq!(text, "Marketing Manager");
    }

    #[test]
    fn test_summary_follows_headline_then_falls_back() {
        assert_eq!(choose_summary(&profile(), "growth_lead").1, "Growth summary");
        assert_eq!(choose_summary(&profile(), "gpm_ai").0, "growth_lead");
    }

    #[test]
    fn test_empty_profile_yields_empty_strings() {
        let empty = Profile::default();
        assert_eq!(
            choose_headline(&empty, JobType::General, None),
            (String::new(), String::new())
        );
        assert_eq!(choose_summary(&empty, "x"), (String::new(), String::new()));
    }
}
