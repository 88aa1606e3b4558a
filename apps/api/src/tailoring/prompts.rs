// Prompt templates for the force-match rewrite pass.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::NO_FABRICATION_INSTRUCTION;
use crate::models::job::{Job, Language};
use crate::models::profile::Experience;

/// Bullet rewrite template.
/// Replace: {no_fabrication}, {title}, {company}, {keywords}, {exp_company},
///          {exp_role}, {bullets}, {language}
pub const BULLET_REWRITE_TEMPLATE: &str = r#"{no_fabrication}

Align the candidate's experience with the target job through skill transposition.

TARGET JOB: {title} at {company}
JOB KEYWORDS: {keywords}

ORIGINAL EXPERIENCE:
Company: {exp_company}
Role: {exp_role}
Bullets:
{bullets}

GUIDELINES:
1. Check whether each original achievement demonstrates one of the job keywords.
2. If it does, rewrite the bullet using the job's terminology.
3. If it does not, keep the bullet or only improve its clarity.
4. Keep the same number of bullets.
5. Language: {language}

Return ONLY a JSON array of strings: ["bullet 1", "bullet 2", ...]"#;

/// Summary rewrite template.
/// Replace: {no_fabrication}, {title}, {company}, {keywords}, {summary}, {language}
pub const SUMMARY_REWRITE_TEMPLATE: &str = r#"{no_fabrication}

Rewrite this professional summary for the target job in at most four sentences.

TARGET JOB: {title} at {company}
JOB KEYWORDS: {keywords}

CURRENT SUMMARY:
{summary}

Language: {language}"#;

fn language_label(language: Language) -> &'static str {
    match language {
        Language::Pt => "PT",
        Language::En => "EN",
    }
}

fn keyword_list(job: &Job) -> String {
    if job.requirement_tags.is_empty() {
        "general".to_string()
    } else {
        job.requirement_tags
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn build_bullet_prompt(job: &Job, experience: &Experience, bullets: &[String]) -> String {
    let bullet_lines = bullets
        .iter()
        .map(|b| format!("- {b}"))
        .collect::<Vec<_>>()
        .join("\n");

    BULLET_REWRITE_TEMPLATE
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION)
        .replace("{title}", &job.title)
        .replace("{company}", &job.company)
        .replace("{keywords}", &keyword_list(job))
        .replace("{exp_company}", &experience.company)
        .replace("{exp_role}", &experience.role)
        .replace("{bullets}", &bullet_lines)
        .replace("{language}", language_label(job.language))
}

pub fn build_summary_prompt(job: &Job, summary: &str) -> String {
    SUMMARY_REWRITE_TEMPLATE
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION)
        .replace("{title}", &job.title)
        .replace("{company}", &job.company)
        .replace("{keywords}", &keyword_list(job))
        .replace("{summary}", summary)
        .replace("{language}", language_label(job.language))
}
