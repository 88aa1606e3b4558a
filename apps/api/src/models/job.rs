use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Dominant language of a posting. Drives which profile variant a caller loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Pt,
    En,
}

/// Seniority detected from the posting. Declared lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Manager,
    Lead,
}

impl Seniority {
    /// Leadership-tier roles get an extra advisory warning about bullet vagueness.
    pub fn is_leadership(self) -> bool {
        matches!(self, Seniority::Lead | Seniority::Manager)
    }
}

/// Job family, used to pick a headline variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Marketing,
    Growth,
    Branding,
    AiOps,
    Product,
    RevOps,
    Content,
    Crm,
    B2b,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

/// A job posting plus everything the extractor derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub seniority: Option<Seniority>,
    #[serde(default)]
    pub job_type: JobType,
    /// Normalized requirement tags. Sorted, deduplicated.
    #[serde(default)]
    pub requirement_tags: BTreeSet<String>,
    #[serde(default)]
    pub soft_skills: BTreeSet<String>,
    #[serde(default)]
    pub work_mode: Option<WorkMode>,
    /// Set when the text was too short for the extractor to trust.
    #[serde(default)]
    pub low_confidence: bool,
}

/// Lower-cases and trims a raw tag; `None` for tags that are empty after trimming.
pub fn normalize_requirement_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

impl Job {
    /// Builds a deduplicated tag set from arbitrary caller-supplied tags.
    pub fn tag_set<I, S>(tags: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .filter_map(|t| normalize_requirement_tag(t.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_set_dedups_and_normalizes() {
        let tags = Job::tag_set(["Python", " python ", "SQL", ""]);
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("python"));
        assert!(tags.contains("sql"));
    }

    #[test]
    fn test_seniority_serde_snake_case() {
        let s: Seniority = serde_json::from_str(r#""lead""#).unwrap();
        assert_eq!(s, Seniority::Lead);
        assert!(s.is_leadership());
        assert!(!Seniority::Senior.is_leadership());
    }

    #[test]
    fn test_job_type_serde_ai_ops() {
        let json = serde_json::to_string(&JobType::AiOps).unwrap();
        assert_eq!(json, r#""ai_ops""#);
    }

    #[test]
    fn test_job_deserializes_with_minimal_fields() {
        let job: Job = serde_json::from_str(
            r#"{"id":"j1","title":"PM","company":"Acme","description":"..."}"#,
        )
        .unwrap();
        assert_eq!(job.language, Language::Pt);
        assert_eq!(job.job_type, JobType::General);
        assert!(job.requirement_tags.is_empty());
        assert!(job.seniority.is_none());
    }
}
