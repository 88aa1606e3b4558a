//! Scrape validation: advisory quality checks on a posting before it is matched.
//!
//! A failing check never blocks interpretation; the checklist is surfaced to the
//! caller so a bad scrape can be re-fetched.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::extraction::interpreter::interpret;
use crate::extraction::patterns::TABLES;
use crate::models::job::Job;

const MIN_TITLE_CHARS: usize = 3;
const MIN_COMPANY_CHARS: usize = 2;
const MIN_DESCRIPTION_CHARS: usize = 100;

/// Phrases that open a requirements section, Portuguese and English.
const REQUIREMENT_MARKERS: &[&str] = &[
    "requisitos",
    "requirements",
    "qualificações",
    "qualifications",
    "o que buscamos",
    "what we're looking for",
    "what you'll need",
    "você precisa",
    "must have",
    "desejável",
    "nice to have",
    "experiência com",
    "experience with",
];

static REQUIREMENT_MARKER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    REQUIREMENT_MARKERS
        .iter()
        .map(|m| {
            Regex::new(&format!(r"(?i){}", regex::escape(m)))
                .expect("escaped literal is always a valid regex")
        })
        .collect()
});

/// A raw posting as handed over by a scraper or a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub location: String,
    /// Pre-extracted tags. When present they replace the interpreter's tags.
    #[serde(default)]
    pub requirement_tags: Option<Vec<String>>,
}

/// Outcome of each individual check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobValidation {
    pub has_title: bool,
    pub has_company: bool,
    pub has_description: bool,
    pub has_requirements: bool,
    pub language_detected: bool,
}

impl JobValidation {
    pub fn check(posting: &JobPosting) -> Self {
        let description = posting.description.as_str();
        Self {
            has_title: posting.title.trim().chars().count() > MIN_TITLE_CHARS,
            has_company: posting.company.trim().chars().count() > MIN_COMPANY_CHARS,
            has_description: description.trim().chars().count() > MIN_DESCRIPTION_CHARS,
            has_requirements: REQUIREMENT_MARKER_RES
                .iter()
                .any(|re| re.is_match(description)),
            language_detected: TABLES
                .pt_markers
                .iter()
                .chain(TABLES.en_markers.iter())
                .any(|re| re.is_match(description)),
        }
    }

    fn items(&self) -> [(&'static str, bool); 5] {
        [
            ("title", self.has_title),
            ("company", self.has_company),
            ("description", self.has_description),
            ("requirements section", self.has_requirements),
            ("language", self.language_detected),
        ]
    }

    pub fn is_valid(&self) -> bool {
        self.items().iter().all(|(_, ok)| *ok)
    }

    /// Names of the checks that did not pass.
    pub fn failures(&self) -> Vec<&'static str> {
        self.items()
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn checklist(&self) -> String {
        self.items()
            .iter()
            .map(|(name, ok)| format!("[{}] {name}", if *ok { "x" } else { " " }))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Stable id: first 12 hex chars of SHA-256 over title, company and url.
pub fn job_id(title: &str, company: &str, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(company.as_bytes());
    hasher.update(url.as_bytes());
    let mut hex = String::new();
    for byte in hasher.finalize() {
        let _ = write!(hex, "{byte:02x}");
    }
    hex.truncate(12);
    hex
}

impl Job {
    /// Validates and interprets a raw posting. Always returns a job.
    pub fn from_posting(posting: JobPosting) -> (Job, JobValidation) {
        let validation = JobValidation::check(&posting);
        if !validation.is_valid() {
            warn!(
                "Posting '{}' failed validation: {}",
                posting.title,
                validation.failures().join(", ")
            );
        }

        let interpretation = interpret(&posting.title, &posting.description);
        let requirement_tags: BTreeSet<String> = match posting.requirement_tags {
            Some(tags) => Job::tag_set(tags),
            None => interpretation.requirement_tags,
        };

        let job = Job {
            id: job_id(&posting.title, &posting.company, &posting.url),
            title: posting.title,
            company: posting.company,
            description: posting.description,
            url: posting.url,
            location: posting.location,
            language: interpretation.language,
            seniority: interpretation.seniority,
            job_type: interpretation.job_type,
            requirement_tags,
            soft_skills: interpretation.soft_skills,
            work_mode: interpretation.work_mode,
            low_confidence: interpretation.low_confidence,
        };

        (job, validation)
    }
}
