use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job::Language;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeExperience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeEducation {
    pub institution: String,
    pub program: String,
    pub year: String,
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProject {
    pub name: String,
    pub bullet: String,
}

/// Fully resolved résumé handed to the renderer (HTML/PDF live outside this service).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeOutput {
    pub name: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub phone: String,
    pub headline: String,
    pub summary: String,
    /// Timeline order, most recent first.
    pub experiences: Vec<ResumeExperience>,
    pub education: Vec<ResumeEducation>,
    pub skills: Vec<String>,
    pub ai_projects: Vec<ResumeProject>,
    pub language: Language,
    pub generated_at: DateTime<Utc>,
    pub job_url: String,
    pub match_score: u32,
}
