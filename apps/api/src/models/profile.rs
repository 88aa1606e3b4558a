//! Master profile data model: the candidate's single source of truth.
//!
//! Field aliases accept the Portuguese-keyed profile files (`experiencias`,
//! `empresa`, `cargo`, ...) alongside the English keys.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Experiences
// ────────────────────────────────────────────────────────────────────────────

/// Whether an experience is part of the narrative spine or opportunistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceCategory {
    Core,
    #[default]
    Contextual,
}

impl ExperienceCategory {
    pub fn is_core(self) -> bool {
        self == ExperienceCategory::Core
    }
}

/// `"core"` (any case) is core; every other value, including null, is contextual.
impl<'de> Deserialize<'de> for ExperienceCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) if s.trim().eq_ignore_ascii_case("core") => ExperienceCategory::Core,
            _ => ExperienceCategory::Contextual,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Experience {
    pub id: u32,
    #[serde(alias = "empresa", default)]
    pub company: String,
    #[serde(alias = "cargo", default)]
    pub role: String,
    #[serde(alias = "tier", default)]
    pub category: ExperienceCategory,
    #[serde(alias = "periodo", default)]
    pub period: Option<String>,
    #[serde(alias = "localizacao", default)]
    pub location: Option<String>,
    #[serde(
        alias = "bullets_execution_first",
        default,
        deserialize_with = "lenient_bullets"
    )]
    pub bullets: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
    #[serde(alias = "stack_tecnica", default, deserialize_with = "null_as_empty")]
    pub stack: Vec<String>,
    /// Derived by the profile store after loading; never read from the file.
    #[serde(skip)]
    pub tags: BTreeSet<String>,
}

/// Ordering signal for "most recent first". Compared field by field:
/// end year first, then id (higher id = more recent in profile files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Recency {
    pub end_year: u32,
    pub id: u32,
}

/// Sentinel end year for ongoing positions; outranks any real year.
pub const ONGOING_END_YEAR: u32 = u32::MAX;

static ONGOING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(present|presente|current|atual|now)\b").expect("valid ongoing regex")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("valid year regex"));

/// Extracts the end year from a free-text period such as "2019 - 2023" or "Mar 2021 – Present".
/// Unknown periods rank lowest (0).
pub fn end_year_of(period: Option<&str>) -> u32 {
    let Some(period) = period else {
        return 0;
    };
    if ONGOING_RE.is_match(period) {
        return ONGOING_END_YEAR;
    }
    YEAR_RE
        .captures_iter(period)
        .filter_map(|c| c.get(1)?.as_str().parse::<u32>().ok())
        .last()
        .unwrap_or(0)
}

impl Experience {
    pub fn recency(&self) -> Recency {
        Recency {
            end_year: end_year_of(self.period.as_deref()),
            id: self.id,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Headlines / summaries / skills / header
// ────────────────────────────────────────────────────────────────────────────

/// A named text variant (headline or summary), kept in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    pub id: String,
    pub text: String,
}

impl Variant {
    /// Ids starting with `_` are comments in profile files, not real variants.
    pub fn is_public(&self) -> bool {
        !self.id.starts_with('_')
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(alias = "telefone", default)]
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CandidateLocation {
    Text(String),
    Structured {
        #[serde(default)]
        display: Option<String>,
        #[serde(alias = "cidade", default)]
        city: Option<String>,
        #[serde(alias = "estado", default)]
        state: Option<String>,
    },
}

impl Default for CandidateLocation {
    fn default() -> Self {
        CandidateLocation::Text(String::new())
    }
}

impl CandidateLocation {
    pub fn display(&self) -> String {
        match self {
            CandidateLocation::Text(s) => s.clone(),
            CandidateLocation::Structured {
                display: Some(d), ..
            } => d.clone(),
            CandidateLocation::Structured { city, state, .. } => format!(
                "{}, {}",
                city.as_deref().unwrap_or_default(),
                state.as_deref().unwrap_or_default()
            ),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(alias = "nome_completo", default)]
    pub full_name: String,
    #[serde(alias = "localizacao", default)]
    pub location: CandidateLocation,
    #[serde(alias = "contato", default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    #[serde(alias = "instituicao", default)]
    pub institution: String,
    #[serde(alias = "programa", default)]
    pub program: String,
    #[serde(alias = "ano", default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(alias = "destaque", default)]
    pub highlight: String,
    #[serde(default)]
    pub tier: ExperienceCategory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiProject {
    #[serde(alias = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub bullet: String,
}

/// The loaded master profile. Immutable once the store has derived tags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(alias = "candidato", default)]
    pub candidate: Candidate,
    #[serde(alias = "headlines_variants", default, deserialize_with = "ordered_variants")]
    pub headlines: Vec<Variant>,
    #[serde(alias = "summaries_variants", default, deserialize_with = "ordered_variants")]
    pub summaries: Vec<Variant>,
    #[serde(alias = "experiencias", alias = "experience", default)]
    pub experiences: Vec<Experience>,
    #[serde(alias = "formacao", default)]
    pub education: Vec<Education>,
    /// Flat skill list; categorized files are flattened in file order.
    #[serde(default, deserialize_with = "flatten_skills")]
    pub skills: Vec<String>,
    #[serde(alias = "projetos_ai", default)]
    pub ai_projects: Vec<AiProject>,
}

// ────────────────────────────────────────────────────────────────────────────
// Deserialization helpers
// ────────────────────────────────────────────────────────────────────────────

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Bullets as strings. STAR objects `{action, result}` become
/// `"{action}. Result: {result}"`; any other entry is skipped.
fn lenient_bullets<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Object(obj) => {
                let field = |key: &str| obj.get(key).and_then(Value::as_str).map(str::trim);
                match (field("action"), field("result")) {
                    (Some(action), Some(result)) if !result.is_empty() => {
                        Some(format!("{}. Result: {result}", action.trim_end_matches('.')))
                    }
                    (Some(action), _) => Some(action.to_string()),
                    _ => None,
                }
            }
            _ => None,
        })
        .collect())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Reads a JSON object of `id -> text` into a Vec, preserving key order.
/// Non-string values are skipped.
fn ordered_variants<'de, D>(deserializer: D) -> Result<Vec<Variant>, D::Error>
where
    D: Deserializer<'de>,
{
    struct VariantsVisitor;

    impl<'de> Visitor<'de> for VariantsVisitor {
        type Value = Vec<Variant>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping variant ids to text")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::new();
            while let Some((id, value)) = map.next_entry::<String, Value>()? {
                if let Value::String(text) = value {
                    out.push(Variant { id, text });
                }
            }
            Ok(out)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(VariantsVisitor)
}

fn skill_names(value: Value, out: &mut Vec<String>) {
    if let Value::Array(items) = value {
        for item in items {
            match item {
                Value::String(s) => out.push(s),
                Value::Object(obj) => {
                    if let Some(Value::String(name)) = obj.get("name") {
                        out.push(name.clone());
                    }
                }
                _ => {}
            }
        }
    }
}

/// Accepts either a flat list of skills or an object of category -> list.
/// Categories starting with `_` are comments and skipped.
fn flatten_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SkillsVisitor;

    impl<'de> Visitor<'de> for SkillsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a skill list or an object of skill categories")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut items = Vec::new();
            while let Some(item) = seq.next_element::<Value>()? {
                items.push(item);
            }
            let mut out = Vec::new();
            skill_names(Value::Array(items), &mut out);
            Ok(out)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::new();
            while let Some((category, value)) = map.next_entry::<String, Value>()? {
                if category.starts_with('_') {
                    continue;
                }
                skill_names(value, &mut out);
            }
            Ok(out)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(SkillsVisitor)
}
