//! Static pattern dictionaries for the job interpreter.
//!
//! Each entry maps a canonical key to its literal surface forms. Matching is
//! case-insensitive and whole-word; forms are compiled once into a read-only
//! `PatternTable` and never mutated at runtime.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::job::{JobType, Seniority, WorkMode};

pub type PatternEntry<K> = (K, &'static [&'static str]);

/// Hard skills. Hits become requirement tags.
pub const HARD_SKILL_PATTERNS: &[PatternEntry<&str>] = &[
    // Marketing / Growth
    ("gtm", &["gtm", "go-to-market", "go to market"]),
    ("crm", &["crm", "hubspot", "salesforce", "pipedrive"]),
    (
        "marketing_automation",
        &["marketing automation", "automação de marketing", "automation"],
    ),
    ("seo", &["seo", "search engine optimization"]),
    ("sem", &["search engine marketing", "paid search"]),
    ("google_ads", &["google ads", "adwords", "google advertising"]),
    (
        "meta_ads",
        &["meta ads", "facebook ads", "instagram ads", "fb ads"],
    ),
    (
        "analytics",
        &["analytics", "ga4", "google analytics", "data analytics"],
    ),
    (
        "ab_testing",
        &["a/b testing", "ab testing", "teste ab", "split testing"],
    ),
    (
        "cro",
        &["cro", "conversion rate optimization", "otimização de conversão"],
    ),
    ("growth", &["growth", "growth hacking", "growth marketing"]),
    ("brandformance", &["brandformance", "brand performance"]),
    ("revops", &["revops", "revenue operations"]),
    ("abm", &["abm", "account based marketing"]),
    (
        "demand_gen",
        &["demand generation", "demand gen", "geração de demanda"],
    ),
    ("lead_gen", &["lead generation", "lead gen", "geração de leads"]),
    ("inbound", &["inbound", "inbound marketing"]),
    ("outbound", &["outbound", "outbound marketing"]),
    (
        "content_marketing",
        &["content marketing", "marketing de conteúdo"],
    ),
    ("influencer", &["influencer", "influenciador"]),
    ("branding", &["branding", "brand strategy"]),
    ("positioning", &["positioning", "posicionamento"]),
    (
        "product_marketing",
        &["product marketing", "pmm", "marketing de produto"],
    ),
    // AI / Tech
    (
        "ai",
        &["ai", "artificial intelligence", "inteligência artificial", "ia"],
    ),
    (
        "llm",
        &["llm", "large language model", "gpt", "claude", "gemini"],
    ),
    (
        "ml",
        &["ml", "machine learning", "aprendizado de máquina"],
    ),
    ("python", &["python"]),
    ("sql", &["sql", "mysql", "postgresql", "postgres"]),
    ("docker", &["docker", "container"]),
    ("n8n", &["n8n", "n8n.io"]),
    ("make", &["make.com", "integromat"]),
    ("zapier", &["zapier"]),
    ("rag", &["rag", "retrieval augmented"]),
    (
        "prompt_engineering",
        &["prompt engineering", "engenharia de prompt"],
    ),
    // Data
    (
        "data_analysis",
        &["data analysis", "análise de dados", "data-driven"],
    ),
    (
        "dashboard",
        &["dashboard", "dashboards", "tableau", "power bi", "looker"],
    ),
    ("excel", &["excel", "planilhas", "spreadsheet"]),
    ("bi", &["bi", "business intelligence"]),
    // Management
    (
        "project_management",
        &["project management", "gestão de projetos", "pm"],
    ),
    (
        "stakeholder_management",
        &[
            "stakeholder management",
            "stakeholder engagement",
            "gestão de stakeholders",
        ],
    ),
    ("agile", &["agile", "ágil", "scrum", "kanban"]),
    ("okrs", &["okr", "okrs", "objectives and key results"]),
    ("kpis", &["kpi", "kpis", "indicadores"]),
    (
        "p_and_l",
        &["p&l", "p/l", "profit and loss", "lucros e perdas"],
    ),
    ("budget", &["budget", "orçamento", "budget management"]),
];

/// Business metrics that applicant tracking systems look for. Hits become requirement tags.
pub const METRIC_PATTERNS: &[PatternEntry<&str>] = &[
    ("roi", &["roi", "return on investment"]),
    ("cac", &["cac", "customer acquisition cost"]),
    ("ltv", &["ltv", "lifetime value"]),
    ("mrr", &["mrr", "monthly recurring revenue"]),
    ("arr", &["arr", "annual recurring revenue"]),
    ("nps", &["nps", "net promoter score"]),
    ("csat", &["csat", "customer satisfaction"]),
];

/// Soft skills. Reported on the job, never used as requirement tags.
pub const SOFT_SKILL_PATTERNS: &[PatternEntry<&str>] = &[
    (
        "leadership",
        &["liderança", "leadership", "líder", "leader", "liderar"],
    ),
    (
        "communication",
        &["comunicação", "communication", "apresentação", "presentation"],
    ),
    (
        "teamwork",
        &["trabalho em equipe", "teamwork", "equipe", "team"],
    ),
    (
        "stakeholder",
        &["stakeholder", "stakeholders", "partes interessadas"],
    ),
    ("negotiation", &["negociação", "negotiation", "negociar"]),
    (
        "strategic",
        &["estratégico", "strategic", "estratégia", "strategy"],
    ),
    ("analytical", &["analítico", "analytical", "análise crítica"]),
    (
        "problem_solving",
        &["resolução de problemas", "problem solving"],
    ),
    ("proactive", &["proativo", "proactive", "iniciativa"]),
    (
        "adaptable",
        &["adaptável", "adaptable", "flexível", "flexible"],
    ),
];

/// Seniority levels in priority order: the first level with any hit wins.
pub const SENIORITY_PATTERNS: &[PatternEntry<Seniority>] = &[
    (
        Seniority::Lead,
        &[
            "lead",
            "head",
            "diretor",
            "director",
            "principal",
            "vp",
            "vice president",
        ],
    ),
    (
        Seniority::Manager,
        &["manager", "gerente", "coordenador", "coordinator", "supervisor"],
    ),
    (
        Seniority::Senior,
        &["senior", "sênior", "sr", "experienced", "experiente"],
    ),
    (
        Seniority::Mid,
        &["pleno", "mid", "mid-level", "intermediário"],
    ),
    (
        Seniority::Junior,
        &[
            "junior",
            "júnior",
            "jr",
            "entry level",
            "iniciante",
            "trainee",
            "estágio",
            "estagiário",
        ],
    ),
];

/// Job families. Order is the tie-break priority for equal hit counts.
pub const JOB_TYPE_PATTERNS: &[PatternEntry<JobType>] = &[
    (JobType::Marketing, &["marketing", "mkt", "comunicação"]),
    (
        JobType::Growth,
        &["growth", "aquisição", "acquisition", "performance"],
    ),
    (JobType::Branding, &["branding", "brand", "marca"]),
    (
        JobType::AiOps,
        &["ai", "ia", "automation", "automação", "llm"],
    ),
    (
        JobType::Product,
        &["produto", "product", "pm", "apm", "gpm"],
    ),
    (
        JobType::RevOps,
        &["revops", "revenue", "sales ops", "operações"],
    ),
    (
        JobType::Content,
        &["content", "conteúdo", "editorial", "mídias sociais"],
    ),
    (
        JobType::Crm,
        &["crm", "lifecycle", "retention", "retenção"],
    ),
    (JobType::B2b, &["b2b", "enterprise", "corporativo"]),
];

/// Work arrangement, first family with a hit wins.
pub const WORK_MODE_PATTERNS: &[PatternEntry<WorkMode>] = &[
    (WorkMode::Remote, &["remote", "remoto", "home office"]),
    (WorkMode::Hybrid, &["hybrid", "híbrido"]),
    (WorkMode::Onsite, &["onsite", "on-site", "presencial"]),
];

pub const PT_MARKERS: &[&str] = &[
    "você",
    "será",
    "nosso",
    "nossa",
    "equipe",
    "empresa",
    "requisitos",
    "responsabilidades",
];

pub const EN_MARKERS: &[&str] = &[
    "you",
    "will",
    "our",
    "team",
    "company",
    "requirements",
    "responsibilities",
];

// ────────────────────────────────────────────────────────────────────────────
// Compiled lookup tables
// ────────────────────────────────────────────────────────────────────────────

/// Builds a case-insensitive whole-word matcher for one literal surface form.
fn whole_word(form: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(form)))
        .expect("escaped literal is always a valid regex")
}

/// Read-only table of compiled patterns keyed by canonical key, in source order.
pub struct PatternTable<K> {
    entries: Vec<(K, Vec<Regex>)>,
}

impl<K: Copy + 'static> PatternTable<K> {
    pub fn compile(source: &[PatternEntry<K>]) -> Self {
        Self {
            entries: source
                .iter()
                .map(|(key, forms)| (*key, forms.iter().map(|f| whole_word(f)).collect()))
                .collect(),
        }
    }

    /// Keys with at least one hit, in table order. Each key appears once.
    pub fn matching_keys<'a>(&'a self, text: &'a str) -> impl Iterator<Item = K> + 'a {
        self.entries
            .iter()
            .filter(move |(_, patterns)| patterns.iter().any(|p| p.is_match(text)))
            .map(|(key, _)| *key)
    }

    /// First key (in table order) with any hit.
    pub fn first_match(&self, text: &str) -> Option<K> {
        self.matching_keys(text).next()
    }

    /// Total hit count per key across all of its forms, in table order.
    pub fn hit_counts(&self, text: &str) -> Vec<(K, usize)> {
        self.entries
            .iter()
            .map(|(key, patterns)| {
                let hits = patterns.iter().map(|p| p.find_iter(text).count()).sum();
                (*key, hits)
            })
            .collect()
    }
}

pub struct Tables {
    pub hard_skills: PatternTable<&'static str>,
    pub metrics: PatternTable<&'static str>,
    pub soft_skills: PatternTable<&'static str>,
    pub seniority: PatternTable<Seniority>,
    pub job_types: PatternTable<JobType>,
    pub work_modes: PatternTable<WorkMode>,
    pub pt_markers: Vec<Regex>,
    pub en_markers: Vec<Regex>,
}

pub static TABLES: LazyLock<Tables> = LazyLock::new(|| Tables {
    hard_skills: PatternTable::compile(HARD_SKILL_PATTERNS),
    metrics: PatternTable::compile(METRIC_PATTERNS),
    soft_skills: PatternTable::compile(SOFT_SKILL_PATTERNS),
    seniority: PatternTable::compile(SENIORITY_PATTERNS),
    job_types: PatternTable::compile(JOB_TYPE_PATTERNS),
    work_modes: PatternTable::compile(WORK_MODE_PATTERNS),
    pt_markers: PT_MARKERS.iter().map(|m| whole_word(m)).collect(),
    en_markers: EN_MARKERS.iter().map(|m| whole_word(m)).collect(),
});
