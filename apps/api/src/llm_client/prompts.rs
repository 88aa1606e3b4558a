// Cross-cutting prompt fragments. Each feature that calls the model keeps its
// own prompts.rs next to it and pulls shared pieces from here.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for plain-prose replies.
pub const PROSE_ONLY_SYSTEM: &str = "You are a senior résumé writer. \
    Reply with the requested text only: no preamble, no quotes, no markdown.";

/// Appended to every rewrite prompt.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    CRITICAL: Do NOT invent facts, employers, tools, or numbers. \
    Keep every metric exactly as written. \
    You may only reword existing achievements using the job's terminology \
    when the original achievement genuinely demonstrates that skill. \
    If there is no correlation, keep the original wording.";
