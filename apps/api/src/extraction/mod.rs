// Job posting analysis: static pattern tables, the interpreter that applies
// them, and advisory scrape validation.

pub mod handlers;
pub mod interpreter;
pub mod patterns;
pub mod validation;
