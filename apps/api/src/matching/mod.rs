//! Matching & selection engine.
//!
//! Pure, synchronous, side-effect free: reads an immutable `Profile` and a
//! `Job` and builds a fresh `MatchResult` on every call.

pub mod coverage;
pub mod engine;
pub mod handlers;
pub mod overlap;
pub mod scoring;
pub mod selection;

use thiserror::Error;

pub use engine::Matcher;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Profile has no experiences to match against")]
    EmptyProfile,
}
