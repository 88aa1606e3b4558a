pub mod job;
pub mod matching;
pub mod profile;
pub mod resume;
