//! Analysis — the three LLM-backed steps of the matching pipeline:
//! resume analysis, job-description analysis, and match scoring.

pub mod extractors;
pub mod matcher;
pub mod prompts;
