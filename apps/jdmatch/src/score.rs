//! Result extraction — pulls the numeric match score out of a free-form
//! model reply.

use once_cell::sync::Lazy;
use regex::Regex;

/// `MATCH SCORE: <digits>%`, label matched case-insensitively.
static SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)MATCH SCORE:\s*(\d+)%").unwrap());

/// The outcome of one pipeline run. Created once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Parsed score, absent when the reply did not contain the labeled
    /// pattern. Not bounds-checked: the model is instructed to stay in
    /// 0-100 but an out-of-range value is accepted as-is.
    pub score: Option<u32>,
    /// The full reply text, always retained verbatim (trimmed).
    pub raw: String,
}

/// Extracts a `MatchResult` from the raw scorer reply.
/// Only the first labeled occurrence counts.
pub fn extract_match_result(reply: &str) -> MatchResult {
    let raw = reply.trim().to_string();
    let score = SCORE_RE
        .captures(&raw)
        .and_then(|caps| caps[1].parse::<u32>().ok());
    MatchResult { score, raw }
}
