//! Analysis requesters — forward raw resume / JD text to the completion
//! backend and return its summary. Inputs are truncated before sending so an
//! oversized document cannot blow the prompt budget.

use crate::analysis::prompts::{JD_EXTRACT_SYSTEM, RESUME_EXTRACT_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::CompletionBackend;

/// Maximum number of characters of raw text forwarded to the LLM per step.
const MAX_EXTRACT_CHARS: usize = 1000;

/// Asks the LLM for the key details of a resume.
pub async fn extract_resume_info(
    llm: &dyn CompletionBackend,
    resume_text: &str,
) -> Result<String, AppError> {
    let input = truncate_chars(resume_text, MAX_EXTRACT_CHARS);
    Ok(llm.complete(input, RESUME_EXTRACT_SYSTEM).await?)
}

/// Asks the LLM for the key details of a job description.
pub async fn extract_jd_info(
    llm: &dyn CompletionBackend,
    jd_text: &str,
) -> Result<String, AppError> {
    let input = truncate_chars(jd_text, MAX_EXTRACT_CHARS);
    Ok(llm.complete(input, JD_EXTRACT_SYSTEM).await?)
}

/// Truncates to at most `max_chars` characters, never splitting a char.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
