//! Match scoring — composes the fixed-format scoring prompt from the two
//! analysis summaries and returns the model's raw reply.
//!
//! The reply format (`MATCH SCORE: <score>% - <reason>`) is instructed, not
//! enforced: the model may still answer free-form, and `score` handles that.

use crate::analysis::prompts::{MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::CompletionBackend;

/// Asks the LLM to score how well the resume matches the job.
/// Arguments are passed through unvalidated; callers truncate upstream.
pub async fn score_match(
    llm: &dyn CompletionBackend,
    resume_info: &str,
    jd_info: &str,
) -> Result<String, AppError> {
    let prompt = build_match_prompt(resume_info, jd_info);
    Ok(llm.complete(&prompt, MATCH_SYSTEM).await?)
}

fn build_match_prompt(resume_info: &str, jd_info: &str) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace("{resume_info}", resume_info)
        .replace("{jd_info}", jd_info)
}
