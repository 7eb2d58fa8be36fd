//! Pipeline — explicit linear orchestration of the three analysis steps.
//!
//! Order is fixed: analyze the resume, analyze the job description, then
//! score the match with both summaries. Each step blocks on the previous
//! one's output; any step failing aborts the run.

use tracing::info;

use crate::analysis::extractors::{extract_jd_info, extract_resume_info};
use crate::analysis::matcher::score_match;
use crate::errors::AppError;
use crate::llm_client::CompletionBackend;

/// Runs the full matching pipeline and returns the scorer's raw reply.
pub async fn run_match_pipeline(
    llm: &dyn CompletionBackend,
    resume_text: &str,
    jd_text: &str,
) -> Result<String, AppError> {
    info!("Analyzing resume ({} chars)", resume_text.len());
    let resume_info = extract_resume_info(llm, resume_text).await?;

    info!("Analyzing job description ({} chars)", jd_text.len());
    let jd_info = extract_jd_info(llm, jd_text).await?;

    info!("Scoring resume against job description");
    let reply = score_match(llm, &resume_info, &jd_info).await?;

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::prompts::{JD_EXTRACT_SYSTEM, MATCH_SYSTEM, RESUME_EXTRACT_SYSTEM};
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays a fixed sequence of replies and records every call it saw.
    struct ScriptedBackend {
        replies: Mutex<VecDeque<String>>,
        calls: Mutex<Vec<(String, String)>>, // (prompt, system)
    }

    impl ScriptedBackend {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), system.to_string()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_pipeline_calls_steps_in_fixed_order() {
        let backend = ScriptedBackend::new(&[
            "resume summary",
            "jd summary",
            "MATCH SCORE: 82% - Strong alignment with mobile skills",
        ]);

        let reply = run_match_pipeline(&backend, "raw resume text", "raw jd text")
            .await
            .unwrap();

        assert_eq!(reply, "MATCH SCORE: 82% - Strong alignment with mobile skills");

        let calls = backend.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].1, RESUME_EXTRACT_SYSTEM);
        assert_eq!(calls[1].1, JD_EXTRACT_SYSTEM);
        assert_eq!(calls[2].1, MATCH_SYSTEM);
    }

    #[tokio::test]
    async fn test_pipeline_threads_summaries_into_scorer_prompt() {
        let backend = ScriptedBackend::new(&[
            "SUMMARY-OF-RESUME",
            "SUMMARY-OF-JD",
            "MATCH SCORE: 50% - partial",
        ]);

        run_match_pipeline(&backend, "resume", "jd").await.unwrap();

        let calls = backend.calls();
        let scorer_prompt = &calls[2].0;
        assert!(scorer_prompt.contains("SUMMARY-OF-RESUME"));
        assert!(scorer_prompt.contains("SUMMARY-OF-JD"));
        // The scorer sees summaries, not the raw documents
        assert!(!scorer_prompt.contains("raw resume"));
    }

    #[tokio::test]
    async fn test_pipeline_propagates_backend_failure() {
        // Only one reply scripted: the second step fails and aborts the run
        let backend = ScriptedBackend::new(&["resume summary"]);

        let result = run_match_pipeline(&backend, "resume", "jd").await;
        assert!(matches!(result, Err(AppError::Llm(LlmError::EmptyContent))));
        assert_eq!(backend.calls().len(), 2);
    }
}
