use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every fatal failure in the pipeline funnels into one of these variants.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Document error: {0}")]
    Document(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
