use std::path::Path;

use tracing::info;

use crate::errors::AppError;

/// Extracts plain text from a PDF document.
/// A missing or unreadable file is fatal — there is nothing to score without it.
pub fn extract_text(path: &Path) -> Result<String, AppError> {
    let text = pdf_extract::extract_text(path).map_err(|e| {
        AppError::Document(format!(
            "failed to extract text from '{}': {e}",
            path.display()
        ))
    })?;

    info!(
        "Extracted {} chars of text from '{}'",
        text.len(),
        path.display()
    );
    Ok(text)
}
