//! Report writing — persists a `MatchResult` under the results directory.
//!
//! One file per source document, named after the document with the extension
//! stripped. Re-runs overwrite the previous report; there is no versioning.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::score::MatchResult;

/// Derives the report identifier from the source document path:
/// the basename with its extension stripped.
pub fn document_id(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("document")
        .to_string()
}

/// Writes the match report to `<results_dir>/<doc_id>.txt`.
///
/// If a score is present the file starts with a `MATCH SCORE: <n>%` line and
/// a blank line; the raw reply follows either way. The directory is created
/// if missing.
pub fn write_report(
    results_dir: &Path,
    doc_id: &str,
    result: &MatchResult,
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(results_dir)?;

    let path = results_dir.join(format!("{doc_id}.txt"));

    let mut body = String::new();
    if let Some(score) = result.score {
        body.push_str(&format!("MATCH SCORE: {score}%\n\n"));
    }
    body.push_str(&result.raw);

    fs::write(&path, body)?;

    info!("Result exported to {}", path.display());
    Ok(path)
}
