mod analysis;
mod config;
mod document;
mod errors;
mod job;
mod llm_client;
mod pipeline;
mod report;
mod score;

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, RESULTS_DIR, RESUME_PATH};
use crate::llm_client::LlmClient;
use crate::pipeline::run_match_pipeline;
use crate::report::{document_id, write_report};
use crate::score::extract_match_result;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jdmatch v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client — built once, passed by reference everywhere
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let resume_path = Path::new(RESUME_PATH);
    let resume_text = document::extract_text(resume_path)?;

    let reply = run_match_pipeline(&llm, &resume_text, job::JOB_DESCRIPTION).await?;

    let result = extract_match_result(&reply);
    match result.score {
        Some(score) => println!("MATCH SCORE: {score}%"),
        None => println!("Unable to determine match score."),
    }
    println!("{}", result.raw);

    let output_path = write_report(Path::new(RESULTS_DIR), &document_id(resume_path), &result)?;
    println!("Result exported to {}", output_path.display());

    Ok(())
}
