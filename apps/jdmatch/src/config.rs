use anyhow::{Context, Result};

/// Input document path. Fixed for now — there is no CLI flag surface yet.
pub const RESUME_PATH: &str = "./JeffPhan_MobileDevelop.pdf";

/// Directory the match report is written into. Created on demand.
pub const RESULTS_DIR: &str = "./results";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing, before any processing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
