mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Environment variable holding the completion API key. The key never
/// lives in the YAML file.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Loads configuration from `CONFIG_PATH` (default `config.yaml`). A
/// missing file falls back to defaults; a missing API key is fatal.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => parse(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(e) => return Err(e.into()),
    };

    config.llm.api_key = env::var(API_KEY_VAR)
        .map_err(|_| Error::config(format!("Missing {} in environment", API_KEY_VAR)))?;

    Ok(config)
}

/// Parses a YAML config document. An empty or whitespace-only document is
/// the same as a missing file: all defaults.
fn parse(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}
