use anyhow::{Context, Result};
use drape::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up OPENAI_API_KEY and friends from a local .env when present.
    dotenvy::dotenv().ok();

    // A missing API key aborts here, before anything binds.
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());
    let filter = EnvFilter::try_new(&log_level)
        .with_context(|| format!("Invalid log level: '{}'", log_level))?;

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting drape server with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}
