pub mod handlers;
mod types;

pub use types::*;

use crate::llm::OpenAiClient;
use crate::{Error, Result, config::Config};
use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Uploads larger than this are rejected by the extractor.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/upload", post(handlers::upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Transient scratch space for in-flight uploads.
    let uploads_dir = PathBuf::from(&config.server.uploads_dir);
    tokio::fs::create_dir_all(&uploads_dir).await?;

    let state = handlers::AppState {
        llm: Arc::new(OpenAiClient::new(config.llm.clone())),
        uploads_dir,
    };

    let app = router(state);

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .map_err(|e| Error::config(format!("Invalid host {}: {}", config.server.host, e)))?,
        config.server.port,
    );

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
