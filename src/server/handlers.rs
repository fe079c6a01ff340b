use super::types::{HealthResponse, SuggestionResponse};
use crate::llm::{SuggestionClient, SuggestionRequest};
use crate::prompt::{self, StylePreferences};
use crate::{Error, image};
use axum::extract::{Multipart, State};
use axum::response::Json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn SuggestionClient>,
    pub uploads_dir: PathBuf,
}

/// Liveness probe. Always healthy, regardless of upstream availability.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SuggestionResponse>, Error> {
    let request_id = Uuid::new_v4();

    match handle_upload(&state, multipart, request_id).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            match &e {
                Error::Input(msg) => info!(%request_id, "Rejected upload: {}", msg),
                _ => error!(%request_id, "Upload failed: {}", e),
            }
            Err(e)
        }
    }
}

async fn handle_upload(
    state: &AppState,
    mut multipart: Multipart,
    request_id: Uuid,
) -> Result<SuggestionResponse, Error> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut prefs = StylePreferences::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::input(format!("Malformed multipart body: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::input(format!("Failed to read file part: {}", e)))?;
            file = Some((filename, bytes.to_vec()));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| Error::input(format!("Failed to read field {}: {}", name, e)))?;
            prefs.set(&name, value);
        }
    }

    let Some((filename, bytes)) = file else {
        return Err(Error::input("No file uploaded"));
    };
    if filename.is_empty() {
        return Err(Error::input("Empty filename"));
    }

    info!(
        %request_id,
        filename = %filename,
        size = bytes.len(),
        "Processing upload"
    );

    let encoded = image::process_upload(bytes, &filename, &state.uploads_dir).await?;

    info!(
        %request_id,
        width = encoded.width,
        height = encoded.height,
        "Image processed"
    );

    let suggestion = state
        .llm
        .suggest(SuggestionRequest {
            prompt: prompt::build_prompt(&prefs),
            image_data_url: encoded.data_url,
        })
        .await?;

    info!(%request_id, "Suggestion generated");

    Ok(SuggestionResponse::success(suggestion))
}
