use crate::prompt::StylePreferences;
use crate::{Error, Result};
use serde_json::Value;
use std::time::Duration;

/// How a completed upload looks to the caller. A 200 without the expected
/// field is not an error, just an empty-handed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Suggestion(String),
    NoSuggestion,
}

/// HTTP client for the intake service.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Uploads the image plus preference fields. The file part travels
    /// under a fixed name and content type, matching what the service
    /// validates against.
    pub async fn upload(
        &self,
        image_bytes: Vec<u8>,
        prefs: &StylePreferences,
    ) -> Result<UploadOutcome> {
        let part = reqwest::multipart::Part::bytes(image_bytes)
            .file_name("image.jpg")
            .mime_str("image/jpeg")
            .map_err(|e| Error::processing(format!("Invalid content type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("occasion", prefs.occasion.clone())
            .text("season", prefs.season.clone())
            .text("gender", prefs.gender.clone())
            .text("body_type", prefs.body_type.clone())
            .text("age", prefs.age.clone())
            .text("mood", prefs.mood.clone());

        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown");
            return Err(Error::upstream(format!("Server error: {}", message)));
        }

        match body
            .pointer("/data/fashion_suggestion")
            .and_then(Value::as_str)
        {
            Some(suggestion) => Ok(UploadOutcome::Suggestion(suggestion.to_string())),
            None => Ok(UploadOutcome::NoSuggestion),
        }
    }
}
