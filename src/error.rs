use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Closed set of failure kinds. Every fallible path in the crate funnels
/// into one of these four, and each maps to a fixed HTTP status and body
/// shape in `IntoResponse`.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad client input: missing file part, empty filename, bad extension.
    #[error("{0}")]
    Input(String),

    /// Server-side processing failure: image decode, file IO, encoding.
    #[error("Processing error: {0}")]
    Processing(String),

    /// Failure reported by (or reaching) the completion API.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Startup configuration problem. Fatal before the server binds.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Processing(_) | Self::Upstream(_) | Self::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Processing(format!("IO error: {}", e))
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::Processing(format!("Image error: {}", e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Processing(format!("Serialization error: {}", e))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(format!("YAML error: {}", e))
    }
}

impl From<async_openai::error::OpenAIError> for Error {
    fn from(e: async_openai::error::OpenAIError) -> Self {
        Self::Upstream(format!("OpenAI error: {}", e))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Upstream(format!("Network error: {}", e))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Input errors keep the short `{"error": ..}` shape; the rest use
        // the status/message envelope. Diagnostic detail is logged by the
        // handler, never serialized into the body.
        let body = match &self {
            Self::Input(msg) => json!({ "error": msg }),
            _ => json!({ "status": "error", "message": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
