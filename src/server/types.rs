use serde::{Deserialize, Serialize};

/// Success envelope for `POST /upload`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub status: String,
    pub data: SuggestionData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionData {
    pub fashion_suggestion: String,
}

impl SuggestionResponse {
    pub fn success(fashion_suggestion: String) -> Self {
        Self {
            status: "success".to_string(),
            data: SuggestionData { fashion_suggestion },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
