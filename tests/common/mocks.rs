use async_trait::async_trait;
use drape::{
    Error, Result,
    llm::{SuggestionClient, SuggestionRequest},
};
use std::sync::{Arc, Mutex};

/// Recording stub for the completion API. Hands out canned suggestions
/// and keeps every request it saw for later assertions.
#[derive(Debug, Default)]
pub struct StubSuggestionClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<SuggestionRequest>>>,
    pub error: Option<String>,
}

impl StubSuggestionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<SuggestionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionClient for StubSuggestionClient {
    async fn suggest(&self, request: SuggestionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::upstream("No more stub responses available"));
        }

        Ok(responses.remove(0))
    }
}
