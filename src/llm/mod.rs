mod client;
mod types;

pub use client::{OpenAiClient, SuggestionClient};
pub use types::SuggestionRequest;
