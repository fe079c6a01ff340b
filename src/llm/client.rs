use super::types::SuggestionRequest;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

/// Seam for the external completion API. The server holds a trait object
/// so tests can substitute a recording stub.
#[async_trait]
pub trait SuggestionClient: Send + Sync {
    async fn suggest(&self, request: SuggestionRequest) -> Result<String>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl SuggestionClient for OpenAiClient {
    async fn suggest(&self, request: SuggestionRequest) -> Result<String> {
        debug!(
            "Creating completion with model {} ({} prompt chars)",
            self.model,
            request.prompt.len()
        );

        let text_part = openai_types::ChatCompletionRequestMessageContentPartTextArgs::default()
            .text(request.prompt)
            .build()?;

        let image_part = openai_types::ChatCompletionRequestMessageContentPartImageArgs::default()
            .image_url(
                openai_types::ImageUrlArgs::default()
                    .url(request.image_data_url)
                    .build()?,
            )
            .build()?;

        let message = openai_types::ChatCompletionRequestUserMessageArgs::default()
            .content(vec![
                openai_types::ChatCompletionRequestUserMessageContentPart::from(text_part),
                image_part.into(),
            ])
            .build()?;

        let openai_request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![openai_types::ChatCompletionRequestMessage::from(
                message,
            )])
            .max_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received completion response with {} choices",
            response.choices.len()
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::upstream("Completion response contained no choices"))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
