use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestMessage, CreateChatCompletionRequestArgs},
    Client,
};
use tracing::info;

use crate::constants::agent::SYSTEM_PROMPT;
use crate::error::ChatError;

/// Thin client around the chat-completions API. One fixed persona, one
/// fixed model, no streaming, no timeout on the upstream call.
#[derive(Clone)]
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model: String,
    has_key: bool,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, base_url: Option<String>, model: String) -> Self {
        let has_key = api_key.is_some();
        let mut config = OpenAIConfig::new().with_api_key(api_key.unwrap_or_default());
        if let Some(url) = base_url {
            config = config.with_api_base(url);
        }
        let client = Client::with_config(config);
        Self { client, model, has_key }
    }

    /// Whether a credential was configured at startup. The chat route is
    /// disabled when this is false.
    pub fn is_configured(&self) -> bool {
        self.has_key
    }

    /// Sends the fixed TickerBot system prompt plus the user's message and
    /// returns the first choice's text content.
    pub async fn chat(&self, user_input: &str) -> Result<String, ChatError> {
        if !self.has_key {
            return Err(ChatError::MissingApiKey);
        }

        info!("🤖 Sending request to LLM (Model: {})...", self.model);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestMessage::System(
                    async_openai::types::ChatCompletionRequestSystemMessageArgs::default()
                        .content(SYSTEM_PROMPT)
                        .build()?,
                ),
                ChatCompletionRequestMessage::User(
                    async_openai::types::ChatCompletionRequestUserMessageArgs::default()
                        .content(user_input)
                        .build()?,
                ),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        info!("🤖 LLM Response received.");

        Ok(response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default())
    }
}
