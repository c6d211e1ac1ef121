use super::client::ProviderHttpClient;
use super::TextCompletionService;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct OpenAiChatClient {
    http: ProviderHttpClient,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            http: ProviderHttpClient::new(api_key, base_url, Duration::from_secs(30)),
            model,
        }
    }

    pub fn new_with_client(
        api_key: String,
        base_url: String,
        model: String,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: ProviderHttpClient::with_client(api_key, base_url, client),
            model,
        }
    }
}

#[async_trait]
impl TextCompletionService for OpenAiChatClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        tracing::debug!(model = %self.model, "Sending chat completion request");

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(system_prompt.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(user_prompt.to_string()),
                },
            ],
            max_tokens,
            temperature,
        };

        let response: ChatCompletionResponse =
            self.http.post("/v1/chat/completions", &request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| Error::AiProvider("No response from chat API".to_string()))
    }
}
