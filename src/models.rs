//! Data models and structures
//!
//! Defines the quiz payload returned to the caller, the OpenAI-style
//! request/response bodies, and the process configuration.

use serde::{Deserialize, Serialize};

/// One generated quiz item. Built per request and discarded once the HTTP
/// response is sent; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_options: Vec<String>,
    pub correct_answer: String,
    pub correct_meaning: String,
    pub image_url: String,
}

// Provider API request/response models
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub chat_api_key: String,
    pub chat_api_base: String,
    pub chat_model: String,
    pub image_api_key: String,
    pub image_api_base: String,
    pub image_model: String,
    pub cors_allow_origins: String,
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present).
    /// Read once at startup and never mutated afterwards.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            chat_api_key: std::env::var("CHAT_API_KEY")
                .map_err(|_| crate::Error::Generic("CHAT_API_KEY not set".to_string()))?,
            chat_api_base: std::env::var("CHAT_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            chat_model: std::env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            image_api_key: std::env::var("IMAGE_API_KEY")
                .map_err(|_| crate::Error::Generic("IMAGE_API_KEY not set".to_string()))?,
            image_api_base: std::env::var("IMAGE_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            image_model: std::env::var("IMAGE_MODEL").unwrap_or_else(|_| "dall-e-3".to_string()),
            cors_allow_origins: std::env::var("CORS_ALLOW_ORIGINS").unwrap_or_default(),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }
}
