//! AI collaborator integration
//!
//! Provides interfaces to the remote chat-completion and image-generation
//! providers, plus in-process mocks for tests.

pub mod chat;
pub mod client;
pub mod image;
pub mod mock;

pub use chat::OpenAiChatClient;
pub use image::OpenAiImageClient;
pub use mock::{MockChatClient, MockImageClient};

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextCompletionService: Send + Sync {
    /// Run one chat completion and return the assistant's reply text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate a single image and return its URL.
    async fn generate_image(&self, prompt: &str, size: &str) -> Result<String>;
}
