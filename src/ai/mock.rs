use super::{ImageGenerationService, TextCompletionService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type CannedReply = std::result::Result<String, String>;

/// Mock chat-completion collaborator. Queued replies are served in order,
/// cycling once exhausted; queued errors surface as `Error::AiProvider`.
#[derive(Clone)]
pub struct MockChatClient {
    responses: Arc<Mutex<Vec<CannedReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_completion_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(Ok(response));
        self
    }

    pub fn with_error_response(self, message: String) -> Self {
        self.responses.lock().unwrap().push(Err(message));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextCompletionService for MockChatClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response echoes the prompt
            return Ok(format!("Reply to: {}", user_prompt));
        }

        let index = (*count - 1) % responses.len();
        match &responses[index] {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(Error::AiProvider(message.clone())),
        }
    }
}

/// Mock image-generation collaborator with the same queue/cycle behavior.
#[derive(Clone)]
pub struct MockImageClient {
    responses: Arc<Mutex<Vec<CannedReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_url_response(self, url: String) -> Self {
        self.responses.lock().unwrap().push(Ok(url));
        self
    }

    pub fn with_error_response(self, message: String) -> Self {
        self.responses.lock().unwrap().push(Err(message));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(&self, _prompt: &str, _size: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok("https://img.example/mock.png".to_string());
        }

        let index = (*count - 1) % responses.len();
        match &responses[index] {
            Ok(url) => Ok(url.clone()),
            Err(message) => Err(Error::AiProvider(message.clone())),
        }
    }
}
