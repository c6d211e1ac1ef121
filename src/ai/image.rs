use super::client::ProviderHttpClient;
use super::ImageGenerationService;
use crate::models::{ImageGenerationRequest, ImageGenerationResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct OpenAiImageClient {
    http: ProviderHttpClient,
    model: String,
}

impl OpenAiImageClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            http: ProviderHttpClient::new(api_key, base_url, Duration::from_secs(60)),
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
impl ImageGenerationService for OpenAiImageClient {
    async fn generate_image(&self, prompt: &str, size: &str) -> Result<String> {
        tracing::debug!(model = %self.model, size, "Sending image generation request");

        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: size.to_string(),
        };

        let response: ImageGenerationResponse =
            self.http.post("/v1/images/generations", &request).await?;

        response
            .data
            .first()
            .and_then(|image| image.url.clone())
            .ok_or_else(|| Error::AiProvider("No image URL in response".to_string()))
    }
}
