use crate::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Thin POST helper shared by the chat and image clients. Holds the bearer
/// credential and base URL for one provider endpoint.
pub struct ProviderHttpClient {
    pub(crate) client: Client,
    api_key: String,
    base_url: String,
}

impl ProviderHttpClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Build on top of an existing `reqwest::Client` so provider clients can
    /// share one connection pool.
    pub fn with_client(api_key: String, base_url: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    pub async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", url, e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Provider API error (status {}): {}", status, error_text);
            return Err(Error::AiProvider(format!(
                "API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse provider response: {}\nBody: {}", e, body);
            Error::AiProvider(format!("Failed to parse provider response: {}", e))
        })
    }
}
