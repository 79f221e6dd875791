//! Thin REST client over the two provider endpoints.
//!
//! Transport, HTTP-level and empty-payload failures map onto distinct
//! [`LlmError`] classes so the orchestrator can report them apart.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};
use tracing::{debug, warn};

use crate::llm::errors::LlmError;
use crate::llm::types::{
    AugmentedRequest, AugmentedResponseRaw, ChatRequest, ChatResponseRaw, ProviderErrorBody,
};

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: String,
}

impl OpenAiClient {
    /// Client against the given base URL (overridable for tests and proxies).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Plain schema-constrained chat completion. Returns the JSON string the
    /// model produced under the schema contract.
    pub async fn chat_structured(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<String, LlmError> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion transport failure");
                LlmError::Network(e.to_string())
            })?;

        let response = Self::check_status(response).await?;

        let raw: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        raw.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(LlmError::Empty)
    }

    /// Tool-augmented completion via the responses endpoint.
    pub async fn augmented(
        &self,
        api_key: &str,
        request: &AugmentedRequest,
    ) -> Result<String, LlmError> {
        let response = self
            .http
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "augmented completion transport failure");
                LlmError::Network(e.to_string())
            })?;

        let response = Self::check_status(response).await?;

        let raw: AugmentedResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        match raw.output_text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LlmError::Empty),
        }
    }

    /// Map a non-success response to `Api`, passing the provider's own
    /// message through when its error envelope parses.
    async fn check_status(response: Response) -> Result<Response, LlmError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ProviderErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.error)
            .map(|detail| detail.message)
            .unwrap_or_else(|| "request rejected by the provider".to_string());

        debug!(status = %status, message = %message, "provider error response");
        Err(LlmError::Api { status, message })
    }
}
