//! The Request Orchestrator: the one external call that turns a job prompt
//! plus a schema into a [`ResultFieldMap`].
//!
//! Per invocation: load the stored credential (once per orchestrator
//! lifetime), validate its format, pick the endpoint strategy, call, and —
//! when the augmented endpoint fails in any way — retry once on the plain
//! endpoint with the same schema and prompt. Failures past that point bubble
//! to the session layer, which substitutes the fallback responder.

pub mod client;
pub mod errors;
pub mod prompts;
pub mod types;

pub use client::OpenAiClient;
pub use errors::LlmError;
pub use types::ResultFieldMap;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::catalog::Language;
use crate::llm::types::{AugmentedRequest, ChatRequest, ResponseFormat};
use crate::schema::JobSchema;
use crate::storage::{KEY_API_KEY, KeyStore, StoreError};

/// Provider keys carry this prefix; anything else is rejected before the
/// network is touched.
const EXPECTED_KEY_PREFIX: &str = "sk-";

/// Per-call switches that shape the system instruction and the endpoint
/// strategy.
#[derive(Debug, Clone, Copy)]
pub struct CallOptions {
    pub language: Language,
    pub is_custom_format: bool,
    pub has_company_reviews: bool,
}

/// Endpoint strategy for one invocation. `Augmented` has a defined fallback
/// edge to `Plain`; `Plain` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Augmented,
    Plain,
}

pub struct Orchestrator {
    client: OpenAiClient,
    store: Arc<dyn KeyStore>,
    model: String,
    // Loaded from the store once; replaced only by an explicit set_api_key
    // on this instance. Store writes from elsewhere are not observed
    // mid-session.
    credential: RwLock<Option<String>>,
}

impl Orchestrator {
    pub fn new(store: Arc<dyn KeyStore>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: OpenAiClient::new(base_url),
            store,
            model: model.into(),
            credential: RwLock::new(None),
        }
    }

    /// Persist a new credential and swap the cached copy in one step.
    pub async fn set_api_key(&self, api_key: &str) -> Result<(), StoreError> {
        self.store.set(KEY_API_KEY, api_key).await?;
        *self.credential.write().await = Some(api_key.to_string());
        Ok(())
    }

    /// Perform one orchestrated call.
    #[instrument(skip_all, fields(custom = options.is_custom_format, reviews = options.has_company_reviews))]
    pub async fn generate(
        &self,
        job_prompt: &str,
        schema: &JobSchema,
        options: &CallOptions,
    ) -> Result<ResultFieldMap, LlmError> {
        let api_key = self.credential().await?;
        if !api_key.starts_with(EXPECTED_KEY_PREFIX) {
            return Err(LlmError::MalformedApiKey);
        }

        let system = prompts::system_instruction(
            options.language,
            options.is_custom_format,
            options.has_company_reviews,
        );
        let response_format = ResponseFormat::for_schema(schema);

        let endpoint = if options.has_company_reviews {
            Endpoint::Augmented
        } else {
            Endpoint::Plain
        };
        debug!(?endpoint, "dispatching model call");

        let content = match endpoint {
            Endpoint::Plain => {
                self.call_plain(&api_key, &system, job_prompt, response_format)
                    .await?
            }
            Endpoint::Augmented => {
                let request = AugmentedRequest::new(
                    &self.model,
                    &system,
                    job_prompt,
                    response_format.clone(),
                );
                match self.client.augmented(&api_key, &request).await {
                    Ok(content) => content,
                    Err(err) => {
                        warn!(error = %err, "augmented endpoint failed, retrying on plain endpoint");
                        self.call_plain(&api_key, &system, job_prompt, response_format)
                            .await?
                    }
                }
            }
        };

        parse_field_map(&content)
    }

    async fn call_plain(
        &self,
        api_key: &str,
        system: &str,
        job_prompt: &str,
        response_format: ResponseFormat,
    ) -> Result<String, LlmError> {
        let request = ChatRequest::new(&self.model, system, job_prompt, response_format);
        self.client.chat_structured(api_key, &request).await
    }

    /// Cached credential, loaded from the store on first use.
    async fn credential(&self) -> Result<String, LlmError> {
        if let Some(key) = self.credential.read().await.as_ref() {
            return Ok(key.clone());
        }

        let mut guard = self.credential.write().await;
        if let Some(key) = guard.as_ref() {
            return Ok(key.clone());
        }

        let loaded = self
            .store
            .get(KEY_API_KEY)
            .await
            .map_err(|e| LlmError::Storage(e.to_string()))?;

        match loaded {
            Some(key) if !key.trim().is_empty() => {
                *guard = Some(key.clone());
                Ok(key)
            }
            _ => Err(LlmError::MissingApiKey),
        }
    }
}

/// The schema contract guarantees the payload parses as a flat string map;
/// no further validation happens here.
fn parse_field_map(content: &str) -> Result<ResultFieldMap, LlmError> {
    serde_json::from_str(content).map_err(|e| LlmError::Parse(e.to_string()))
}
