//! The per-run session: one context object owning the key store handle, the
//! schema cache and the orchestrator. Constructed once per presentation
//! lifetime and passed to whoever needs it; there is no global state.

use std::sync::Arc;

use tracing::{error, warn};

use crate::catalog::Language;
use crate::config::Config;
use crate::fallback;
use crate::llm::{CallOptions, Orchestrator};
use crate::schema::SchemaBuilder;
use crate::storage::{KEY_LANGUAGE, KeyStore};
use crate::summary::dtos::{
    GenerateSummaryRequest, GenerateSummaryResponse, SetApiKeyRequest, SetApiKeyResponse,
};

pub struct Session {
    store: Arc<dyn KeyStore>,
    schemas: SchemaBuilder,
    orchestrator: Orchestrator,
    default_language: Language,
}

impl Session {
    pub fn new(store: Arc<dyn KeyStore>, config: &Config) -> Self {
        let orchestrator =
            Orchestrator::new(store.clone(), config.openai_base_url(), config.model());
        Self {
            store,
            schemas: SchemaBuilder::new(),
            orchestrator,
            default_language: Language::parse(config.language()),
        }
    }

    /// Preferred output language: the stored setting wins over the config
    /// default. Storage trouble here is not worth failing a session over.
    pub async fn preferred_language(&self) -> Language {
        match self.store.get(KEY_LANGUAGE).await {
            Ok(Some(code)) => Language::parse(&code),
            Ok(None) => self.default_language,
            Err(err) => {
                warn!(error = %err, "language setting unreadable, using default");
                self.default_language
            }
        }
    }

    /// Handle a generate-summary message.
    ///
    /// Every orchestrator failure past credential validation is absorbed:
    /// the canned summary takes the real one's place, shaped by the same
    /// schema, and the original error goes to the log.
    pub async fn generate_summary(
        &self,
        request: &GenerateSummaryRequest,
    ) -> GenerateSummaryResponse {
        if let Err(reason) = request.validate() {
            return GenerateSummaryResponse::failure(reason);
        }

        let language = request.language();
        let schema = self.schemas.build(&request.extraction_request());
        let options = CallOptions {
            language,
            is_custom_format: request.is_custom_format,
            has_company_reviews: request.has_company_reviews,
        };

        match self
            .orchestrator
            .generate(&request.prompt, &schema, &options)
            .await
        {
            Ok(summary) => GenerateSummaryResponse::ok(summary),
            Err(err) if err.is_configuration() => {
                warn!(error = %err, "model call rejected before dispatch");
                GenerateSummaryResponse::failure(err.to_string())
            }
            Err(err) => {
                error!(error = %err, "model call failed, substituting canned summary");
                let summary = fallback::respond(&schema, language).await;
                GenerateSummaryResponse::ok(summary)
            }
        }
    }

    /// Handle a set-api-key message from the settings surface.
    pub async fn set_api_key(&self, request: &SetApiKeyRequest) -> SetApiKeyResponse {
        if let Err(reason) = request.validate() {
            return SetApiKeyResponse::failure(reason);
        }
        match self.orchestrator.set_api_key(request.api_key.trim()).await {
            Ok(()) => SetApiKeyResponse::ok(),
            Err(err) => {
                error!(error = %err, "failed to persist API key");
                SetApiKeyResponse::failure(format!("could not save the API key: {err}"))
            }
        }
    }
}
