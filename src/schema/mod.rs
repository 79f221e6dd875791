//! The Schema Builder: turns a field selection (or a free-text request) into
//! the strict JSON schema sent with the model's structured-output mode.
//!
//! Predefined selections are cached by their sorted key set plus language;
//! custom (free-text) schemas are content-dependent and never cached.

pub mod keys;

use std::sync::Arc;

use dashmap::DashMap;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{self, Language};

/// One generate-summary request as the presentation surface hands it over.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// `None` means "all catalog fields".
    pub selected_field_keys: Option<Vec<String>>,
    pub language: Language,
    pub is_custom_format: bool,
    pub custom_prompt: String,
}

impl ExtractionRequest {
    /// Predefined-format request for the given keys (`None` = all).
    pub fn predefined(selected_field_keys: Option<Vec<String>>, language: Language) -> Self {
        Self {
            selected_field_keys,
            language,
            is_custom_format: false,
            custom_prompt: String::new(),
        }
    }

    /// Custom-format request built from free text.
    pub fn custom(custom_prompt: impl Into<String>, language: Language) -> Self {
        Self {
            selected_field_keys: None,
            language,
            is_custom_format: true,
            custom_prompt: custom_prompt.into(),
        }
    }
}

/// One property of a [`JobSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySpec {
    #[serde(rename = "type")]
    pub value_type: String,
    pub description: String,
}

/// The structural contract constraining the model's output.
///
/// Serializes to the `json_schema` payload shape the provider expects:
/// an object with exactly the `required` properties and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSchema {
    #[serde(rename = "type")]
    pub object_type: &'static str,
    pub properties: IndexMap<String, PropertySpec>,
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

impl JobSchema {
    fn new(properties: IndexMap<String, PropertySpec>) -> Self {
        let required = properties.keys().cloned().collect();
        Self {
            object_type: "object",
            properties,
            required,
            additional_properties: false,
        }
    }
}

/// Language-correct placeholder used instead of invented data.
pub fn not_specified(language: Language) -> &'static str {
    match language {
        Language::English => "Not specified",
        Language::Italian => "Non specificato",
    }
}

fn custom_field_description(phrase: &str, language: Language) -> String {
    match language {
        Language::English => format!(
            "The \"{phrase}\" information extracted from the job posting, \
             or \"Not specified\" if not available"
        ),
        Language::Italian => format!(
            "L'informazione \"{phrase}\" estratta dall'annuncio di lavoro, \
             oppure \"Non specificato\" se non disponibile"
        ),
    }
}

fn catch_all_description(language: Language) -> String {
    match language {
        Language::English => {
            "All the information the user asked for, or \"Not specified\" if not available"
                .to_string()
        }
        Language::Italian => {
            "Tutte le informazioni richieste dall'utente, oppure \"Non specificato\" se non disponibile"
                .to_string()
        }
    }
}

/// Builds [`JobSchema`]s and caches the predefined ones.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    cache: DashMap<String, Arc<JobSchema>>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build (or fetch from cache) the schema for a request.
    ///
    /// A cache hit returns the identical `Arc`, so repeated predefined
    /// requests share one schema object. The cache key sorts the field keys,
    /// which means `[a,b]` and `[b,a]` share an entry whose `required` order
    /// reflects whichever request arrived first. Known quirk, kept on
    /// purpose: nothing downstream reads `required` as ordered.
    pub fn build(&self, request: &ExtractionRequest) -> Arc<JobSchema> {
        if request.is_custom_format {
            return Arc::new(self.build_custom(request));
        }

        let cache_key = Self::cache_key(request);
        self.cache
            .entry(cache_key.clone())
            .or_insert_with(|| {
                debug!(key = %cache_key, "schema cache miss");
                Arc::new(Self::build_predefined(request))
            })
            .clone()
    }

    fn cache_key(request: &ExtractionRequest) -> String {
        let keys = match &request.selected_field_keys {
            None => "all".to_string(),
            Some(keys) => {
                let mut sorted: Vec<&str> = keys.iter().map(String::as_str).collect();
                sorted.sort_unstable();
                sorted.join(",")
            }
        };
        format!("{keys}|{}", request.language.code())
    }

    fn build_predefined(request: &ExtractionRequest) -> JobSchema {
        let mut properties = IndexMap::new();

        let selected: Vec<String> = match &request.selected_field_keys {
            None => catalog::keys().iter().map(|k| k.to_string()).collect(),
            Some(keys) => keys.clone(),
        };

        for key in selected {
            // Keys absent from the catalog are dropped without complaint; the
            // UI and the catalog can drift independently.
            let Some(field) = catalog::get(&key) else {
                debug!(key = %key, "dropping unknown field key");
                continue;
            };
            properties.insert(
                key,
                PropertySpec {
                    value_type: field.value_type.to_string(),
                    description: field.description(request.language).to_string(),
                },
            );
        }

        JobSchema::new(properties)
    }

    fn build_custom(&self, request: &ExtractionRequest) -> JobSchema {
        let phrases = keys::split_phrases(&request.custom_prompt);
        let mut properties: IndexMap<String, PropertySpec> = IndexMap::new();

        for phrase in &phrases {
            let key = keys::synthesize_key(phrase);
            if properties.contains_key(&key) {
                // Last write wins; the warning is the only concession to
                // discoverability.
                warn!(key = %key, phrase = %phrase, "custom field key collision, overwriting");
            }
            properties.insert(
                key,
                PropertySpec {
                    value_type: "string".to_string(),
                    description: custom_field_description(phrase, request.language),
                },
            );
        }

        if properties.is_empty() {
            properties.insert(
                keys::CATCH_ALL_KEY.to_string(),
                PropertySpec {
                    value_type: "string".to_string(),
                    description: catch_all_description(request.language),
                },
            );
        }

        JobSchema::new(properties)
    }
}
