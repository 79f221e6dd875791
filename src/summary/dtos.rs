//! The message contract spoken by the presentation surface, kept
//! wire-compatible (camelCase) with the action messages it already sends.

use serde::{Deserialize, Serialize};

use crate::catalog::Language;
use crate::llm::ResultFieldMap;
use crate::schema::ExtractionRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryRequest {
    /// The job text block the model summarizes.
    pub prompt: String,
    /// `None` means all predefined fields.
    #[serde(default)]
    pub selected_fields: Option<Vec<String>>,
    pub language: String,
    #[serde(default)]
    pub is_custom_format: bool,
    #[serde(default)]
    pub custom_prompt: String,
    #[serde(default)]
    pub has_company_reviews: bool,
}

impl GenerateSummaryRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt cannot be empty".to_string());
        }
        if self.is_custom_format && self.custom_prompt.trim().is_empty() {
            return Err("custom format requires a custom prompt".to_string());
        }
        Ok(())
    }

    pub fn language(&self) -> Language {
        Language::parse(&self.language)
    }

    pub fn extraction_request(&self) -> ExtractionRequest {
        ExtractionRequest {
            selected_field_keys: self.selected_fields.clone(),
            language: self.language(),
            is_custom_format: self.is_custom_format,
            custom_prompt: self.custom_prompt.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSummaryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ResultFieldMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateSummaryResponse {
    pub fn ok(summary: ResultFieldMap) -> Self {
        Self {
            success: true,
            summary: Some(summary),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            summary: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetApiKeyRequest {
    pub api_key: String,
}

impl SetApiKeyRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key cannot be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetApiKeyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SetApiKeyResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
