//! Wire types for the two provider endpoint shapes.
//!
//! The plain variant is a chat completion with `response_format:
//! json_schema`; the augmented variant is the responses endpoint with a
//! `web_search_preview` tool. Both return one JSON string constrained by the
//! same schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::JobSchema;

/// The final structured answer: one string value per required schema key.
pub type ResultFieldMap = IndexMap<String, String>;

pub const MAX_TOKENS: u32 = 1500;
pub const TEMPERATURE: f32 = 0.2;
const SCHEMA_NAME: &str = "job_summary";
const SEARCH_CONTEXT_SIZE: &str = "medium";

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
    pub json_schema: JsonSchemaFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub strict: bool,
    pub schema: serde_json::Value,
}

impl ResponseFormat {
    /// Wrap a [`JobSchema`] in the provider's strict json_schema envelope.
    pub fn for_schema(schema: &JobSchema) -> Self {
        Self {
            format_type: "json_schema".to_string(),
            json_schema: JsonSchemaFormat {
                name: SCHEMA_NAME.to_string(),
                strict: true,
                schema: serde_json::to_value(schema)
                    .expect("JobSchema serialization is infallible"),
            },
        }
    }
}

/// Plain structured-output request (`/chat/completions`).
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

impl ChatRequest {
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
        response_format: ResponseFormat,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::system(system), Message::user(user)],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            response_format,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseRaw {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub search_context_size: String,
}

impl ToolSpec {
    pub fn web_search() -> Self {
        Self {
            tool_type: "web_search_preview".to_string(),
            search_context_size: SEARCH_CONTEXT_SIZE.to_string(),
        }
    }
}

/// Tool-augmented request (`/responses`): the model may perform live web
/// lookups before answering.
#[derive(Debug, Serialize)]
pub struct AugmentedRequest {
    pub model: String,
    pub input: String,
    pub tools: Vec<ToolSpec>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

impl AugmentedRequest {
    pub fn new(
        model: impl Into<String>,
        system: &str,
        user: &str,
        response_format: ResponseFormat,
    ) -> Self {
        Self {
            model: model.into(),
            input: format!("{system}\n\n{user}"),
            tools: vec![ToolSpec::web_search()],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            response_format,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AugmentedResponseRaw {
    pub output_text: Option<String>,
}

/// Error envelope the provider uses for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ProviderErrorBody {
    pub error: Option<ProviderErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderErrorDetail {
    pub message: String,
}
