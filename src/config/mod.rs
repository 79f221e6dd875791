//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the binary runs out of the box and tests can override single values.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Public so tests and scripts can refer to them.
pub const ENV_STORE_PATH: &str = "JOBLENS_STORE_PATH";
pub const ENV_OPENAI_BASE_URL: &str = "JOBLENS_OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "JOBLENS_MODEL";
pub const ENV_LANGUAGE: &str = "JOBLENS_LANGUAGE";

/// Default development values used when environment variables are absent.
const DEFAULT_STORE_PATH: &str = ".joblens-store.json";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_LANGUAGE: &str = "en";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    store_path: String,
    openai_base_url: String,
    model: String,
    language: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        store_path: impl Into<String>,
        openai_base_url: impl Into<String>,
        model: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            store_path: store_path.into(),
            openai_base_url: openai_base_url.into(),
            model: model.into(),
            language: language.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// Never fails today; returning `Result` leaves room for validation
    /// (e.g. rejecting a non-http base URL) without changing callers.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_path =
            env::var(ENV_STORE_PATH).unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
        let openai_base_url =
            env::var(ENV_OPENAI_BASE_URL).unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let model = env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let language = env::var(ENV_LANGUAGE).unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());
        Ok(Self {
            store_path,
            openai_base_url,
            model,
            language,
        })
    }

    /// Path of the JSON key-value store holding the credential and language.
    pub fn store_path(&self) -> &str {
        &self.store_path
    }
    /// Base URL of the OpenAI-compatible API.
    pub fn openai_base_url(&self) -> &str {
        &self.openai_base_url
    }
    /// Model name sent with every completion request.
    pub fn model(&self) -> &str {
        &self.model
    }
    /// Default output language code ("en" or "it").
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
