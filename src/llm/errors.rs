use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes of one orchestrated model call. The messages are
/// user-presentable; the session layer shows the configuration ones directly
/// and absorbs the rest into the fallback path.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("no API key configured; add one in the settings")]
    MissingApiKey,

    #[error("API key is malformed; OpenAI keys start with \"sk-\", check the settings")]
    MalformedApiKey,

    #[error("credential storage unavailable: {0}")]
    Storage(String),

    #[error("network error, check connectivity: {0}")]
    Network(String),

    #[error("OpenAI error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("provider returned no results")]
    Empty,

    #[error("response did not match the requested schema: {0}")]
    Parse(String),
}

impl LlmError {
    /// Pre-call validation failures: the only errors shown to the user
    /// instead of being substituted by the fallback responder.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::MalformedApiKey)
    }
}
