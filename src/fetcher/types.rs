use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A fetched and UTF-8-decoded job page, ready for extraction.
#[derive(Debug)]
pub struct PageResponse {
    /// URL after redirects; this is what the URL gate inspects.
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
    /// Name of the encoding the body was decoded from.
    pub charset: &'static str,
    pub fetched_at: DateTime<Utc>,
}
