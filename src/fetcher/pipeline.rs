//! Charset detection and decoding for fetched pages.
//!
//! Country-prefixed variants of the target site occasionally serve legacy
//! encodings, so the body is decoded through encoding_rs instead of assuming
//! UTF-8: Content-Type header first, then a `<meta>` scan of the head, then
//! chardetng as the heuristic of last resort.

use std::sync::LazyLock;

use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use url::Url;

use crate::fetcher::{errors::FetchError, types::PageResponse};

static HEADER_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

/// How much of the body head is scanned for a `<meta charset>`.
const META_SCAN_LIMIT: usize = 4096;

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    body_bytes: Bytes,
    content_type: &str,
) -> Result<PageResponse, FetchError> {
    let encoding = detect_encoding(content_type, &body_bytes);

    let (decoded, _, had_errors) = encoding.decode(&body_bytes);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "body does not decode as {}",
            encoding.name()
        )));
    }

    Ok(PageResponse {
        url_final,
        status,
        body_utf8: decoded.into_owned(),
        charset: encoding.name(),
        fetched_at: Utc::now(),
    })
}

fn detect_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = charset_from(content_type, &HEADER_CHARSET_REGEX) {
        return encoding;
    }

    let head = &body_bytes[..body_bytes.len().min(META_SCAN_LIMIT)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(encoding) = charset_from(&head_str, &META_CHARSET_REGEX) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn charset_from(haystack: &str, regex: &Regex) -> Option<&'static Encoding> {
    let captures = regex.captures(haystack)?;
    let label = captures.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}
