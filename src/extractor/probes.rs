//! Probe combinators over ordered CSS-selector lists.
//!
//! The target page's markup drifts without notice, so every field is scraped
//! through a prioritized list of independent probes combined by
//! first-success. Invalid selectors are skipped rather than surfaced; a probe
//! that cannot run is just a probe that found nothing.

use scraper::{Html, Selector};

use crate::extractor::model::normalize_whitespace;

/// First element across the ordered selector list whose normalized text the
/// predicate accepts.
pub fn first_match(
    document: &Html,
    selectors: &[&str],
    accept: impl Fn(&str) -> bool,
) -> Option<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in document.select(&selector) {
            let text = normalize_whitespace(&element.text().collect::<String>());
            if accept(&text) {
                return Some(text);
            }
        }
    }
    None
}

/// First element with any non-empty text, in selector priority order.
pub fn first_non_empty(document: &Html, selectors: &[&str]) -> Option<String> {
    first_match(document, selectors, |text| !text.is_empty())
}

/// Every non-empty text across all selectors, in document/probe order.
pub fn scan_all(document: &Html, selectors: &[&str]) -> Vec<String> {
    let mut results = Vec::new();
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in document.select(&selector) {
            let text = normalize_whitespace(&element.text().collect::<String>());
            if !text.is_empty() {
                results.push(text);
            }
        }
    }
    results
}
