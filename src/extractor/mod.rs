//! The Page Extractor: best-effort scraping of a recognized job-posting page.
//!
//! Failure semantics are deliberate and uniform: an unrecognized URL returns
//! `None`, a missing field returns its sentinel string, and nothing in here
//! ever returns an error. The page's markup is unversioned; tolerance is
//! built in, not bolted on with error handling.

pub mod derive;
pub mod model;
pub mod page;
pub mod probes;
pub mod scrape;

#[cfg(test)]
mod tests;

pub use model::ScrapedJobData;
pub use page::detect_page;

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::fetcher::PageResponse;

/// Scrape a parsed document. Returns `None` when the URL gate rejects the
/// page; callers treat that as "extraction unavailable", not as a failure.
pub fn extract(document: &Html, url: &Url) -> Option<ScrapedJobData> {
    if !page::detect_page(url) {
        debug!(url = %url, "not a recognized job page");
        return None;
    }

    let description = scrape::description(document);
    let benefits = derive::benefits(&description);
    let requirements = derive::requirements(&description);

    Some(ScrapedJobData {
        title: scrape::title(document),
        company: scrape::company(document),
        location: scrape::location(document),
        salary: scrape::salary(document),
        description,
        benefits,
        requirements,
        url: url.to_string(),
    })
}

/// Parse raw HTML and scrape it.
pub fn extract_from_html(html: &str, url: &Url) -> Option<ScrapedJobData> {
    if !page::detect_page(url) {
        return None;
    }
    let document = Html::parse_document(html);
    extract(&document, url)
}

/// Scrape a fetched page.
pub fn extract_from_response(response: &PageResponse) -> Option<ScrapedJobData> {
    extract_from_html(&response.body_utf8, &response.url_final)
}
