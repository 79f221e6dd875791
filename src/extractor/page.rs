//! URL gate: extraction only ever runs against recognized job-posting pages.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

// Accepts linkedin.com plus the www and country-prefixed hosts
// (it.linkedin.com, de.linkedin.com, ...).
static HOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z]{2}\.)?(?:www\.)?linkedin\.com$").unwrap());

static VIEW_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/jobs/view/\d+").unwrap());

const COLLECTIONS_PATH_PREFIX: &str = "/jobs/collections/";

/// True iff the URL points at a supported job page. This gate must pass
/// before any document query is attempted.
pub fn detect_page(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    if !HOST_REGEX.is_match(&host.to_lowercase()) {
        return false;
    }
    let path = url.path();
    VIEW_PATH_REGEX.is_match(path) || path.starts_with(COLLECTIONS_PATH_PREFIX)
}
