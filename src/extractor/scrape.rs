//! Per-field scraping routines over the parsed job page.
//!
//! Selector lists carry the known historical and A/B markup variants of the
//! target layout, newest first. Every routine degrades to a sentinel string,
//! never to an error or an empty field.

use scraper::{Html, Selector};

use crate::extractor::model::{
    COMPANY_NOT_FOUND, DESCRIPTION_NOT_FOUND, LOCATION_NOT_FOUND, NOT_SPECIFIED, TITLE_NOT_FOUND,
};
use crate::extractor::probes;

const TITLE_SELECTORS: [&str; 5] = [
    ".job-details-jobs-unified-top-card__job-title h1",
    "h1.jobs-unified-top-card__job-title",
    "h1.top-card-layout__title",
    "h1.topcard__title",
    "h1",
];

const COMPANY_SELECTORS: [&str; 5] = [
    ".job-details-jobs-unified-top-card__company-name a",
    ".job-details-jobs-unified-top-card__company-name",
    ".jobs-unified-top-card__company-name",
    "a.topcard__org-name-link",
    "span.topcard__flavor",
];

const LOCATION_SELECTORS: [&str; 4] = [
    ".job-details-jobs-unified-top-card__primary-description-container",
    ".jobs-unified-top-card__primary-description",
    ".jobs-unified-top-card__bullet",
    "span.topcard__flavor--bullet",
];

const SALARY_SELECTORS: [&str; 4] = [
    ".job-details-jobs-unified-top-card__job-insight",
    ".jobs-unified-top-card__job-insight",
    ".salary.compensation__salary",
    ".jobs-details__salary-main-rail-card",
];

const DESCRIPTION_SELECTORS: [&str; 5] = [
    ".jobs-description__content .jobs-box__html-content",
    ".jobs-description-content__text",
    "#job-details",
    ".description__text",
    ".show-more-less-html__markup",
];

/// Aria-label fragments of the description expander control, both languages.
const EXPANDER_LABELS: [&str; 5] = [
    "see more",
    "show more",
    "mostra altro",
    "mostra di più",
    "vedi di più",
];

const CURRENCY_MARKS: [&str; 5] = ["$", "€", "£", "USD", "EUR"];

const SALARY_KEYWORDS: [&str; 6] = [
    "salary",
    "compensation",
    "pay range",
    "retribuzione",
    "stipendio",
    "ral",
];

/// Minimum plausible description length; anything shorter is a placeholder
/// container, not the posting text.
const MIN_DESCRIPTION_LEN: usize = 50;

pub fn title(document: &Html) -> String {
    probes::first_non_empty(document, &TITLE_SELECTORS)
        .unwrap_or_else(|| TITLE_NOT_FOUND.to_string())
}

pub fn company(document: &Html) -> String {
    probes::first_non_empty(document, &COMPANY_SELECTORS)
        .unwrap_or_else(|| COMPANY_NOT_FOUND.to_string())
}

/// Location, keeping only the locality segment before the first `·`.
pub fn location(document: &Html) -> String {
    match probes::first_non_empty(document, &LOCATION_SELECTORS) {
        Some(text) => match text.split_once('·') {
            Some((locality, _)) => locality.trim().to_string(),
            None => text,
        },
        None => LOCATION_NOT_FOUND.to_string(),
    }
}

/// Salary, scanning every insight element rather than the first match: a
/// text carrying a currency mark beats one that merely mentions salary.
pub fn salary(document: &Html) -> String {
    let candidates = probes::scan_all(document, &SALARY_SELECTORS);

    if let Some(with_currency) = candidates
        .iter()
        .find(|text| CURRENCY_MARKS.iter().any(|mark| text.contains(mark)))
    {
        return with_currency.clone();
    }

    candidates
        .into_iter()
        .find(|text| {
            let lowered = text.to_lowercase();
            SALARY_KEYWORDS.iter().any(|kw| lowered.contains(kw))
        })
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Description, with a second pass when the text sits behind a "show more"
/// expander. The extension clicked the control and re-scanned; a static
/// parser already holds the collapsed text in the tree, so the presence of a
/// non-hidden expander relaxes the length gate for one re-scan.
pub fn description(document: &Html) -> String {
    if let Some(text) = probes::first_match(document, &DESCRIPTION_SELECTORS, |t| {
        t.len() > MIN_DESCRIPTION_LEN
    }) {
        return text;
    }

    if has_visible_expander(document)
        && let Some(text) = probes::first_non_empty(document, &DESCRIPTION_SELECTORS)
    {
        return text;
    }

    DESCRIPTION_NOT_FOUND.to_string()
}

fn has_visible_expander(document: &Html) -> bool {
    let Ok(selector) = Selector::parse("button[aria-label]") else {
        return false;
    };
    document.select(&selector).any(|element| {
        let value = element.value();
        let label = value.attr("aria-label").unwrap_or_default().to_lowercase();
        let hidden =
            value.attr("hidden").is_some() || value.attr("aria-hidden") == Some("true");
        !hidden && EXPANDER_LABELS.iter().any(|needle| label.contains(needle))
    })
}
