use std::fs;

use url::Url;

use crate::extractor::{extract_from_html, model};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("failed to read test fixture")
}

fn job_url() -> Url {
    Url::parse("https://www.linkedin.com/jobs/view/4102233").unwrap()
}

#[test]
fn view_page_title_from_primary_selector() {
    let html = fixture("job_view.html");
    let data = extract_from_html(&html, &job_url()).unwrap();

    assert_eq!(data.title, "Senior Rust Engineer");
    assert_eq!(data.company, "Acme Robotics");
    assert_eq!(data.url, "https://www.linkedin.com/jobs/view/4102233");
}

#[test]
fn location_is_cut_at_the_separator() {
    let html = fixture("job_view.html");
    let data = extract_from_html(&html, &job_url()).unwrap();
    assert_eq!(data.location, "Milan, Lombardy, Italy");
}

#[test]
fn salary_with_currency_beats_insight_text() {
    let html = fixture("job_view.html");
    let data = extract_from_html(&html, &job_url()).unwrap();
    assert_eq!(data.salary, "€60,000/yr - €75,000/yr");
}

#[test]
fn benefits_and_requirements_are_derived_from_description() {
    let html = fixture("job_view.html");
    let data = extract_from_html(&html, &job_url()).unwrap();

    assert!(data.description.contains("motion-planning"));
    assert!(data.benefits.contains("health insurance"));
    assert!(data.benefits.contains("vacation"));
    assert!(data.requirements.contains("experience required"));
    assert!(data.requirements.contains("degree"));
}

#[test]
fn collapsed_description_is_recovered_via_expander() {
    let html = fixture("collapsed.html");
    let url = Url::parse("https://it.linkedin.com/jobs/view/77").unwrap();
    let data = extract_from_html(&html, &url).unwrap();

    assert_eq!(data.title, "Data Engineer");
    assert_eq!(data.company, "Fabbrica Dati S.r.l.");
    assert_eq!(data.location, "Torino, Piemonte");
    assert_eq!(data.description, "Pipeline e data warehouse.");
    // Too short to mention anything derivable.
    assert_eq!(data.benefits, model::NOT_SPECIFIED);
    assert_eq!(data.requirements, model::NOT_SPECIFIED);
}

#[test]
fn unrecognized_url_short_circuits_to_none() {
    let html = fixture("job_view.html");
    let url = Url::parse("https://www.linkedin.com/feed/").unwrap();
    assert!(extract_from_html(&html, &url).is_none());
}

#[test]
fn empty_document_still_produces_full_field_set() {
    let data = extract_from_html("<html><body></body></html>", &job_url()).unwrap();
    assert_eq!(data.title, model::TITLE_NOT_FOUND);
    assert_eq!(data.company, model::COMPANY_NOT_FOUND);
    assert_eq!(data.location, model::LOCATION_NOT_FOUND);
    assert_eq!(data.salary, model::NOT_SPECIFIED);
    assert_eq!(data.description, model::DESCRIPTION_NOT_FOUND);
    assert_eq!(data.benefits, model::NOT_SPECIFIED);
    assert_eq!(data.requirements, model::NOT_SPECIFIED);
}

#[test]
fn malformed_html_is_tolerated() {
    let html = "<html><h1>Broken<div class='description__text'>Unclosed";
    let data = extract_from_html(html, &job_url()).unwrap();
    assert_eq!(data.title, "Broken Unclosed");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn extract_never_panics(html in ".*") {
            let _ = extract_from_html(&html, &job_url());
        }

        #[test]
        fn extracted_fields_are_never_empty(html in ".*") {
            if let Some(data) = extract_from_html(&html, &job_url()) {
                prop_assert!(!data.title.is_empty());
                prop_assert!(!data.company.is_empty());
                prop_assert!(!data.location.is_empty());
                prop_assert!(!data.salary.is_empty());
                prop_assert!(!data.description.is_empty());
                prop_assert!(!data.benefits.is_empty());
                prop_assert!(!data.requirements.is_empty());
            }
        }
    }
}
