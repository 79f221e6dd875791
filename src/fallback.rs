//! The Fallback Responder: a canned summary with exactly the shape of a real
//! one, used whenever the model call cannot be completed. Never fails.

use std::sync::LazyLock;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::catalog::Language;
use crate::llm::ResultFieldMap;
use crate::schema::{JobSchema, not_specified};

/// Artificial latency so the loading state is visibly exercised even on the
/// canned path. UX simulation, not a resource constraint.
const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

static SAMPLES_EN: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    vec![
        ("jobTitle", "Software Engineer"),
        ("company", "Example Tech Ltd"),
        ("location", "Milan, Italy"),
        ("salary", "€45,000 - €60,000 per year"),
        (
            "description",
            "Development and maintenance of web applications on a cross-functional team.",
        ),
        ("benefits", "Health insurance; meal vouchers; remote work"),
        ("requirements", "3+ years of experience; knowledge of JavaScript"),
        ("employerReviews", "Employees praise the balance between autonomy and support."),
        ("rating", "4.1/5"),
        ("reviewCount", "128"),
        ("reviewSource", "Glassdoor"),
        ("companySize", "51-200 employees"),
        ("industry", "Software development"),
        ("businessType", "Product company"),
    ]
});

static SAMPLES_IT: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    vec![
        ("jobTitle", "Sviluppatore Software"),
        ("company", "Example Tech S.r.l."),
        ("location", "Milano, Italia"),
        ("salary", "€45.000 - €60.000 all'anno"),
        (
            "description",
            "Sviluppo e manutenzione di applicazioni web in un team interfunzionale.",
        ),
        ("benefits", "Assicurazione sanitaria; buoni pasto; lavoro da remoto"),
        ("requirements", "3+ anni di esperienza; conoscenza di JavaScript"),
        ("employerReviews", "I dipendenti apprezzano l'equilibrio tra autonomia e supporto."),
        ("rating", "4,1/5"),
        ("reviewCount", "128"),
        ("reviewSource", "Glassdoor"),
        ("companySize", "51-200 dipendenti"),
        ("industry", "Sviluppo software"),
        ("businessType", "Azienda di prodotto"),
    ]
});

fn sample_for(key: &str, language: Language) -> Option<&'static str> {
    let table = match language {
        Language::English => &SAMPLES_EN,
        Language::Italian => &SAMPLES_IT,
    };
    table
        .iter()
        .find(|(sample_key, _)| *sample_key == key)
        .map(|(_, value)| *value)
}

/// Produce a canned field map matching the schema's required keys.
///
/// Keys outside the static sample table (custom-format synthesized keys, new
/// catalog fields) get the language-correct sentinel.
pub async fn respond(schema: &JobSchema, language: Language) -> ResultFieldMap {
    debug!(fields = schema.required.len(), "serving canned summary");
    sleep(SIMULATED_DELAY).await;

    schema
        .required
        .iter()
        .map(|key| {
            let value = sample_for(key, language).unwrap_or_else(|| not_specified(language));
            (key.clone(), value.to_string())
        })
        .collect()
}
