//! The Field Catalog: the fixed set of named, typed, bilingually-described
//! output fields for the predefined summary format.
//!
//! Defined once at process start and never mutated. Field identity is the
//! camelCase key, which is also the property name in the generated schema.

use std::sync::LazyLock;

/// Output language for descriptions, prompts and sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    /// Parse a UI language code. Unrecognized codes fall back to English.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "it" | "it-it" => Self::Italian,
            _ => Self::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Italian => "it",
        }
    }
}

/// One entry of the Field Catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub key: &'static str,
    pub value_type: &'static str,
    description_en: &'static str,
    description_it: &'static str,
}

impl FieldDefinition {
    /// Human-readable description in the requested language.
    ///
    /// English is the fallback when a translation is missing; today every
    /// field carries both languages.
    pub fn description(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.description_en,
            Language::Italian => self.description_it,
        }
    }
}

const fn field(
    key: &'static str,
    description_en: &'static str,
    description_it: &'static str,
) -> FieldDefinition {
    FieldDefinition {
        key,
        value_type: "string",
        description_en,
        description_it,
    }
}

static FIELDS: LazyLock<Vec<FieldDefinition>> = LazyLock::new(|| {
    vec![
        field(
            "jobTitle",
            "The title of the position, or \"Not specified\" if not available",
            "Il titolo della posizione, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "company",
            "The name of the hiring company, or \"Not specified\" if not available",
            "Il nome dell'azienda che assume, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "location",
            "The job location (city or region), or \"Not specified\" if not available",
            "La sede di lavoro (città o regione), oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "salary",
            "The offered salary or salary range, or \"Not specified\" if not available",
            "La retribuzione offerta o la fascia retributiva, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "description",
            "A short summary of the role and its responsibilities, or \"Not specified\" if not available",
            "Un breve riassunto del ruolo e delle sue responsabilità, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "benefits",
            "Benefits offered with the position, or \"Not specified\" if not available",
            "I benefit offerti con la posizione, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "requirements",
            "Required qualifications and experience, or \"Not specified\" if not available",
            "Le qualifiche e l'esperienza richieste, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "employerReviews",
            "A short digest of employee reviews of the company, or \"Not specified\" if not available",
            "Una breve sintesi delle recensioni dei dipendenti sull'azienda, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "rating",
            "The company's average employer rating (e.g. \"4.1/5\"), or \"Not specified\" if not available",
            "La valutazione media dell'azienda come datore di lavoro (es. \"4,1/5\"), oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "reviewCount",
            "How many employer reviews the rating is based on, or \"Not specified\" if not available",
            "Il numero di recensioni su cui si basa la valutazione, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "reviewSource",
            "Which review platform the reputation data came from, or \"Not specified\" if not available",
            "La piattaforma di recensioni da cui provengono i dati, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "companySize",
            "The size of the company (employee count or bracket), or \"Not specified\" if not available",
            "La dimensione dell'azienda (numero o fascia di dipendenti), oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "industry",
            "The industry the company operates in, or \"Not specified\" if not available",
            "Il settore in cui opera l'azienda, oppure \"Non specificato\" se non disponibile",
        ),
        field(
            "businessType",
            "The type of business (e.g. product company, consultancy, agency), or \"Not specified\" if not available",
            "Il tipo di attività (es. azienda di prodotto, consulenza, agenzia), oppure \"Non specificato\" se non disponibile",
        ),
    ]
});

/// Field keys that require live company-reputation lookups. A request that
/// includes any of these is routed to the tool-augmented endpoint first.
pub const REPUTATION_KEYS: [&str; 7] = [
    "employerReviews",
    "rating",
    "reviewCount",
    "reviewSource",
    "companySize",
    "industry",
    "businessType",
];

/// All catalog fields, in canonical order.
pub fn all() -> &'static [FieldDefinition] {
    &FIELDS
}

/// Look up a field by key.
pub fn get(key: &str) -> Option<&'static FieldDefinition> {
    FIELDS.iter().find(|f| f.key == key)
}

/// All catalog keys, in canonical order.
pub fn keys() -> Vec<&'static str> {
    FIELDS.iter().map(|f| f.key).collect()
}

/// Whether the key belongs to the company-reputation group.
pub fn is_reputation_key(key: &str) -> bool {
    REPUTATION_KEYS.contains(&key)
}
