//! Benefits and requirements are not scraped separately; they are mined from
//! the already-extracted description by bilingual keyword scanning.

use crate::extractor::model::NOT_SPECIFIED;

const BENEFIT_KEYWORDS: [&str; 14] = [
    "insurance",
    "vacation",
    "retirement",
    "health",
    "pension",
    "bonus",
    "wellness",
    "flexible",
    "remote",
    "assicurazione",
    "ferie",
    "previdenza",
    "welfare",
    "buoni pasto",
];

const REQUIREMENT_KEYWORDS: [&str; 12] = [
    "qualification",
    "experience",
    "must have",
    "must-have",
    "required",
    "degree",
    "proficiency",
    "knowledge of",
    "requisiti",
    "esperienza",
    "laurea",
    "conoscenza",
];

const MIN_BENEFIT_SENTENCE_LEN: usize = 10;
const MIN_REQUIREMENT_SENTENCE_LEN: usize = 15;
const MAX_SENTENCES: usize = 3;

pub fn benefits(description: &str) -> String {
    scan_sentences(description, &BENEFIT_KEYWORDS, MIN_BENEFIT_SENTENCE_LEN)
}

pub fn requirements(description: &str) -> String {
    scan_sentences(description, &REQUIREMENT_KEYWORDS, MIN_REQUIREMENT_SENTENCE_LEN)
}

/// Collect up to three deduplicated sentences that mention a keyword and
/// clear the minimum length; empty result degrades to the sentinel.
fn scan_sentences(description: &str, keywords: &[&str], min_len: usize) -> String {
    let lowered = description.to_lowercase();
    let mut collected: Vec<String> = Vec::new();

    for sentence in lowered.split(['.', '!', '?']) {
        let sentence = sentence.trim();
        if sentence.len() <= min_len {
            continue;
        }
        if !keywords.iter().any(|kw| sentence.contains(kw)) {
            continue;
        }
        if collected.iter().any(|seen| seen == sentence) {
            continue;
        }
        collected.push(sentence.to_string());
        if collected.len() == MAX_SENTENCES {
            break;
        }
    }

    if collected.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        collected.join("; ")
    }
}
