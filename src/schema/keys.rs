//! Key synthesis for the custom (free-text) schema path.
//!
//! Users describe the fields they want in prose ("team size, remote policy").
//! Each delimited segment becomes one schema property with a stable camelCase
//! key derived from the phrase.

/// Key used when a phrase normalizes to nothing usable.
pub const EMPTY_PHRASE_KEY: &str = "campo";

/// Key of the single catch-all field emitted when the whole prompt yields no
/// usable segments. The structured-output endpoint rejects schemas with zero
/// required properties, so an empty schema is never an option.
pub const CATCH_ALL_KEY: &str = "informazioniRichieste";

/// Split a free-text field request into phrases.
///
/// Delimiters are commas, newlines, hyphens and the bullet glyphs users paste
/// from lists. Empty segments are dropped; order is preserved.
pub fn split_phrases(text: &str) -> Vec<String> {
    text.split(|c: char| matches!(c, ',' | '\n' | '-' | '•' | '·' | '*'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Derive a camelCase identifier from an arbitrary phrase.
///
/// Lowercase, strip everything outside `[a-zA-Z0-9\s]`, collapse whitespace,
/// then title-case every word after the first. Phrases that normalize to
/// nothing get [`EMPTY_PHRASE_KEY`]. Distinct phrases can collide to the same
/// key; the caller decides what to do about that.
pub fn synthesize_key(phrase: &str) -> String {
    let lowered = phrase.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let mut words = cleaned.split_whitespace();
    let mut key = String::new();
    if let Some(first) = words.next() {
        key.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(head) = chars.next() {
            key.push(head.to_ascii_uppercase());
            key.push_str(chars.as_str());
        }
    }

    if key.is_empty() {
        EMPTY_PHRASE_KEY.to_string()
    } else {
        key
    }
}
