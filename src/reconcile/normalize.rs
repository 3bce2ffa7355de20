//! Text normalization and noise filtering ahead of field extraction.

use super::patterns::{COUNTRY_OF_STAY_SQUEEZE, HEADER_PHRASES, NO_TEXT_PLACEHOLDER, TYPO_FIXES};

/// Cleans one raw OCR string: trims, fixes known typo tokens, folds squeezed
/// "country of stay" spellings, and collapses whitespace runs.
///
/// Total and deterministic; never fails.
pub fn normalize_text(text: &str) -> String {
    let mut text = text.trim().to_string();
    for (pattern, replacement) in TYPO_FIXES.iter() {
        text = pattern.replace_all(&text, *replacement).to_string();
    }
    text = COUNTRY_OF_STAY_SQUEEZE
        .replace_all(&text, "country of stay")
        .to_string();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a normalized string carries data worth extracting from.
///
/// Header phrases are dropped on exact match only, so a labeled field whose
/// line happens to contain a header word survives.
pub fn is_meaningful(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    if lower.len() < 2 {
        return false;
    }
    if lower.contains(NO_TEXT_PLACEHOLDER) {
        return false;
    }
    !HEADER_PHRASES.iter().any(|phrase| *phrase == lower)
}
