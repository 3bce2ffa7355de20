use crate::reconcile::patterns::{IGNORE_WORDS, KNOWN_COUNTRIES};

pub struct CountryValidator;

impl CountryValidator {
    /// Two-tier acceptance: a known country passes outright; anything else
    /// must merely look like a place name (mostly alphabetic, sane length)
    /// and not be a label word the extractor could have misread. The second
    /// tier lets correctly-recognized but unlisted countries through while
    /// rejecting OCR garbage.
    pub fn is_valid(value: &str) -> bool {
        let lower = value.trim().to_lowercase();

        if KNOWN_COUNTRIES.contains(&lower.as_str()) {
            return true;
        }

        if lower.len() < 3 || lower.len() > 30 {
            return false;
        }

        let total = lower.chars().count();
        let alphabetic = lower
            .chars()
            .filter(|c| c.is_alphabetic() || c.is_whitespace())
            .count();
        if (alphabetic as f64) / (total as f64) < 0.8 {
            return false;
        }

        !IGNORE_WORDS.contains(&lower.as_str())
    }
}
