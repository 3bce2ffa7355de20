// Literal pattern tables for CNIC field extraction. Keeping the keyword
// vocabularies and regexes as data keeps the extraction rules independently
// testable and auditable.

use crate::models::CnicField;
use lazy_static::lazy_static;
use regex::Regex;

/// Known OCR misspellings and the token each one stands for. Applied under
/// word boundaries so already-correct words are left alone.
pub const TYPO_TOKENS: [(&str, &str); 7] = [
    ("gende", "gender"),
    ("gendei", "gender"),
    ("gendet", "gender"),
    ("fathet", "father"),
    ("lssue", "issue"),
    ("birt", "birth"),
    ("expir", "expiry"),
];

/// Placeholder emitted by the OCR engine for a region with no readable text.
pub const NO_TEXT_PLACEHOLDER: &str = "no text detected";

/// Card-header phrases dropped by the noise filter. Exact-match only: the
/// same phrase embedded in a longer line is kept.
pub const HEADER_PHRASES: [&str; 6] = [
    "pakistan national identity card",
    "islamic republic of pakistan",
    "holder's signature",
    "holder signature",
    "national identity card",
    "national identity",
];

/// Card-header vocabulary stripped out of candidate name values.
pub const HEADER_VOCAB: [&str; 6] = [
    "pakistan",
    "national",
    "identity",
    "card",
    "islamic",
    "republic",
];

/// Label words that can never stand alone as a field value.
pub const IGNORE_WORDS: [&str; 26] = [
    "pakistan",
    "national",
    "identity",
    "card",
    "islamic",
    "republic",
    "holder",
    "holders",
    "holder's signature",
    "signature",
    "no",
    "text",
    "detected",
    "of",
    "the",
    "date",
    "name",
    "father",
    "fathers",
    "gender",
    "country",
    "stay",
    "birth",
    "issue",
    "expiry",
    "number",
];

/// Keywords that mark a region as label-bearing. Regions carrying any of
/// these never enter the unlabeled-name ordering fallback.
pub const RESERVED_KEYWORDS: [&str; 9] = [
    "father",
    "name",
    "gender",
    "date",
    "identity",
    "birth",
    "issue",
    "expiry",
    "country",
];

/// Countries commonly seen in the country-of-stay field. Anything else goes
/// through the place-name heuristic instead.
pub const KNOWN_COUNTRIES: [&str; 17] = [
    "pakistan",
    "afghanistan",
    "india",
    "iran",
    "china",
    "saudi arabia",
    "united arab emirates",
    "uae",
    "united kingdom",
    "uk",
    "united states",
    "usa",
    "canada",
    "australia",
    "turkey",
    "malaysia",
    "indonesia",
];

/// Date-label keywords and the field each one anchors.
pub const DATE_KEYWORDS: [(&str, CnicField); 3] = [
    ("birth", CnicField::DateOfBirth),
    ("issue", CnicField::DateOfIssue),
    ("expiry", CnicField::DateOfExpiry),
];

lazy_static! {
    /// Word-boundary typo fixes built from [`TYPO_TOKENS`].
    pub static ref TYPO_FIXES: Vec<(Regex, &'static str)> = TYPO_TOKENS
        .iter()
        .map(|(typo, fix)| {
            (Regex::new(&format!(r"(?i)\b{}\b", typo)).unwrap(), *fix)
        })
        .collect();

    /// Squeezed label variants ("CountryofStay", "Country ofStay") fold back
    /// to the canonical phrase.
    pub static ref COUNTRY_OF_STAY_SQUEEZE: Regex =
        Regex::new(r"(?i)country\s*of\s*stay").unwrap();

    /// CNIC identity number: 13 digits, optionally separated 5-7-1.
    pub static ref IDENTITY_NUMBER: Regex =
        Regex::new(r"\b\d{5}[-\s]?\d{7}[-\s]?\d\b").unwrap();

    /// A date token anywhere in a line: DD.MM.YYYY, DD-MM-YYYY or DD/MM/YYYY.
    pub static ref DATE_TOKEN: Regex =
        Regex::new(r"\b\d{2}[./-]\d{2}[./-]\d{4}\b").unwrap();

    /// A region whose entire content is one date token.
    pub static ref STANDALONE_DATE: Regex =
        Regex::new(r"^\d{2}[./-]\d{2}[./-]\d{4}$").unwrap();

    /// Keyword-anchored date captures, used when a line carries one label.
    pub static ref BIRTH_DATE: Regex =
        Regex::new(r"(?i)(?:date\s+of\s+)?birth[^\d]*(\d{2}[./-]\d{2}[./-]\d{4})").unwrap();
    pub static ref ISSUE_DATE: Regex =
        Regex::new(r"(?i)(?:date\s+of\s+)?issue[^\d]*(\d{2}[./-]\d{2}[./-]\d{4})").unwrap();
    pub static ref EXPIRY_DATE: Regex =
        Regex::new(r"(?i)(?:date\s+of\s+)?expiry[^\d]*(\d{2}[./-]\d{2}[./-]\d{4})").unwrap();

    /// A standalone M/F token, word-boundary bounded.
    pub static ref GENDER_TOKEN: Regex = Regex::new(r"(?i)\b([MF])\b").unwrap();

    /// A region that is nothing but a bare M/F.
    pub static ref BARE_GENDER: Regex = Regex::new(r"(?i)^\s*[MF]\s*$").unwrap();

    /// Country label prefix, with or without "of stay" and a colon.
    pub static ref COUNTRY_LABEL: Regex =
        Regex::new(r"(?i)country(?:\s+of\s+stay)?\s*:?\s*").unwrap();

    /// "Father's Name" label in any of its apostrophe/plural spellings.
    pub static ref FATHER_LABEL: Regex =
        Regex::new(r"(?i)father'?s?\s+name\s*:?\s*").unwrap();

    /// "Name" label at the start of a line.
    pub static ref NAME_LABEL: Regex = Regex::new(r"(?i)^name\s*:?\s*").unwrap();

    /// A line that plausibly labels the holder's name.
    pub static ref NAME_TRIGGER: Regex = Regex::new(r"(?i)(?:^name\b|name\s*:)").unwrap();

    /// OCR artifact: a spurious "Or" injected between name tokens.
    pub static ref OR_ARTIFACT: Regex = Regex::new(r"(?i)\s+or\s+").unwrap();

    /// Shape of an acceptable extracted name value.
    pub static ref NAME_SHAPE: Regex = Regex::new(r"^[A-Za-z ]{3,50}$").unwrap();

    /// Header vocabulary tokens, for stripping out of name candidates.
    pub static ref HEADER_VOCAB_TOKEN: Regex =
        Regex::new(r"(?i)\b(?:pakistan|national|identity|card|islamic|republic)\b").unwrap();

    /// Combined-text fallbacks: label followed directly by a value.
    pub static ref COMBINED_NAME: Regex = Regex::new(r"(?i)\bname\s+([A-Za-z ]+)").unwrap();
    pub static ref COMBINED_FATHER: Regex =
        Regex::new(r"(?i)father'?s?\s+name\s*:?\s+([A-Za-z ]{3,50})").unwrap();
    pub static ref COMBINED_GENDER: Regex = Regex::new(r"(?i)gender\s+([MF])\b").unwrap();

    /// Trailing labels that mark the end of a name captured from combined
    /// text.
    pub static ref TRAILING_LABEL: Regex =
        Regex::new(r"(?i)\s+(?:gender|country|date|identity|holder)").unwrap();
}

/// The anchored single-date pattern for a date field.
pub fn anchored_date_pattern(field: CnicField) -> Option<&'static Regex> {
    match field {
        CnicField::DateOfBirth => Some(&BIRTH_DATE),
        CnicField::DateOfIssue => Some(&ISSUE_DATE),
        CnicField::DateOfExpiry => Some(&EXPIRY_DATE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_number_rejects_longer_runs() {
        assert!(IDENTITY_NUMBER.is_match("1620208836473"));
        assert!(!IDENTITY_NUMBER.is_match("16202088364731"));
    }

    #[test]
    fn test_date_token_separators() {
        for text in ["24.08.1972", "24-08-1972", "24/08/1972"] {
            assert!(DATE_TOKEN.is_match(text), "no match for {}", text);
        }
        assert!(!DATE_TOKEN.is_match("4.8.1972"));
    }

    #[test]
    fn test_typo_fixes_leave_correct_words_alone() {
        let fix = |text: &str| {
            let mut text = text.to_string();
            for (re, replacement) in TYPO_FIXES.iter() {
                text = re.replace_all(&text, *replacement).to_string();
            }
            text
        };
        assert_eq!(fix("Date of lssue"), "Date of issue");
        assert_eq!(fix("Gender"), "Gender");
        assert_eq!(fix("Gende M"), "gender M");
        assert_eq!(fix("Date of Birth"), "Date of Birth");
    }

    #[test]
    fn test_country_squeeze_variants() {
        for text in ["CountryofStay", "Country ofStay", "Countryof Stay"] {
            assert!(COUNTRY_OF_STAY_SQUEEZE.is_match(text), "no match for {}", text);
        }
    }
}
