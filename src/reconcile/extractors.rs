// Labeled-field extraction for CnicReconciler. Every function is total:
// a string that doesn't match simply yields nothing.

use super::patterns::{
    anchored_date_pattern, COUNTRY_LABEL, DATE_KEYWORDS, DATE_TOKEN, FATHER_LABEL, GENDER_TOKEN,
    HEADER_VOCAB_TOKEN, IDENTITY_NUMBER, NAME_LABEL, NAME_SHAPE, OR_ARTIFACT,
};
use super::CnicReconciler;
use crate::models::{CnicField, RecordBuilder};
use log::debug;

impl CnicReconciler {
    /// CNIC identity number embedded anywhere in a string, with or without
    /// 5-7-1 separators, canonicalized to the dashed form.
    pub fn extract_identity_number(text: &str) -> Option<String> {
        let matched = IDENTITY_NUMBER.find(text)?;
        let digits: String = matched
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.len() != 13 {
            return None;
        }
        Some(format!(
            "{}-{}-{}",
            &digits[..5],
            &digits[5..12],
            &digits[12..]
        ))
    }

    /// Pulls every date the string can account for into the builder.
    ///
    /// A line that merged several labeled fields (two or more date tokens
    /// alongside two or more pending keywords) is resolved positionally:
    /// keyword offsets and date offsets are each sorted ascending and every
    /// keyword, left to right, consumes the first unused date that follows
    /// it. A line with a single pending keyword takes the first date after
    /// that keyword directly.
    pub fn extract_dates(text: &str, builder: &mut RecordBuilder) {
        let lower = text.to_lowercase();

        let dates: Vec<(usize, String)> = DATE_TOKEN
            .find_iter(text)
            .map(|m| (m.start(), normalize_date_separators(m.as_str())))
            .collect();
        if dates.is_empty() {
            return;
        }

        let mut keywords: Vec<(usize, CnicField)> = DATE_KEYWORDS
            .iter()
            .filter(|(_, field)| !builder.is_set(*field))
            .filter_map(|(keyword, field)| lower.find(keyword).map(|pos| (pos, *field)))
            .collect();
        if keywords.is_empty() {
            return;
        }
        keywords.sort_by_key(|(pos, _)| *pos);

        if dates.len() >= 2 && keywords.len() >= 2 {
            let mut used = vec![false; dates.len()];
            for (keyword_pos, field) in keywords {
                for (i, (date_pos, date)) in dates.iter().enumerate() {
                    if !used[i] && *date_pos > keyword_pos {
                        used[i] = true;
                        if builder.set(field, date.clone()) {
                            debug!("extracted {} from merged line: {}", field.label(), date);
                        }
                        break;
                    }
                }
            }
        } else {
            for (_, field) in keywords {
                let Some(pattern) = anchored_date_pattern(field) else {
                    continue;
                };
                if let Some(caps) = pattern.captures(text) {
                    let date = normalize_date_separators(&caps[1]);
                    if builder.set(field, date.clone()) {
                        debug!("extracted {}: {}", field.label(), date);
                    }
                }
            }
        }
    }

    /// Gender from a labeled line: an M/F token, else the spelled-out word.
    pub fn extract_gender(text: &str) -> Option<String> {
        let lower = text.to_lowercase();
        if !lower.contains("gender") {
            return None;
        }
        if let Some(caps) = GENDER_TOKEN.captures(text) {
            return Some(canonical_gender(&caps[1]));
        }
        if lower.contains("female") {
            return Some("Female".to_string());
        }
        if lower.contains("male") {
            return Some("Male".to_string());
        }
        None
    }

    /// Country of stay: strip the label, keep the remainder when it reads
    /// like a place name.
    pub fn extract_country(text: &str) -> Option<String> {
        if !text.to_lowercase().contains("country") {
            return None;
        }
        let cleaned = COUNTRY_LABEL.replace_all(text, "");
        let cleaned = cleaned.trim();
        let compact: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() > 2 && !compact.is_empty() && compact.chars().all(|c| c.is_alphabetic()) {
            return Some(title_case(cleaned));
        }
        None
    }

    /// Holder's name from a line led by the "Name" label.
    pub fn extract_name(text: &str) -> Option<String> {
        let stripped = NAME_LABEL.replace(text, "");
        clean_name_value(&stripped)
    }

    /// Father's name from a line carrying the "Father's Name" label.
    pub fn extract_father_name(text: &str) -> Option<String> {
        let stripped = FATHER_LABEL.replace_all(text, "");
        clean_name_value(&stripped)
    }
}

/// Rewrites period/hyphen date separators to the canonical slash form.
pub(crate) fn normalize_date_separators(raw: &str) -> String {
    raw.replace(['.', '-'], "/")
}

/// Maps an M/F token to the canonical gender label.
pub(crate) fn canonical_gender(token: &str) -> String {
    if token.eq_ignore_ascii_case("m") {
        "Male".to_string()
    } else {
        "Female".to_string()
    }
}

/// Title-cases each word: first letter upper, the rest lower.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shared cleanup for name values: drop header vocabulary and the injected
/// "Or" artifact, then accept only alphabetic multi-word remainders.
fn clean_name_value(value: &str) -> Option<String> {
    let value = HEADER_VOCAB_TOKEN.replace_all(value, "");
    let value = OR_ARTIFACT.replace_all(&value, " ");
    let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if NAME_SHAPE.is_match(&value) && value.split_whitespace().count() >= 2 {
        return Some(title_case(&value));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_number_canonicalization() {
        for text in [
            "16202-0883647-3",
            "1620208836473",
            "16202 0883647 3",
            "Identity Number 16202-0883647-3 and more",
        ] {
            assert_eq!(
                CnicReconciler::extract_identity_number(text).as_deref(),
                Some("16202-0883647-3"),
                "failed on {}",
                text
            );
        }
    }

    #[test]
    fn test_identity_number_rejects_other_digit_runs() {
        assert_eq!(CnicReconciler::extract_identity_number("123456789"), None);
        assert_eq!(
            CnicReconciler::extract_identity_number("16202088364731"),
            None
        );
    }

    #[test]
    fn test_merged_line_positional_date_matching() {
        let mut builder = RecordBuilder::new();
        CnicReconciler::extract_dates(
            "Identity Number Date of Birth 16202-0883647-3 24.08.1972 \
             Date of Expiry Date of issue 22.01.2021 22.01.2014",
            &mut builder,
        );
        let record = builder.finish();
        assert_eq!(record.date_of_birth.as_deref(), Some("24/08/1972"));
        assert_eq!(record.date_of_expiry.as_deref(), Some("22/01/2021"));
        assert_eq!(record.date_of_issue.as_deref(), Some("22/01/2014"));
    }

    #[test]
    fn test_single_label_anchored_date() {
        let mut builder = RecordBuilder::new();
        CnicReconciler::extract_dates("Date of Birth 24-08-1972", &mut builder);
        let record = builder.finish();
        assert_eq!(record.date_of_birth.as_deref(), Some("24/08/1972"));
        assert_eq!(record.date_of_issue, None);
    }

    #[test]
    fn test_dates_never_overwritten() {
        let mut builder = RecordBuilder::new();
        CnicReconciler::extract_dates("Date of Birth 24.08.1972", &mut builder);
        CnicReconciler::extract_dates("Date of Birth 01.01.2000", &mut builder);
        assert_eq!(
            builder.finish().date_of_birth.as_deref(),
            Some("24/08/1972")
        );
    }

    #[test]
    fn test_gender_from_label() {
        assert_eq!(
            CnicReconciler::extract_gender("Gender M").as_deref(),
            Some("Male")
        );
        assert_eq!(
            CnicReconciler::extract_gender("Gender female").as_deref(),
            Some("Female")
        );
        assert_eq!(CnicReconciler::extract_gender("Gender"), None);
        assert_eq!(CnicReconciler::extract_gender("Jamil Ahmad"), None);
    }

    #[test]
    fn test_country_extraction() {
        assert_eq!(
            CnicReconciler::extract_country("country of stay Saudi Arabia").as_deref(),
            Some("Saudi Arabia")
        );
        assert_eq!(
            CnicReconciler::extract_country("Country: Pakistan").as_deref(),
            Some("Pakistan")
        );
        // Label with no value, or a remainder that is not alphabetic.
        assert_eq!(CnicReconciler::extract_country("country of stay"), None);
        assert_eq!(
            CnicReconciler::extract_country("country of stay 123 Main"),
            None
        );
    }

    #[test]
    fn test_name_label_stripping() {
        assert_eq!(
            CnicReconciler::extract_name("Name Jamil Ahmad").as_deref(),
            Some("Jamil Ahmad")
        );
        assert_eq!(
            CnicReconciler::extract_name("Name: JAMIL AHMAD").as_deref(),
            Some("Jamil Ahmad")
        );
        // One-word remainders are not names.
        assert_eq!(CnicReconciler::extract_name("Name Jamil"), None);
    }

    #[test]
    fn test_father_name_or_artifact_removed() {
        assert_eq!(
            CnicReconciler::extract_father_name("father Name Khali Or Rahman").as_deref(),
            Some("Khali Rahman")
        );
    }

    #[test]
    fn test_name_header_vocab_stripped() {
        assert_eq!(
            CnicReconciler::extract_name("Name Jamil Ahmad Pakistan").as_deref(),
            Some("Jamil Ahmad")
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("KHALI RAHMAN"), "Khali Rahman");
        assert_eq!(title_case("saudi arabia"), "Saudi Arabia");
    }
}
