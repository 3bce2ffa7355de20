// Fallback passes for fields the labeled pass left empty: a rescan of the
// combined text, then positional matching of label regions to nearby
// standalone values.

use super::extractors::{canonical_gender, normalize_date_separators, title_case};
use super::normalize::is_meaningful;
use super::patterns::{
    anchored_date_pattern, BARE_GENDER, COMBINED_FATHER, COMBINED_GENDER, COMBINED_NAME,
    DATE_KEYWORDS, IGNORE_WORDS, NAME_TRIGGER, OR_ARTIFACT, RESERVED_KEYWORDS, STANDALONE_DATE,
    TRAILING_LABEL,
};
use super::CnicReconciler;
use crate::models::{CnicField, RecordBuilder};
use log::debug;

/// How far (in regions, either direction) a standalone value may sit from
/// the label it belongs to.
const WINDOW: usize = 2;

impl CnicReconciler {
    /// Second pass: rescan the concatenation of every region for fields the
    /// labeled pass missed.
    pub(crate) fn fill_from_combined(regions: &[String], builder: &mut RecordBuilder) {
        let combined = regions.join(" ");

        if !builder.is_set(CnicField::IdentityNumber) {
            if let Some(value) = Self::extract_identity_number(&combined) {
                builder.set(CnicField::IdentityNumber, value);
            }
        }

        for field in CnicField::DATES {
            if builder.is_set(field) {
                continue;
            }
            let Some(pattern) = anchored_date_pattern(field) else {
                continue;
            };
            if let Some(caps) = pattern.captures(&combined) {
                builder.set(field, normalize_date_separators(&caps[1]));
            }
        }

        if !builder.is_set(CnicField::Name) {
            for caps in COMBINED_NAME.captures_iter(&combined) {
                // Skip captures that are actually part of "father's name".
                let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
                let prefix: String = combined[..start]
                    .chars()
                    .rev()
                    .take(15)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                if prefix.to_lowercase().contains("father") {
                    continue;
                }
                let value = caps[1].trim().to_string();
                if !is_label_only(&value) {
                    builder.set(CnicField::Name, title_case(&value));
                    break;
                }
            }
        }

        if !builder.is_set(CnicField::FatherName) {
            if let Some(caps) = COMBINED_FATHER.captures(&combined) {
                let mut value = caps[1].trim().to_string();
                if let Some(m) = TRAILING_LABEL.find(&value) {
                    value = value[..m.start()].to_string();
                }
                let value = OR_ARTIFACT.replace_all(&value, " ").trim().to_string();
                if value.len() > 2 && !is_label_only(&value) {
                    builder.set(CnicField::FatherName, title_case(&value));
                }
            }
        }

        if !builder.is_set(CnicField::Gender) {
            if let Some(caps) = COMBINED_GENDER.captures(&combined) {
                builder.set(CnicField::Gender, canonical_gender(&caps[1]));
            }
        }
    }

    /// Third pass: positional matching over the normalized, unfiltered
    /// region list. Indices approximate on-card vertical position, so
    /// placeholder regions keep their slots.
    pub(crate) fn match_standalone_values(regions: &[String], builder: &mut RecordBuilder) {
        let date_like: Vec<bool> = regions
            .iter()
            .map(|text| STANDALONE_DATE.is_match(text.trim()))
            .collect();
        let name_like: Vec<bool> = regions
            .iter()
            .map(|text| looks_like_name(text.trim()) && is_meaningful(text))
            .collect();

        for (i, text) in regions.iter().enumerate() {
            let lower = text.to_lowercase();
            let window = i.saturating_sub(WINDOW)..(i + WINDOW + 1).min(regions.len());

            for (keyword, field) in DATE_KEYWORDS {
                if !builder.is_set(field) && lower.contains(keyword) {
                    for j in window.clone() {
                        if date_like[j] {
                            let date = normalize_date_separators(regions[j].trim());
                            if builder.set(field, date.clone()) {
                                debug!("matched {} from nearby region: {}", field.label(), date);
                            }
                            break;
                        }
                    }
                }
            }

            if !builder.is_set(CnicField::FatherName) && lower.contains("father") {
                for j in window.clone() {
                    if name_like[j] {
                        builder.set(CnicField::FatherName, title_case(regions[j].trim()));
                        break;
                    }
                }
            }

            if !builder.is_set(CnicField::Name)
                && (NAME_TRIGGER.is_match(text) || lower.trim() == "name")
            {
                // The holder's name label must not sit in a father-name
                // neighborhood.
                let context = regions[window.clone()].join(" ").to_lowercase();
                if !context.contains("father") {
                    for j in window {
                        if name_like[j] {
                            builder.set(CnicField::Name, title_case(regions[j].trim()));
                            break;
                        }
                    }
                }
            }
        }

        if !builder.is_set(CnicField::Gender) {
            Self::fill_bare_gender(regions, builder);
        }
    }

    /// A region that is nothing but "M" or "F" is accepted as gender once
    /// no labeled line has claimed it. Runs over the unfiltered list since
    /// single-character regions never survive the noise filter.
    fn fill_bare_gender(regions: &[String], builder: &mut RecordBuilder) {
        for text in regions {
            if BARE_GENDER.is_match(text) {
                builder.set(CnicField::Gender, canonical_gender(text.trim()));
                return;
            }
        }
    }

    /// Last resort when labels for both names are absent everywhere: card
    /// layout places the father's name above the holder's, so the first
    /// name-shaped unlabeled region is the father's and the second the
    /// holder's.
    pub(crate) fn fill_names_by_order(regions: &[String], builder: &mut RecordBuilder) {
        if builder.is_set(CnicField::Name) && builder.is_set(CnicField::FatherName) {
            return;
        }

        let candidates: Vec<String> = regions
            .iter()
            .map(|text| text.trim())
            .filter(|text| {
                let lower = text.to_lowercase();
                !RESERVED_KEYWORDS
                    .iter()
                    .any(|keyword| lower.contains(keyword))
            })
            .filter(|text| looks_like_name(text))
            .map(title_case)
            .collect();

        if !builder.is_set(CnicField::FatherName) {
            if let Some(first) = candidates.first() {
                builder.set(CnicField::FatherName, first.clone());
                debug!("father name taken from unlabeled region order");
            }
        }
        if !builder.is_set(CnicField::Name) {
            if let Some(second) = candidates.get(1) {
                builder.set(CnicField::Name, second.clone());
                debug!("name taken from unlabeled region order");
            }
        }
    }
}

/// Whether a region reads like a bare person name: alphabetic words only,
/// two to four of them, sane overall length.
pub(crate) fn looks_like_name(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }
    if !(5..=40).contains(&text.len()) {
        return false;
    }
    words
        .iter()
        .all(|word| word.chars().all(|c| c.is_alphabetic()))
}

/// Whether a candidate value is nothing but a label keyword.
fn is_label_only(text: &str) -> bool {
    IGNORE_WORDS.contains(&text.trim().to_lowercase().as_str())
}
