use super::{CountryValidator, DateValidator};
use crate::models::{CnicField, CnicRecord};

/// Strict completeness-and-format check over a reconciled record.
pub struct RecordValidator;

impl RecordValidator {
    /// Returns a diagnostic when the record fails strict validation, `None`
    /// when it is acceptable.
    ///
    /// Missing fields are aggregated into a single message, while date and
    /// country problems report only the first offender. The asymmetry is
    /// kept on purpose: downstream consumers match on the first-only
    /// message shape for format failures.
    pub fn validate(record: &CnicRecord) -> Option<String> {
        let missing: Vec<&str> = CnicField::ALL
            .iter()
            .filter(|field| {
                record
                    .get(**field)
                    .map_or(true, |value| value.trim().is_empty())
            })
            .map(|field| field.label())
            .collect();
        if !missing.is_empty() {
            return Some(format!(
                "Image quality is poor. Could not detect: {}. Please provide a clearer image.",
                missing.join(", ")
            ));
        }

        for field in CnicField::DATES {
            let value = record.get(field).unwrap_or_default();
            if !DateValidator::is_valid(value) {
                return Some(format!(
                    "Image quality is poor. {} is incomplete or invalid. Please provide a clearer image.",
                    field.label()
                ));
            }
        }

        let country = record.get(CnicField::CountryOfStay).unwrap_or_default();
        if !CountryValidator::is_valid(country) {
            return Some(format!(
                "Image quality is poor. Country '{}' appears invalid. Please provide a clearer image.",
                country
            ));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> CnicRecord {
        CnicRecord {
            name: Some("Jamil Ahmad".to_string()),
            father_name: Some("Khali Rahman".to_string()),
            gender: Some("Male".to_string()),
            country_of_stay: Some("Saudi Arabia".to_string()),
            identity_number: Some("16202-0883647-3".to_string()),
            date_of_birth: Some("24/08/1972".to_string()),
            date_of_issue: Some("22/01/2014".to_string()),
            date_of_expiry: Some("22/01/2021".to_string()),
        }
    }

    #[test]
    fn test_complete_record_passes() {
        assert_eq!(RecordValidator::validate(&complete_record()), None);
    }

    #[test]
    fn test_missing_fields_aggregate_into_one_message() {
        let mut record = complete_record();
        record.gender = None;
        record.date_of_expiry = None;
        let diagnostic = RecordValidator::validate(&record).expect("must fail");
        assert!(diagnostic.contains("Gender"));
        assert!(diagnostic.contains("Date Of Expiry"));
        assert!(diagnostic.starts_with("Image quality is poor. Could not detect:"));
    }

    #[test]
    fn test_empty_record_reports_all_eight_fields() {
        let diagnostic =
            RecordValidator::validate(&CnicRecord::default()).expect("must fail");
        for field in CnicField::ALL {
            assert!(diagnostic.contains(field.label()));
        }
    }

    #[test]
    fn test_first_invalid_date_reported_alone() {
        let mut record = complete_record();
        record.date_of_birth = Some("32/01/2000".to_string());
        record.date_of_issue = Some("01/13/2000".to_string());
        let diagnostic = RecordValidator::validate(&record).expect("must fail");
        assert!(diagnostic.contains("Date Of Birth"));
        assert!(!diagnostic.contains("Date Of Issue"));
    }

    #[test]
    fn test_label_shaped_country_rejected() {
        // The country extractor picked up normalized OCR garbage that is
        // really a field label; the alphabetic-ratio heuristic alone would
        // pass it, the reserved-word check must not.
        let mut record = complete_record();
        record.country_of_stay = Some("Gender".to_string());
        let diagnostic = RecordValidator::validate(&record).expect("must fail");
        assert!(diagnostic.contains("Country 'Gender' appears invalid"));
    }
}
