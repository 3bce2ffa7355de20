use serde::{Deserialize, Serialize};

/// Structured fields recovered from one CNIC image.
///
/// Every field is optional: the lenient pipeline returns whatever it could
/// reconcile, and only strict validation demands completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnicRecord {
    pub name: Option<String>,
    pub father_name: Option<String>,
    pub gender: Option<String>,
    pub country_of_stay: Option<String>,
    pub identity_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub date_of_issue: Option<String>,
    pub date_of_expiry: Option<String>,
}

impl CnicRecord {
    pub fn get(&self, field: CnicField) -> Option<&str> {
        match field {
            CnicField::Name => self.name.as_deref(),
            CnicField::FatherName => self.father_name.as_deref(),
            CnicField::Gender => self.gender.as_deref(),
            CnicField::CountryOfStay => self.country_of_stay.as_deref(),
            CnicField::IdentityNumber => self.identity_number.as_deref(),
            CnicField::DateOfBirth => self.date_of_birth.as_deref(),
            CnicField::DateOfIssue => self.date_of_issue.as_deref(),
            CnicField::DateOfExpiry => self.date_of_expiry.as_deref(),
        }
    }
}

/// The eight CNIC fields, in validator reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CnicField {
    Name,
    FatherName,
    Gender,
    CountryOfStay,
    IdentityNumber,
    DateOfBirth,
    DateOfIssue,
    DateOfExpiry,
}

impl CnicField {
    pub const ALL: [CnicField; 8] = [
        CnicField::Name,
        CnicField::FatherName,
        CnicField::Gender,
        CnicField::CountryOfStay,
        CnicField::IdentityNumber,
        CnicField::DateOfBirth,
        CnicField::DateOfIssue,
        CnicField::DateOfExpiry,
    ];

    pub const DATES: [CnicField; 3] = [
        CnicField::DateOfBirth,
        CnicField::DateOfIssue,
        CnicField::DateOfExpiry,
    ];

    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            CnicField::Name => "Name",
            CnicField::FatherName => "Father Name",
            CnicField::Gender => "Gender",
            CnicField::CountryOfStay => "Country Of Stay",
            CnicField::IdentityNumber => "Identity Number",
            CnicField::DateOfBirth => "Date Of Birth",
            CnicField::DateOfIssue => "Date Of Issue",
            CnicField::DateOfExpiry => "Date Of Expiry",
        }
    }
}

/// Builds a record with first-writer-wins semantics: the earliest region in
/// detection order that yields a value for a field keeps it.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: CnicRecord,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, field: CnicField) -> bool {
        self.record.get(field).is_some()
    }

    /// Sets a field unless an earlier region already claimed it.
    /// Returns whether the value was stored.
    pub fn set(&mut self, field: CnicField, value: String) -> bool {
        let slot = self.slot_mut(field);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Finishes the record, trimming every populated field.
    pub fn finish(mut self) -> CnicRecord {
        for field in CnicField::ALL {
            let slot = self.slot_mut(field);
            if let Some(value) = slot.take() {
                *slot = Some(value.trim().to_string());
            }
        }
        self.record
    }

    fn slot_mut(&mut self, field: CnicField) -> &mut Option<String> {
        match field {
            CnicField::Name => &mut self.record.name,
            CnicField::FatherName => &mut self.record.father_name,
            CnicField::Gender => &mut self.record.gender,
            CnicField::CountryOfStay => &mut self.record.country_of_stay,
            CnicField::IdentityNumber => &mut self.record.identity_number,
            CnicField::DateOfBirth => &mut self.record.date_of_birth,
            CnicField::DateOfIssue => &mut self.record.date_of_issue,
            CnicField::DateOfExpiry => &mut self.record.date_of_expiry,
        }
    }
}

/// Strict requires all eight fields valid or rejects with a diagnostic;
/// lenient returns best-effort partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileMode {
    #[default]
    Lenient,
    Strict,
}

/// Either a complete record or a diagnostic naming the offending fields.
/// Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(CnicRecord),
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_first_writer_wins() {
        let mut builder = RecordBuilder::new();
        assert!(builder.set(CnicField::Name, "Jamil Ahmad".to_string()));
        assert!(!builder.set(CnicField::Name, "Tariq Mehmood".to_string()));
        let record = builder.finish();
        assert_eq!(record.name.as_deref(), Some("Jamil Ahmad"));
    }

    #[test]
    fn test_finish_trims_fields() {
        let mut builder = RecordBuilder::new();
        builder.set(CnicField::Gender, "  Male ".to_string());
        let record = builder.finish();
        assert_eq!(record.gender.as_deref(), Some("Male"));
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(CnicField::FatherName.label(), "Father Name");
        assert_eq!(CnicField::DateOfExpiry.label(), "Date Of Expiry");
    }

    #[test]
    fn test_record_field_access() {
        let record = CnicRecord {
            identity_number: Some("16202-0883647-3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.get(CnicField::IdentityNumber),
            Some("16202-0883647-3")
        );
        assert_eq!(record.get(CnicField::Name), None);
    }
}
