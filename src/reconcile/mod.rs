pub mod extractors;
pub mod fallback;
pub mod normalize;
pub mod patterns;

pub use normalize::{is_meaningful, normalize_text};

use crate::models::{CnicField, CnicRecord, ReconcileMode, RecordBuilder, ValidationOutcome};
use crate::validation::RecordValidator;
use log::{debug, info, warn};
use patterns::NAME_TRIGGER;

/// Reconciles noisy per-region OCR text into a structured CNIC record.
///
/// The input is the ordered list of recognized strings, one per detected
/// region, top to bottom. Reconciliation is a pure synchronous function of
/// that list: no I/O, no shared state, safe to run concurrently from any
/// number of threads.
pub struct CnicReconciler {
    mode: ReconcileMode,
}

impl CnicReconciler {
    pub fn new(mode: ReconcileMode) -> Self {
        Self { mode }
    }

    /// Best-effort reconciler that never rejects.
    pub fn lenient() -> Self {
        Self::new(ReconcileMode::Lenient)
    }

    /// Reconciler that demands all eight fields valid.
    pub fn strict() -> Self {
        Self::new(ReconcileMode::Strict)
    }

    pub fn mode(&self) -> ReconcileMode {
        self.mode
    }

    /// Reconciles the region texts and, in strict mode, validates the
    /// result. A validation failure is a normal outcome describing the
    /// input image, not an error.
    pub fn reconcile(&self, regions: &[String]) -> ValidationOutcome {
        let record = self.extract(regions);
        match self.mode {
            ReconcileMode::Lenient => ValidationOutcome::Valid(record),
            ReconcileMode::Strict => match RecordValidator::validate(&record) {
                None => ValidationOutcome::Valid(record),
                Some(diagnostic) => {
                    warn!("validation failed: {}", diagnostic);
                    ValidationOutcome::Invalid(diagnostic)
                }
            },
        }
    }

    /// Best-effort extraction. Total: an empty or hopeless input yields a
    /// record with every field unset.
    pub fn extract(&self, regions: &[String]) -> CnicRecord {
        info!("reconciling {} OCR regions", regions.len());

        let normalized: Vec<String> = regions.iter().map(|text| normalize_text(text)).collect();
        let meaningful: Vec<String> = normalized
            .iter()
            .filter(|text| is_meaningful(text))
            .cloned()
            .collect();
        debug!("{} regions survived noise filtering", meaningful.len());

        let mut builder = RecordBuilder::new();

        // Pass 1: labeled extraction, first writer wins in detection order.
        for text in &meaningful {
            Self::apply_labeled_extractors(text, &mut builder);
        }

        // Pass 2: rescan the concatenation for anything still missing.
        Self::fill_from_combined(&normalized, &mut builder);

        // Pass 3: positional matching of labels to nearby standalone values,
        // then the unlabeled-name ordering heuristic.
        Self::match_standalone_values(&normalized, &mut builder);
        Self::fill_names_by_order(&meaningful, &mut builder);

        let record = builder.finish();
        debug!("reconciled record: {:?}", record);
        record
    }

    fn apply_labeled_extractors(text: &str, builder: &mut RecordBuilder) {
        let lower = text.to_lowercase();

        if !builder.is_set(CnicField::IdentityNumber) {
            if let Some(value) = Self::extract_identity_number(text) {
                builder.set(CnicField::IdentityNumber, value);
            }
        }

        Self::extract_dates(text, builder);

        if !builder.is_set(CnicField::Gender) {
            if let Some(value) = Self::extract_gender(text) {
                builder.set(CnicField::Gender, value);
            }
        }

        if !builder.is_set(CnicField::CountryOfStay) {
            if let Some(value) = Self::extract_country(text) {
                builder.set(CnicField::CountryOfStay, value);
            }
        }

        if !builder.is_set(CnicField::Name)
            && NAME_TRIGGER.is_match(text)
            && !lower.contains("father")
        {
            if let Some(value) = Self::extract_name(text) {
                builder.set(CnicField::Name, value);
            }
        }

        if !builder.is_set(CnicField::FatherName) && lower.contains("father") {
            if let Some(value) = Self::extract_father_name(text) {
                builder.set(CnicField::FatherName, value);
            }
        }
    }
}
