pub mod data;

pub use data::{CnicField, CnicRecord, ReconcileMode, RecordBuilder, ValidationOutcome};
