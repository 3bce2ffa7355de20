pub mod models;
pub mod processing;
pub mod reconcile;
pub mod utils;
pub mod validation;

pub use models::{CnicField, CnicRecord, ReconcileMode, ValidationOutcome};
pub use reconcile::CnicReconciler;
