use thiserror::Error;

/// Errors at the collaborator boundary. Field extraction itself is total
/// and signals absence by leaving fields unset; a strict-mode rejection is
/// a normal outcome, not an error.
#[derive(Debug, Error)]
pub enum CnicError {
    #[error("region detection error: {0}")]
    Detection(String),

    #[error("text recognition error: {0}")]
    Recognition(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
