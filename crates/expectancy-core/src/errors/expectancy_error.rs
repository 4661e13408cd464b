use super::{ConfigError, ReconcileError};

/// Top-level error for the expectancy workspace.
///
/// Missing data is never an error here: undefined estimates travel as
/// [`crate::Expectation::Undefined`]. Errors cover invalid configuration
/// and input streams that break a stated precondition.
#[derive(Debug, thiserror::Error)]
pub enum ExpectancyError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("reconciliation error: {0}")]
    ReconcileError(#[from] ReconcileError),

    #[error("subject {subject} has no agent")]
    UnknownSubject { subject: String },
}

/// Convenience alias used across all crates.
pub type ExpectancyResult<T> = Result<T, ExpectancyError>;
