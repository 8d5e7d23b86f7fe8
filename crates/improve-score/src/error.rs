use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Raised when a caller names a finding outside the fixed catalog.
    /// Integration bug, not a user-facing failure.
    #[error("invalid finding id: {0}")]
    InvalidFindingId(String),
}
