//! Error types for gradeplan

use thiserror::Error;

/// Main error type for gradeplan operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradePlanError {
    /// The planning request is malformed (bad credits, ranges, names).
    ///
    /// Raised before any optimization work starts.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The allocator could not honor a verdict the analyzer marked feasible.
    ///
    /// Always a bug, never a user-facing condition.
    #[error("Unreachable state: {0}")]
    UnreachableState(String),
}

impl GradePlanError {
    /// Shorthand for an [`GradePlanError::InvalidInput`] error.
    pub fn invalid(message: impl Into<String>) -> Self {
        GradePlanError::InvalidInput(message.into())
    }

    /// Returns true for malformed-request errors.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GradePlanError::InvalidInput(_))
    }
}

/// Result type alias for gradeplan operations
pub type Result<T> = std::result::Result<T, GradePlanError>;
