//! Error types for `svd` calls

use sparse_tsvd::SolverError;

/// A malformed or missing call argument
///
/// Always reported before any matrix buffer is built, so fixing the call and
/// retrying is enough.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("matrix required")]
    MatrixRequired,

    /// Not a non-empty array of equally long, non-empty arrays
    #[error("invalid matrix")]
    InvalidMatrix { reason: String },

    #[error("non-numeric matrix entry")]
    NonNumericEntry { row: usize, col: usize },

    #[error("dimension must be a number")]
    DimensionNotNumber,

    #[error("dimension must be non-negative")]
    NegativeDimension,

    #[error("settings must be a structured value")]
    SettingsNotStructured,

    #[error("invalid settings: {0}")]
    InvalidSetting(String),

    #[error("debug level must be a number")]
    DebugNotNumber,

    #[error("expected at most {max} arguments, got {got}")]
    TooManyArguments { max: usize, got: usize },
}

impl ArgumentError {
    pub(crate) fn invalid_matrix(reason: impl Into<String>) -> Self {
        Self::InvalidMatrix {
            reason: reason.into(),
        }
    }
}

/// The solver failed after the arguments were accepted
#[derive(Debug, thiserror::Error)]
pub enum ComputationError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("solver panicked: {0}")]
    Panicked(String),

    #[error("failed to encode result: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Any failure of an `svd` call
#[derive(Debug, thiserror::Error)]
pub enum SvdError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl SvdError {
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::Argument(_))
    }

    pub fn is_computation_error(&self) -> bool {
        matches!(self, Self::Computation(_))
    }

    /// The argument error, if this is one
    pub fn as_argument_error(&self) -> Option<&ArgumentError> {
        match self {
            Self::Argument(e) => Some(e),
            Self::Computation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ArgumentError::MatrixRequired.to_string(), "matrix required");
        assert_eq!(ArgumentError::invalid_matrix("ragged").to_string(), "invalid matrix");
        assert_eq!(
            ArgumentError::NonNumericEntry { row: 1, col: 0 }.to_string(),
            "non-numeric matrix entry"
        );
        assert_eq!(
            ArgumentError::DimensionNotNumber.to_string(),
            "dimension must be a number"
        );
        assert_eq!(
            ArgumentError::SettingsNotStructured.to_string(),
            "settings must be a structured value"
        );
    }

    #[test]
    fn test_solver_error_is_surfaced_verbatim() {
        let err: SvdError = ComputationError::from(SolverError::ConvergenceFailed { iterations: 7 }).into();
        assert!(err.is_computation_error());
        assert_eq!(err.to_string(), "Convergence failed after 7 iterations");
    }

    #[test]
    fn test_argument_error_conversion() {
        let err: SvdError = ArgumentError::DebugNotNumber.into();
        assert!(err.is_argument_error());
        assert_eq!(err.as_argument_error(), Some(&ArgumentError::DebugNotNumber));
    }
}
