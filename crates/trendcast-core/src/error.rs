//! Error types for prediction.
//!
//! Every failure is raised synchronously from the fitting call. Only
//! [`PredictionError::EmptyInput`] is recoverable: models and the pipeline
//! answer an empty series with an empty projection rather than an error, so
//! callers see it only from the lower-level statistics routines.

use thiserror::Error;
use trendcast_math::MathError;

/// A specialized Result type for prediction operations.
pub type PredictionResult<T> = Result<T, PredictionError>;

/// Errors raised while fitting a model or projecting a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The input series has no observations.
    #[error("Empty input series")]
    EmptyInput,

    /// The fit is singular or underdetermined, or produced non-finite values.
    #[error("Degenerate fit: {reason}")]
    DegenerateFit {
        /// Description of what made the fit degenerate.
        reason: String,
    },

    /// A value is outside the domain the model can transform.
    #[error("Invalid domain: y = {value} at index {index}; {reason}")]
    InvalidDomain {
        /// Position of the offending point in the series.
        index: usize,
        /// The offending value.
        value: f64,
        /// What the model requires.
        reason: String,
    },

    /// The series contains unusable values.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// Model configuration is invalid.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Any other numerical failure.
    #[error("Numerical error: {0}")]
    Math(MathError),
}

impl PredictionError {
    /// Creates a degenerate fit error.
    #[must_use]
    pub fn degenerate_fit(reason: impl Into<String>) -> Self {
        Self::DegenerateFit {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns true for the "no prediction" case that callers may treat as success.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

impl From<MathError> for PredictionError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::EmptyInput => Self::EmptyInput,
            MathError::DegenerateFit { reason } => Self::DegenerateFit { reason },
            MathError::SingularMatrix | MathError::InsufficientData { .. } => {
                Self::from(err.into_fit_error())
            }
            MathError::InvalidDomain {
                index,
                value,
                transform,
            } => Self::InvalidDomain {
                index,
                value,
                reason: format!("{transform} requires a strictly positive argument"),
            },
            other => Self::Math(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_mapping() {
        assert_eq!(PredictionError::from(MathError::EmptyInput), PredictionError::EmptyInput);

        assert!(matches!(
            PredictionError::from(MathError::SingularMatrix),
            PredictionError::DegenerateFit { .. }
        ));

        assert!(matches!(
            PredictionError::from(MathError::insufficient_data(3, 1)),
            PredictionError::DegenerateFit { .. }
        ));

        assert!(matches!(
            PredictionError::from(MathError::log_domain(2, 0.0)),
            PredictionError::InvalidDomain { index: 2, .. }
        ));

        assert!(matches!(
            PredictionError::from(MathError::invalid_input("bad")),
            PredictionError::Math(_)
        ));
    }

    #[test]
    fn test_recoverable() {
        assert!(PredictionError::EmptyInput.is_recoverable());
        assert!(!PredictionError::degenerate_fit("singular").is_recoverable());
    }
}
