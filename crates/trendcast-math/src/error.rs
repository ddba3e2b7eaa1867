//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while fitting or solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// An operation that needs at least one observation received none.
    #[error("Empty input: at least one observation is required")]
    EmptyInput,

    /// The fitting problem is singular or underdetermined.
    #[error("Degenerate fit: {reason}")]
    DegenerateFit {
        /// Description of why the fit is not well-posed.
        reason: String,
    },

    /// A value lies outside the domain of a transform (e.g. `ln` of a non-positive number).
    #[error("Invalid domain: value {value} at index {index} is outside the domain of {transform}")]
    InvalidDomain {
        /// Position of the offending observation.
        index: usize,
        /// The offending value.
        value: f64,
        /// Name of the transform that rejected it.
        transform: &'static str,
    },

    /// Matrix is singular (not invertible).
    #[error("Singular matrix: cannot solve")]
    SingularMatrix,

    /// Matrix dimensions are incompatible.
    #[error("Incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Rows in first matrix.
        rows1: usize,
        /// Columns in first matrix.
        cols1: usize,
        /// Rows in second matrix.
        rows2: usize,
        /// Columns in second matrix.
        cols2: usize,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a degenerate fit error.
    #[must_use]
    pub fn degenerate_fit(reason: impl Into<String>) -> Self {
        Self::DegenerateFit {
            reason: reason.into(),
        }
    }

    /// Creates an invalid domain error for the natural logarithm.
    #[must_use]
    pub fn log_domain(index: usize, value: f64) -> Self {
        Self::InvalidDomain {
            index,
            value,
            transform: "ln",
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Folds solver failures into [`MathError::DegenerateFit`].
    ///
    /// A singular or underdetermined normal-equation system means the
    /// least-squares problem itself has no unique solution.
    #[must_use]
    pub fn into_fit_error(self) -> Self {
        match self {
            Self::SingularMatrix => Self::degenerate_fit("normal-equation matrix is singular"),
            Self::InsufficientData { required, actual } => Self::degenerate_fit(format!(
                "underdetermined system: {actual} observations for {required} coefficients"
            )),
            other => other,
        }
    }
}
