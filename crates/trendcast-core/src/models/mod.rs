//! Prediction models.
//!
//! Each model fits a curve to a historical [`Series`] and evaluates it at
//! the indices following the last observation:
//!
//! - [`LinearRegression`]: Ordinary least-squares line
//! - [`PolynomialRegression`]: Least-squares polynomial of fixed degree
//! - [`ExponentialGrowth`]: `y = exp(c0·x + c1)`, fitted on `ln(y)`
//!
//! # Choosing a Model
//!
//! | Model | Fitted Parameters | Requires |
//! |-------|-------------------|----------|
//! | Linear | slope, intercept | 2+ distinct `x` |
//! | Polynomial | `degree + 1` coefficients | `degree + 1` points, non-singular fit |
//! | Exponential | rate, offset | all `y > 0`, 2+ distinct `x` |
//!
//! Models are configuration holders only. Fitted parameters live for a
//! single call and nothing is cached between calls, so one model value can
//! be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use trendcast_core::models::{LinearRegression, PredictionModel};
//! use trendcast_core::types::Series;
//!
//! let series = Series::from_values(&[2.0, 4.0, 6.0]);
//! let predicted = LinearRegression.calculate(&series, 2).unwrap();
//!
//! assert_eq!(predicted[0].x, 4.0);
//! assert_eq!(predicted[0].y, 8.0);
//! assert_eq!(predicted[1].y, 10.0);
//! ```

mod exponential;
mod kind;
mod linear;
mod polynomial;

pub use exponential::{ExponentialFit, ExponentialGrowth};
pub use kind::ModelKind;
pub use linear::{LinearFit, LinearRegression};
pub use polynomial::{PolynomialFit, PolynomialRegression, DEFAULT_DEGREE};

use crate::error::{PredictionError, PredictionResult};
use crate::types::{Point, Series};

/// Largest magnitude at which every integer step in `x` is representable (2⁵³).
pub const MAX_CONTIGUOUS_X: f64 = 9_007_199_254_740_992.0;

/// A fitted curve that can be evaluated beyond the data.
pub trait FittedCurve {
    /// Evaluates the curve at `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Produces `future_points` points at `last_x + 1, …, last_x + future_points`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::DegenerateFit`] if any value is not finite.
    fn project(&self, last_x: f64, future_points: usize) -> PredictionResult<Vec<Point>> {
        (1..=future_points)
            .map(|i| {
                let x = last_x + i as f64;
                checked_point(x, self.evaluate(x))
            })
            .collect()
    }
}

/// A curve-fitting strategy that extrapolates a series.
pub trait PredictionModel: Send + Sync {
    /// Parameters produced by one fit.
    type Fit: FittedCurve;

    /// Fits the model to a non-empty series.
    ///
    /// # Errors
    ///
    /// - [`PredictionError::EmptyInput`] if the series is empty
    /// - [`PredictionError::InvalidInput`] if a coordinate is not finite
    /// - [`PredictionError::DegenerateFit`] if the fit is singular or underdetermined
    /// - [`PredictionError::InvalidDomain`] if a value cannot be transformed
    fn fit(&self, series: &Series) -> PredictionResult<Self::Fit>;

    /// Returns the name of the model.
    fn name(&self) -> &'static str;

    /// Fits the series and returns `future_points` predicted points.
    ///
    /// An empty series or a zero horizon yields an empty result; neither
    /// is an error. Projections reaching past [`MAX_CONTIGUOUS_X`] are
    /// rejected with [`PredictionError::InvalidInput`], since unit steps in
    /// `x` would round there.
    fn calculate(&self, series: &Series, future_points: usize) -> PredictionResult<Vec<Point>> {
        let Some(last_x) = series.last_x() else {
            return Ok(Vec::new());
        };
        if future_points == 0 {
            return Ok(Vec::new());
        }
        if future_points as f64 > MAX_CONTIGUOUS_X - last_x.abs() {
            return Err(PredictionError::invalid_input(format!(
                "projecting {future_points} points from x = {last_x} leaves the range of exact integer steps"
            )));
        }

        self.fit(series)?.project(last_x, future_points)
    }
}

/// The closed set of prediction models, each carrying its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// Least-squares line.
    Linear(LinearRegression),
    /// Least-squares polynomial.
    Polynomial(PolynomialRegression),
    /// Log-linearised exponential growth.
    ExponentialGrowth(ExponentialGrowth),
}

impl Model {
    /// Linear regression.
    #[must_use]
    pub fn linear() -> Self {
        Self::Linear(LinearRegression)
    }

    /// Polynomial regression of the given degree.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::InvalidConfig`] if `degree` is zero.
    pub fn polynomial(degree: usize) -> PredictionResult<Self> {
        PolynomialRegression::new(degree).map(Self::Polynomial)
    }

    /// Exponential growth.
    #[must_use]
    pub fn exponential_growth() -> Self {
        Self::ExponentialGrowth(ExponentialGrowth)
    }

    /// Builds a model from its kind; `degree` is used only for polynomials.
    pub fn from_kind(kind: ModelKind, degree: usize) -> PredictionResult<Self> {
        match kind {
            ModelKind::Linear => Ok(Self::linear()),
            ModelKind::Polynomial => Self::polynomial(degree),
            ModelKind::ExponentialGrowth => Ok(Self::exponential_growth()),
        }
    }

    /// Returns which kind of model this is.
    #[must_use]
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Linear(_) => ModelKind::Linear,
            Self::Polynomial(_) => ModelKind::Polynomial,
            Self::ExponentialGrowth(_) => ModelKind::ExponentialGrowth,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::linear()
    }
}

impl From<LinearRegression> for Model {
    fn from(model: LinearRegression) -> Self {
        Self::Linear(model)
    }
}

impl From<PolynomialRegression> for Model {
    fn from(model: PolynomialRegression) -> Self {
        Self::Polynomial(model)
    }
}

impl From<ExponentialGrowth> for Model {
    fn from(model: ExponentialGrowth) -> Self {
        Self::ExponentialGrowth(model)
    }
}

/// Parameters of whichever model was fitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Fit {
    /// Fitted line.
    Linear(LinearFit),
    /// Fitted polynomial.
    Polynomial(PolynomialFit),
    /// Fitted exponential.
    ExponentialGrowth(ExponentialFit),
}

impl FittedCurve for Fit {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Linear(fit) => fit.evaluate(x),
            Self::Polynomial(fit) => fit.evaluate(x),
            Self::ExponentialGrowth(fit) => fit.evaluate(x),
        }
    }

    fn project(&self, last_x: f64, future_points: usize) -> PredictionResult<Vec<Point>> {
        match self {
            Self::Linear(fit) => fit.project(last_x, future_points),
            Self::Polynomial(fit) => fit.project(last_x, future_points),
            Self::ExponentialGrowth(fit) => fit.project(last_x, future_points),
        }
    }
}

impl PredictionModel for Model {
    type Fit = Fit;

    fn fit(&self, series: &Series) -> PredictionResult<Fit> {
        match self {
            Self::Linear(model) => model.fit(series).map(Fit::Linear),
            Self::Polynomial(model) => model.fit(series).map(Fit::Polynomial),
            Self::ExponentialGrowth(model) => model.fit(series).map(Fit::ExponentialGrowth),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Linear(model) => model.name(),
            Self::Polynomial(model) => model.name(),
            Self::ExponentialGrowth(model) => model.name(),
        }
    }
}

/// Rejects empty or non-finite input before fitting.
fn check_fit_input(series: &Series) -> PredictionResult<()> {
    if series.is_empty() {
        return Err(PredictionError::EmptyInput);
    }
    series.ensure_finite()
}

/// Wraps a predicted value, refusing `NaN` and infinities.
fn checked_point(x: f64, y: f64) -> PredictionResult<Point> {
    if y.is_finite() {
        Ok(Point::new(x, y))
    } else {
        Err(PredictionError::degenerate_fit(format!(
            "prediction at x = {x} is not finite ({y})"
        )))
    }
}
