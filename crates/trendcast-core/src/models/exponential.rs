//! Exponential growth.

use tracing::{debug, warn};
use trendcast_math::linear_algebra::{least_squares, Basis};
use trendcast_math::MathError;

use super::{check_fit_input, FittedCurve, PredictionModel};
use crate::error::PredictionResult;
use crate::types::Series;

/// Exponential growth `y = exp(c0·x + c1)`.
///
/// Fitted by linearising to `ln(y) = c0·x + c1` and solving the ordinary
/// least-squares problem over rows `[x, 1]`. Every `y` must be strictly
/// positive.
///
/// # Example
///
/// ```rust
/// use trendcast_core::models::{ExponentialGrowth, PredictionModel};
/// use trendcast_core::types::Series;
///
/// let series = Series::from_values(&[2.0, 4.0, 8.0]);
/// let predicted = ExponentialGrowth.calculate(&series, 2).unwrap();
///
/// assert!((predicted[0].y - 16.0).abs() < 1e-9);
/// assert!((predicted[1].y - 32.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExponentialGrowth;

impl ExponentialGrowth {
    /// Creates a new exponential growth model.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Fitted growth rate and log-offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFit {
    /// Continuous growth rate `c0` per index step.
    pub rate: f64,
    /// Log-scale offset `c1`.
    pub offset: f64,
}

impl ExponentialFit {
    /// Multiplicative growth per index step, `exp(c0)`.
    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        self.rate.exp()
    }
}

impl FittedCurve for ExponentialFit {
    fn evaluate(&self, x: f64) -> f64 {
        (self.rate * x + self.offset).exp()
    }
}

impl PredictionModel for ExponentialGrowth {
    type Fit = ExponentialFit;

    fn fit(&self, series: &Series) -> PredictionResult<ExponentialFit> {
        check_fit_input(series)?;

        let mut log_ys = Vec::with_capacity(series.len());
        for (index, point) in series.iter().enumerate() {
            if point.y <= 0.0 {
                warn!(index, value = point.y, "exponential fit rejected non-positive value");
                return Err(MathError::log_domain(index, point.y).into());
            }
            log_ys.push(point.y.ln());
        }

        let coefficients = least_squares(&series.xs(), &log_ys, Basis::Affine)?;
        let fit = ExponentialFit {
            rate: coefficients[0],
            offset: coefficients[1],
        };

        debug!(
            points = series.len(),
            rate = fit.rate,
            offset = fit.offset,
            "fitted exponential growth"
        );

        Ok(fit)
    }

    fn name(&self) -> &'static str {
        "Exponential Growth"
    }
}
