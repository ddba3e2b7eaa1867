//! Linear regression.

use tracing::debug;
use trendcast_math::statistics::SeriesStatistics;

use super::{check_fit_input, checked_point, FittedCurve, PredictionModel};
use crate::error::PredictionResult;
use crate::types::{Point, Series};

/// Ordinary least-squares line through the series.
///
/// Fits `y = m·x + b` with
///
/// ```text
/// m = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
/// b = ȳ - m·x̄
/// ```
///
/// # Example
///
/// ```rust
/// use trendcast_core::models::{LinearRegression, PredictionModel};
/// use trendcast_core::types::Series;
///
/// let series = Series::from_values(&[1000.0, 1200.0, 1400.0, 1600.0, 1800.0]);
/// let fit = LinearRegression.fit(&series).unwrap();
///
/// assert!((fit.slope - 200.0).abs() < 1e-9);
/// assert!((fit.intercept - 800.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearRegression;

impl LinearRegression {
    /// Creates a new linear regression model.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Fitted slope and intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope `m`.
    pub slope: f64,
    /// Intercept `b`.
    pub intercept: f64,
}

impl FittedCurve for LinearFit {
    fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Steps by the slope from the first projected value instead of
    /// re-evaluating the line at every index.
    fn project(&self, last_x: f64, future_points: usize) -> PredictionResult<Vec<Point>> {
        let mut points = Vec::with_capacity(future_points);
        if future_points == 0 {
            return Ok(points);
        }

        let mut y = self.evaluate(last_x + 1.0);
        points.push(checked_point(last_x + 1.0, y)?);

        for i in 2..=future_points {
            y += self.slope;
            points.push(checked_point(last_x + i as f64, y)?);
        }

        Ok(points)
    }
}

impl PredictionModel for LinearRegression {
    type Fit = LinearFit;

    fn fit(&self, series: &Series) -> PredictionResult<LinearFit> {
        check_fit_input(series)?;

        let stats = SeriesStatistics::compute(&series.xs(), &series.ys())?;

        debug!(
            points = series.len(),
            slope = stats.slope,
            intercept = stats.intercept,
            "fitted linear regression"
        );

        Ok(LinearFit {
            slope: stats.slope,
            intercept: stats.intercept,
        })
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}
