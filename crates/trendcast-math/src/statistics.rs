//! Summary statistics for paired observations.
//!
//! Provides the sample means and the ordinary-least-squares line through a
//! set of `(x, y)` observations. Both routines refuse to divide by zero:
//! an empty input is [`MathError::EmptyInput`] and a sample with no spread
//! in `x` is [`MathError::DegenerateFit`].

use crate::error::{MathError, MathResult};

/// Ulps of `max|x|` that one deviation `x - x̄` may carry from rounding `x̄`.
///
/// `Σ(x - x̄)²` for identical abscissae can come out as a few ulps instead
/// of an exact zero when `x̄` is not representable.
const SPREAD_ULPS: f64 = 4.0;

/// Mean and least-squares line of a paired sample.
///
/// # Example
///
/// ```rust
/// use trendcast_math::statistics::SeriesStatistics;
///
/// let xs = [1.0, 2.0, 3.0];
/// let ys = [2.0, 4.0, 6.0];
///
/// let stats = SeriesStatistics::compute(&xs, &ys).unwrap();
/// assert!((stats.slope - 2.0).abs() < 1e-12);
/// assert!(stats.intercept.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStatistics {
    /// Arithmetic mean of `x`.
    pub mean_x: f64,
    /// Arithmetic mean of `y`.
    pub mean_y: f64,
    /// Least-squares slope.
    pub slope: f64,
    /// Least-squares intercept.
    pub intercept: f64,
}

impl SeriesStatistics {
    /// Computes means and the least-squares line in one pass over the data.
    pub fn compute(xs: &[f64], ys: &[f64]) -> MathResult<Self> {
        let (mean_x, mean_y) = mean(xs, ys)?;
        let (slope, intercept) = slope_intercept(xs, ys, mean_x, mean_y)?;

        Ok(Self {
            mean_x,
            mean_y,
            slope,
            intercept,
        })
    }
}

/// Returns `(mean_x, mean_y)`.
///
/// # Errors
///
/// - [`MathError::EmptyInput`] if there are no observations
/// - [`MathError::DimensionMismatch`] if `xs` and `ys` differ in length
pub fn mean(xs: &[f64], ys: &[f64]) -> MathResult<(f64, f64)> {
    check_paired(xs, ys)?;
    if xs.is_empty() {
        return Err(MathError::EmptyInput);
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    Ok((mean_x, mean_y))
}

/// Ordinary least squares slope and intercept about the supplied means.
///
/// ```text
/// m = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
/// b = ȳ - m·x̄
/// ```
///
/// # Errors
///
/// - [`MathError::EmptyInput`] if there are no observations
/// - [`MathError::DegenerateFit`] if every `x` is the same
pub fn slope_intercept(xs: &[f64], ys: &[f64], mean_x: f64, mean_y: f64) -> MathResult<(f64, f64)> {
    check_paired(xs, ys)?;
    if xs.is_empty() {
        return Err(MathError::EmptyInput);
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    let mut max_abs_x: f64 = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
        max_abs_x = max_abs_x.max(x.abs());
    }

    // Spread no larger than the rounding noise of x̄ itself
    let noise = SPREAD_ULPS * f64::EPSILON * max_abs_x;
    if denominator == 0.0 || denominator <= xs.len() as f64 * noise * noise {
        log::debug!(
            "rejecting line fit: Σ(x - x̄)² = {denominator:e} over {} points",
            xs.len()
        );
        return Err(MathError::degenerate_fit(
            "x values have no spread; slope is undefined",
        ));
    }

    let slope = numerator / denominator;
    let intercept = mean_y - slope * mean_x;

    Ok((slope, intercept))
}

fn check_paired(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    if xs.len() != ys.len() {
        return Err(MathError::DimensionMismatch {
            rows1: xs.len(),
            cols1: 1,
            rows2: ys.len(),
            cols2: 1,
        });
    }
    Ok(())
}
