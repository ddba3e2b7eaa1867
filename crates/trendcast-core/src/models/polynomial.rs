//! Polynomial regression.

use tracing::debug;
use trendcast_math::linear_algebra::{least_squares, Basis};

use super::{check_fit_input, FittedCurve, PredictionModel};
use crate::error::{PredictionError, PredictionResult};
use crate::types::Series;

/// Degree used when none is configured.
pub const DEFAULT_DEGREE: usize = 2;

/// Least-squares polynomial `y = a₀ + a₁x + … + a_d x^d`.
///
/// The coefficients solve the normal equations over the power basis
/// `[1, x, …, x^d]`. A well-posed fit needs at least `d + 1` points with
/// enough distinct `x` values to make `XᵗX` invertible.
///
/// # Example
///
/// ```rust
/// use trendcast_core::models::{PolynomialRegression, PredictionModel};
/// use trendcast_core::types::Series;
///
/// // y = x²
/// let series = Series::from_values(&[1.0, 4.0, 9.0, 16.0]);
/// let model = PolynomialRegression::new(2).unwrap();
/// let predicted = model.calculate(&series, 1).unwrap();
///
/// assert!((predicted[0].y - 25.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialRegression {
    degree: usize,
}

impl PolynomialRegression {
    /// Creates a polynomial model of the given degree.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::InvalidConfig`] if `degree` is zero.
    pub fn new(degree: usize) -> PredictionResult<Self> {
        if degree == 0 {
            return Err(PredictionError::invalid_config(
                "polynomial degree must be at least 1",
            ));
        }
        Ok(Self { degree })
    }

    /// Returns the configured degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }
}

impl Default for PolynomialRegression {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
        }
    }
}

/// Fitted polynomial coefficients, lowest power first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit {
    /// `coefficients[j]` multiplies `x^j`.
    pub coefficients: Vec<f64>,
}

impl PolynomialFit {
    /// Degree of the fitted polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

impl FittedCurve for PolynomialFit {
    fn evaluate(&self, x: f64) -> f64 {
        // Horner's scheme
        self.coefficients.iter().rev().fold(0.0, |acc, &a| acc * x + a)
    }
}

impl PredictionModel for PolynomialRegression {
    type Fit = PolynomialFit;

    fn fit(&self, series: &Series) -> PredictionResult<PolynomialFit> {
        check_fit_input(series)?;

        let coefficients = least_squares(
            &series.xs(),
            &series.ys(),
            Basis::Polynomial {
                degree: self.degree,
            },
        )?;

        debug!(
            points = series.len(),
            degree = self.degree,
            ?coefficients,
            "fitted polynomial regression"
        );

        Ok(PolynomialFit { coefficients })
    }

    fn name(&self) -> &'static str {
        "Polynomial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinearRegression;
    use crate::types::Point;
    use approx::assert_relative_eq;

    fn linear_input() -> Series {
        Series::new(vec![
            Point::new(1.0, 2.0),
            Point::new(2.0, 4.0),
            Point::new(3.0, 6.0),
        ])
    }

    #[test]
    fn test_zero_degree_rejected() {
        assert!(matches!(
            PolynomialRegression::new(0),
            Err(PredictionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_default_degree() {
        assert_eq!(PolynomialRegression::default().degree(), 2);
    }

    #[test]
    fn test_quadratic_on_linear_data_matches_linear() {
        let series = linear_input();
        let model = PolynomialRegression::new(2).unwrap();

        let fit = model.fit(&series).unwrap();
        assert_eq!(fit.degree(), 2);
        assert_relative_eq!(fit.coefficients[2], 0.0, epsilon = 1e-9);

        let poly = model.calculate(&series, 5).unwrap();
        let line = LinearRegression.calculate(&series, 5).unwrap();

        assert_eq!(poly.len(), 5);
        for (p, l) in poly.iter().zip(&line) {
            assert_eq!(p.x, l.x);
            assert_relative_eq!(p.y, l.y, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_expected_values() {
        let result = PolynomialRegression::new(2)
            .unwrap()
            .calculate(&linear_input(), 5)
            .unwrap();

        let expected = [(4.0, 8.0), (5.0, 10.0), (6.0, 12.0), (7.0, 14.0), (8.0, 16.0)];
        for (point, (x, y)) in result.iter().zip(expected) {
            assert_eq!(point.x, x);
            assert_relative_eq!(point.y, y, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_cubic_recovers_coefficients() {
        // y = 1 - x + 0.5x³
        let series: Series = (1..=6)
            .map(|i| {
                let x = f64::from(i);
                Point::new(x, 1.0 - x + 0.5 * x.powi(3))
            })
            .collect();

        let fit = PolynomialRegression::new(3).unwrap().fit(&series).unwrap();
        assert_relative_eq!(fit.coefficients[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(fit.coefficients[1], -1.0, epsilon = 1e-6);
        assert_relative_eq!(fit.coefficients[2], 0.0, epsilon = 1e-6);
        assert_relative_eq!(fit.coefficients[3], 0.5, epsilon = 1e-6);
        assert_relative_eq!(fit.evaluate(7.0), 1.0 - 7.0 + 0.5 * 343.0, epsilon = 1e-5);
    }

    #[test]
    fn test_too_few_points_is_degenerate() {
        let series = Series::from_values(&[1.0, 2.0]);
        assert!(matches!(
            PolynomialRegression::new(2).unwrap().calculate(&series, 3),
            Err(PredictionError::DegenerateFit { .. })
        ));
    }

    #[test]
    fn test_identical_x_is_degenerate() {
        let series = Series::new(vec![
            Point::new(2.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 3.0),
            Point::new(2.0, 4.0),
        ]);
        assert!(matches!(
            PolynomialRegression::new(2).unwrap().calculate(&series, 3),
            Err(PredictionError::DegenerateFit { .. })
        ));
    }

    #[test]
    fn test_huge_x_is_degenerate() {
        let series = Series::new(vec![
            Point::new(1e80, 1.0),
            Point::new(2e80, 2.0),
            Point::new(3e80, 3.0),
            Point::new(4e80, 4.0),
        ]);
        assert!(matches!(
            PolynomialRegression::new(3).unwrap().calculate(&series, 2),
            Err(PredictionError::DegenerateFit { .. })
        ));
    }

    #[test]
    fn test_empty_series() {
        let model = PolynomialRegression::new(4).unwrap();
        assert!(model.calculate(&Series::default(), 5).unwrap().is_empty());
    }
}
