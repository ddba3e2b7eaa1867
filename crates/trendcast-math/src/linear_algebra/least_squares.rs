//! Least-squares fitting through the normal equations.
//!
//! A design matrix `X` (one row per observation, one column per basis
//! function) and a target vector `Y` are reduced to the square system
//!
//! ```text
//! (XᵗX)·a = XᵗY
//! ```
//!
//! which is solved by LU decomposition for the coefficient vector `a`.

use nalgebra::{DMatrix, DVector};

use super::solve_linear_system;
use crate::error::{MathError, MathResult};

/// Feature-generation rule for one row of a design matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Power basis `[1, x, x², …, x^degree]`.
    Polynomial {
        /// Highest power of `x`.
        degree: usize,
    },
    /// Straight line `[x, 1]`: slope first, then intercept.
    Affine,
}

impl Basis {
    /// Number of basis functions, i.e. the number of fitted coefficients.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Polynomial { degree } => degree + 1,
            Self::Affine => 2,
        }
    }

    /// Evaluates every basis function at `x`.
    #[must_use]
    pub fn features(&self, x: f64) -> Vec<f64> {
        match *self {
            Self::Polynomial { degree } => {
                let mut row = Vec::with_capacity(degree + 1);
                let mut power = 1.0;
                for _ in 0..=degree {
                    row.push(power);
                    power *= x;
                }
                row
            }
            Self::Affine => vec![x, 1.0],
        }
    }
}

/// Builds the `n × k` design matrix for `xs` under `basis`.
#[must_use]
pub fn design_matrix(xs: &[f64], basis: Basis) -> DMatrix<f64> {
    let k = basis.width();
    let mut design = DMatrix::zeros(xs.len(), k);
    for (i, &x) in xs.iter().enumerate() {
        for (j, value) in basis.features(x).into_iter().enumerate() {
            design[(i, j)] = value;
        }
    }
    design
}

/// Solves `(XᵗX)·a = XᵗY` for `a`.
///
/// # Errors
///
/// - [`MathError::DimensionMismatch`] if `design` and `targets` differ in row count
/// - [`MathError::DegenerateFit`] if there are fewer rows than columns, `XᵗX`
///   is singular, or `XᵗX`/`XᵗY` overflow
pub fn solve_normal_equations(
    design: &DMatrix<f64>,
    targets: &DVector<f64>,
) -> MathResult<DVector<f64>> {
    let (n, k) = design.shape();
    if n != targets.len() {
        return Err(MathError::DimensionMismatch {
            rows1: n,
            cols1: k,
            rows2: targets.len(),
            cols2: 1,
        });
    }
    if n < k {
        return Err(MathError::insufficient_data(k, n).into_fit_error());
    }

    let xt = design.transpose();
    let xtx = &xt * design;
    let xty = &xt * targets;

    log::trace!("normal equations: {n} observations, {k} coefficients");

    if xtx.iter().chain(xty.iter()).any(|v| !v.is_finite()) {
        return Err(MathError::degenerate_fit(
            "normal equations overflow; x values are too large for this basis",
        ));
    }

    let coefficients = solve_linear_system(&xtx, &xty).map_err(MathError::into_fit_error)?;

    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(MathError::degenerate_fit("least-squares coefficients are not finite"));
    }

    Ok(coefficients)
}

/// Fits `ys ≈ X(xs)·a` in the least-squares sense and returns `a`.
///
/// Coefficients are ordered as the columns of `basis`.
///
/// # Example
///
/// ```rust
/// use trendcast_math::linear_algebra::{least_squares, Basis};
///
/// // y = 1 + 2x + 3x²
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [1.0, 6.0, 17.0, 34.0];
///
/// let a = least_squares(&xs, &ys, Basis::Polynomial { degree: 2 }).unwrap();
/// assert!((a[0] - 1.0).abs() < 1e-9);
/// assert!((a[1] - 2.0).abs() < 1e-9);
/// assert!((a[2] - 3.0).abs() < 1e-9);
/// ```
pub fn least_squares(xs: &[f64], ys: &[f64], basis: Basis) -> MathResult<Vec<f64>> {
    if xs.len() != ys.len() {
        return Err(MathError::DimensionMismatch {
            rows1: xs.len(),
            cols1: basis.width(),
            rows2: ys.len(),
            cols2: 1,
        });
    }
    if xs.is_empty() {
        return Err(MathError::EmptyInput);
    }

    let design = design_matrix(xs, basis);
    let targets = DVector::from_column_slice(ys);

    Ok(solve_normal_equations(&design, &targets)?
        .iter()
        .copied()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial_features() {
        let basis = Basis::Polynomial { degree: 3 };
        assert_eq!(basis.width(), 4);
        assert_eq!(basis.features(2.0), vec![1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn test_affine_features() {
        assert_eq!(Basis::Affine.width(), 2);
        assert_eq!(Basis::Affine.features(5.0), vec![5.0, 1.0]);
    }

    #[test]
    fn test_design_matrix_shape() {
        let x = design_matrix(&[1.0, 2.0, 3.0], Basis::Polynomial { degree: 2 });
        assert_eq!(x.shape(), (3, 3));
        assert_eq!(x[(2, 2)], 9.0);
        assert_eq!(x[(1, 0)], 1.0);
    }

    #[test]
    fn test_affine_fit() {
        // y = 3x - 1
        let a = least_squares(&[1.0, 2.0, 3.0, 4.0], &[2.0, 5.0, 8.0, 11.0], Basis::Affine).unwrap();
        assert_relative_eq!(a[0], 3.0, epsilon = 1e-10);
        assert_relative_eq!(a[1], -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quadratic_on_linear_data() {
        let a = least_squares(
            &[1.0, 2.0, 3.0],
            &[2.0, 4.0, 6.0],
            Basis::Polynomial { degree: 2 },
        )
        .unwrap();

        assert_relative_eq!(a[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(a[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(a[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_underdetermined_is_degenerate() {
        let result = least_squares(&[1.0, 2.0], &[1.0, 2.0], Basis::Polynomial { degree: 2 });
        assert!(matches!(result, Err(MathError::DegenerateFit { .. })));
    }

    #[test]
    fn test_identical_x_is_degenerate() {
        let result = least_squares(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], Basis::Affine);
        assert!(matches!(result, Err(MathError::DegenerateFit { .. })));
    }

    #[test]
    fn test_overflowing_normal_equations_are_degenerate() {
        // x³ is finite but the x⁶ entries of XᵗX are not
        let xs = [1e80, 2e80, 3e80, 4e80];
        let ys = [1.0, 2.0, 3.0, 4.0];
        let result = least_squares(&xs, &ys, Basis::Polynomial { degree: 3 });

        assert!(matches!(result, Err(MathError::DegenerateFit { .. })));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(least_squares(&[], &[], Basis::Affine), Err(MathError::EmptyInput));
    }

    #[test]
    fn test_overdetermined_noisy_line() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [1010.0, 1190.0, 1410.0, 1590.0];
        let a = least_squares(&xs, &ys, Basis::Affine).unwrap();

        assert_relative_eq!(a[0], 196.0, epsilon = 1e-8);
        assert_relative_eq!(a[1], 810.0, epsilon = 1e-8);
    }
}
