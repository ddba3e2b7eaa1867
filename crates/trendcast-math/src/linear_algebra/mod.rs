//! Linear algebra utilities.
//!
//! Dense LU factorisation with partial pivoting and the normal-equation
//! least-squares solver built on it. Systems here are small (a handful of
//! coefficients), so everything works on `nalgebra` dynamic matrices and
//! allocates per call; no state is shared between solves.

mod least_squares;

pub use least_squares::{design_matrix, least_squares, solve_normal_equations, Basis};

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Pivot threshold per unit of matrix scale and dimension.
const PIVOT_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// An LU factorisation `P·A = L·U` with row pivoting.
///
/// `L` is unit lower triangular and `U` upper triangular; both are stored in
/// one matrix (the unit diagonal of `L` is implicit).
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: DMatrix<f64>,
    /// `permutation[i]` is the row of `A` that ended up in row `i`.
    permutation: Vec<usize>,
}

impl LuDecomposition {
    /// Returns the unit lower triangular factor.
    #[must_use]
    pub fn l(&self) -> DMatrix<f64> {
        let n = self.lu.nrows();
        DMatrix::from_fn(n, n, |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.lu[(i, j)],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => 0.0,
        })
    }

    /// Returns the upper triangular factor.
    #[must_use]
    pub fn u(&self) -> DMatrix<f64> {
        self.lu.upper_triangle()
    }

    /// Returns the row permutation applied during pivoting.
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Solves `A·x = b` using the stored factors.
    pub fn solve(&self, b: &DVector<f64>) -> MathResult<DVector<f64>> {
        let n = self.lu.nrows();
        if n != b.len() {
            return Err(MathError::DimensionMismatch {
                rows1: n,
                cols1: n,
                rows2: b.len(),
                cols2: 1,
            });
        }

        // Solve Ly = Pb (forward substitution, unit diagonal)
        let mut y = DVector::zeros(n);
        for i in 0..n {
            let mut sum = b[self.permutation[i]];
            for j in 0..i {
                sum -= self.lu[(i, j)] * y[j];
            }
            y[i] = sum;
        }

        // Solve Ux = y (back substitution)
        let mut x = DVector::zeros(n);
        for i in (0..n).rev() {
            let mut sum = y[i];
            for j in i + 1..n {
                sum -= self.lu[(i, j)] * x[j];
            }
            x[i] = sum / self.lu[(i, i)];
        }

        Ok(x)
    }
}

/// Performs LU decomposition of a square matrix with partial pivoting.
///
/// At each step the row with the largest remaining entry in the pivot column
/// is swapped into place. A pivot no larger than `4·ε·n` times the largest
/// entry of the input is treated as zero, which absorbs the rounding left
/// behind when eliminating an exactly dependent row.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if the matrix is not square or contains non-finite entries
/// - [`MathError::SingularMatrix`] if no usable pivot exists in some column
pub fn lu_decomposition(matrix: &DMatrix<f64>) -> MathResult<LuDecomposition> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(MathError::invalid_input("Matrix must be square for LU decomposition"));
    }
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("Matrix contains non-finite entries"));
    }

    let scale = matrix.amax();
    let threshold = PIVOT_TOLERANCE * n as f64 * scale;

    let mut lu = matrix.clone();
    let mut permutation: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_abs = lu[(k, k)].abs();
        for i in k + 1..n {
            let candidate = lu[(i, k)].abs();
            if candidate > pivot_abs {
                pivot_row = i;
                pivot_abs = candidate;
            }
        }

        if pivot_abs <= threshold {
            log::debug!("singular at column {k}: |pivot| = {pivot_abs:e}, threshold = {threshold:e}");
            return Err(MathError::SingularMatrix);
        }

        if pivot_row != k {
            lu.swap_rows(k, pivot_row);
            permutation.swap(k, pivot_row);
        }

        for i in k + 1..n {
            let factor = lu[(i, k)] / lu[(k, k)];
            lu[(i, k)] = factor;

            for j in k + 1..n {
                lu[(i, j)] -= factor * lu[(k, j)];
            }
        }
    }

    Ok(LuDecomposition { lu, permutation })
}

/// Solves a linear system Ax = b using LU decomposition.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MathError::invalid_input("Matrix must be square"));
    }
    if n != b.len() {
        return Err(MathError::DimensionMismatch {
            rows1: n,
            cols1: n,
            rows2: b.len(),
            cols2: 1,
        });
    }

    lu_decomposition(a)?.solve(b)
}
