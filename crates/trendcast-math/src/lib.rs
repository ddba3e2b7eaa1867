//! # Trendcast Math
//!
//! Numerical kernels for the Trendcast series projection library.
//!
//! This crate provides:
//!
//! - **Statistics**: Sample means and the ordinary-least-squares line
//! - **Linear Algebra**: LU decomposition with partial pivoting and a
//!   normal-equation least-squares solver over pluggable bases
//!
//! ## Design Philosophy
//!
//! - **No Silent NaN**: Empty, singular and underdetermined problems are
//!   reported as errors instead of leaking `NaN`/`Infinity`
//! - **Reentrant**: Every routine is a pure function of its inputs
//! - **Small Systems**: Tuned for a handful of coefficients over a few dozen points

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod linear_algebra;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{
        least_squares, lu_decomposition, solve_linear_system, solve_normal_equations, Basis,
        LuDecomposition,
    };
    pub use crate::statistics::{mean, slope_intercept, SeriesStatistics};
}

pub use error::{MathError, MathResult};
