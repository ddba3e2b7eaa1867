//! # Trendcast Core
//!
//! Prediction models and pipeline for the Trendcast series projection library.
//!
//! This crate turns a finite historical series plus a horizon into a
//! deterministic sequence of future points:
//!
//! - **Types**: [`Point`](types::Point) and [`Series`](types::Series)
//! - **Models**: Linear, polynomial and exponential-growth regression
//! - **Pipeline**: Input validation, model dispatch and the output contract
//! - **Config**: TOML-backed model selection and horizon
//!
//! ## Design Philosophy
//!
//! - **Explicit Failures**: Singular fits and out-of-domain values are
//!   errors, never `NaN` or `Infinity` in the output
//! - **Stateless Models**: Fitted parameters live for one call only
//! - **Closed Set**: Model selection is an enum, not a trait object
//!
//! ## Example
//!
//! ```rust
//! use trendcast_core::prelude::*;
//!
//! let history = Series::from_values(&[2.0, 4.0, 8.0]);
//! let predicted = extrapolate(&history, 3, &Model::exponential_growth()).unwrap();
//!
//! assert_eq!(predicted.len(), 3);
//! assert!((predicted[0].y - 16.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::PredictionConfig;
    pub use crate::error::{PredictionError, PredictionResult};
    pub use crate::models::{
        ExponentialGrowth, FittedCurve, LinearRegression, Model, ModelKind, PolynomialRegression,
        PredictionModel,
    };
    pub use crate::pipeline::{extrapolate, PredictionPipeline};
    pub use crate::types::{Point, Series};
}

pub use error::{PredictionError, PredictionResult};
