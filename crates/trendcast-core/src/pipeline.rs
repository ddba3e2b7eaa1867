//! Prediction pipeline.
//!
//! Validates the series, delegates to the selected model and hands back
//! exactly the extrapolated points. The pipeline adds no numerics of its
//! own; it owns the output contract:
//!
//! - a horizon of `0` or an empty series yields an empty result
//! - otherwise the result has exactly `future_points` points
//! - predicted `x` values are `last_x + 1, …, last_x + future_points`

use tracing::{debug, warn};

use crate::config::PredictionConfig;
use crate::error::PredictionResult;
use crate::models::{Model, PredictionModel};
use crate::types::{Point, Series};

/// Extrapolates `series` by `future_points` using `model`.
///
/// Errors from the model are returned unchanged.
pub fn extrapolate<M: PredictionModel>(
    series: &Series,
    future_points: usize,
    model: &M,
) -> PredictionResult<Vec<Point>> {
    series.ensure_finite()?;

    let predictions = model.calculate(series, future_points).map_err(|err| {
        warn!(model = model.name(), points = series.len(), %err, "prediction failed");
        err
    })?;

    debug_assert_eq!(
        predictions.len(),
        if series.is_empty() { 0 } else { future_points }
    );
    debug!(
        model = model.name(),
        points = series.len(),
        future_points,
        produced = predictions.len(),
        "extrapolated series"
    );

    Ok(predictions)
}

/// A configured model plus horizon.
///
/// # Example
///
/// ```rust
/// use trendcast_core::pipeline::PredictionPipeline;
/// use trendcast_core::types::Series;
///
/// let history = Series::from_values(&[1000.0, 1200.0, 1400.0]);
/// let pipeline = PredictionPipeline::default();
///
/// let predicted = pipeline.run(&history).unwrap();
/// assert_eq!(predicted.len(), 5);
///
/// let combined = PredictionPipeline::with_history(&history, &predicted);
/// assert_eq!(combined.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionPipeline {
    model: Model,
    future_points: usize,
}

impl PredictionPipeline {
    /// Creates a pipeline for `model` with the given horizon.
    #[must_use]
    pub fn new(model: Model, future_points: usize) -> Self {
        Self {
            model,
            future_points,
        }
    }

    /// Creates a pipeline from configuration.
    pub fn from_config(config: &PredictionConfig) -> PredictionResult<Self> {
        config.validate()?;
        Ok(Self::new(config.build_model()?, config.future_points))
    }

    /// The selected model.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The configured horizon.
    #[must_use]
    pub fn future_points(&self) -> usize {
        self.future_points
    }

    /// Extrapolates with the configured horizon.
    pub fn run(&self, series: &Series) -> PredictionResult<Vec<Point>> {
        self.extrapolate(series, self.future_points)
    }

    /// Extrapolates with an explicit horizon.
    pub fn extrapolate(&self, series: &Series, future_points: usize) -> PredictionResult<Vec<Point>> {
        extrapolate(series, future_points, &self.model)
    }

    /// Original points followed by predicted points.
    #[must_use]
    pub fn with_history(series: &Series, predictions: &[Point]) -> Series {
        series
            .iter()
            .chain(predictions)
            .copied()
            .collect()
    }
}

impl Default for PredictionPipeline {
    fn default() -> Self {
        let config = PredictionConfig::default();
        Self::new(Model::default(), config.future_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictionError;
    use crate::models::ModelKind;

    #[test]
    fn test_from_config() {
        let config = PredictionConfig {
            model: ModelKind::Polynomial,
            degree: 3,
            future_points: 4,
        };
        let pipeline = PredictionPipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.model().kind(), ModelKind::Polynomial);
        assert_eq!(pipeline.future_points(), 4);
    }

    #[test]
    fn test_from_config_rejects_zero_degree() {
        let config = PredictionConfig {
            model: ModelKind::Polynomial,
            degree: 0,
            future_points: 4,
        };
        assert!(PredictionPipeline::from_config(&config).is_err());
    }

    #[test]
    fn test_run_uses_configured_horizon() {
        let pipeline = PredictionPipeline::new(Model::linear(), 3);
        let result = pipeline.run(&Series::from_values(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].x, 4.0);
    }

    #[test]
    fn test_empty_series() {
        let pipeline = PredictionPipeline::default();
        assert!(pipeline.run(&Series::default()).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_finite_input() {
        let series = Series::new(vec![Point::new(1.0, 1.0), Point::new(f64::INFINITY, 2.0)]);
        assert!(matches!(
            PredictionPipeline::default().run(&series),
            Err(PredictionError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_with_history() {
        let history = Series::from_values(&[1.0, 2.0]);
        let predicted = vec![Point::new(3.0, 3.0)];

        let combined = PredictionPipeline::with_history(&history, &predicted);
        assert_eq!(
            combined.points(),
            &[Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)]
        );
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let series = Series::from_values(&[1.0, -1.0, 2.0]);
        let err = extrapolate(&series, 2, &Model::exponential_growth()).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidDomain { index: 1, .. }));
    }
}
