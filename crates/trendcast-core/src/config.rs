//! Prediction configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PredictionError, PredictionResult};
use crate::models::{Model, ModelKind, DEFAULT_DEGREE};

/// Default number of future points.
pub const DEFAULT_FUTURE_POINTS: usize = 5;

/// Which model to run and how far to project.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration:
///
/// ```toml
/// model = "polynomial"
/// degree = 3
/// future_points = 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Model to fit
    #[serde(default)]
    pub model: ModelKind,

    /// Polynomial degree (ignored by other models)
    #[serde(default = "default_degree")]
    pub degree: usize,

    /// Number of points to project
    #[serde(default = "default_future_points")]
    pub future_points: usize,
}

fn default_degree() -> usize {
    DEFAULT_DEGREE
}

fn default_future_points() -> usize {
    DEFAULT_FUTURE_POINTS
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            degree: default_degree(),
            future_points: default_future_points(),
        }
    }
}

impl PredictionConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> PredictionResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PredictionError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> PredictionResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PredictionError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> PredictionResult<String> {
        toml::to_string(self).map_err(|e| PredictionError::invalid_config(e.to_string()))
    }

    /// Checks that the configured model can be built.
    pub fn validate(&self) -> PredictionResult<()> {
        if self.model == ModelKind::Polynomial && self.degree == 0 {
            return Err(PredictionError::invalid_config(
                "polynomial degree must be at least 1",
            ));
        }
        Ok(())
    }

    /// Builds the configured model.
    pub fn build_model(&self) -> PredictionResult<Model> {
        Model::from_kind(self.model, self.degree)
    }
}
