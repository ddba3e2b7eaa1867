//! Model selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PredictionError;

/// Which prediction model to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Ordinary least-squares line.
    #[default]
    Linear,
    /// Least-squares polynomial of configurable degree.
    Polynomial,
    /// Log-linearised exponential growth.
    #[serde(rename = "exponential", alias = "exponential-growth")]
    ExponentialGrowth,
}

impl ModelKind {
    /// All kinds, in display order.
    pub const ALL: [ModelKind; 3] = [Self::Linear, Self::Polynomial, Self::ExponentialGrowth];

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Polynomial => "polynomial",
            Self::ExponentialGrowth => "exponential",
        }
    }

    /// When the model is a good fit for the data.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Linear => {
                "Fits a straight line; suited to series with a steady linear trend, \
                 which it continues into the future."
            }
            Self::Polynomial => {
                "Fits a polynomial curve; suited to trends that bend or fluctuate \
                 rather than follow a straight line."
            }
            Self::ExponentialGrowth => {
                "Fits compounding growth; suited to strictly positive values that \
                 grow by a roughly constant factor, such as interest or returns."
            }
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "polynomial" => Ok(Self::Polynomial),
            "exponential" | "exponential-growth" | "exponential_growth" => {
                Ok(Self::ExponentialGrowth)
            }
            other => Err(PredictionError::invalid_config(format!(
                "unknown model '{other}'; expected linear, polynomial or exponential"
            ))),
        }
    }
}
