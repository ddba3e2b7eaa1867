//! Built-in sample datasets.
//!
//! Small savings-style series used to try the models without an input file.

use trendcast_core::types::Series;

use crate::error::{CliError, CliResult};

/// A named sample series.
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    /// Identifier accepted by `--dataset`.
    pub name: &'static str,
    /// What the data looks like.
    pub description: &'static str,
    values: &'static [f64],
}

impl Dataset {
    /// The series, indexed from 1.
    pub fn series(&self) -> Series {
        Series::from_values(self.values)
    }

    /// Number of observations.
    pub fn observations(&self) -> usize {
        self.values.len()
    }
}

/// Every built-in dataset.
pub const DATASETS: [Dataset; 3] = [
    Dataset {
        name: "steady-increase",
        description: "Steady increase in value over time; a clean linear trend.",
        values: &[1000.0, 1200.0, 1400.0, 1600.0, 1800.0],
    },
    Dataset {
        name: "fluctuating-savings",
        description: "Savings that rise along a linear trend with fluctuations.",
        values: &[
            1000.0, 1200.0, 1100.0, 1300.0, 1400.0, 1600.0, 1500.0, 1700.0, 1800.0, 2000.0,
        ],
    },
    Dataset {
        name: "exponential-growth",
        description: "Values that accelerate sharply; an exponential trend.",
        values: &[100.0, 200.0, 300.0, 1000.0, 10000.0],
    },
];

/// Looks up a dataset by name (case-insensitive, `_` and `-` interchangeable).
pub fn find(name: &str) -> CliResult<&'static Dataset> {
    let wanted = name.trim().to_lowercase().replace('_', "-");
    DATASETS
        .iter()
        .find(|d| d.name == wanted)
        .ok_or_else(|| CliError::UnknownDataset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(find("steady-increase").unwrap().observations(), 5);
        assert_eq!(find("Fluctuating_Savings").unwrap().observations(), 10);
        assert!(matches!(find("nope"), Err(CliError::UnknownDataset(_))));
    }

    #[test]
    fn test_series_is_one_based() {
        let series = find("exponential-growth").unwrap().series();
        assert_eq!(series.points()[0].x, 1.0);
        assert_eq!(series.last_x(), Some(5.0));
        assert_eq!(series.last().map(|p| p.y), Some(10000.0));
    }

    #[test]
    fn test_all_values_positive() {
        for dataset in &DATASETS {
            assert!(dataset.series().iter().all(|p| p.y > 0.0), "{}", dataset.name);
        }
    }
}
