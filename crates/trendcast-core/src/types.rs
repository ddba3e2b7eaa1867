//! Series data types.

use serde::{Deserialize, Serialize};

use crate::error::{PredictionError, PredictionResult};

/// A single observation: an ordinal index `x` and its value `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Ordinal index (1-based, increasing).
    pub x: f64,
    /// Observed or predicted value.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of observations.
///
/// Order is significant: the last point anchors every projection. The
/// series is never mutated by a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    /// Creates a series from points in index order.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a series indexed `1, 2, …, n` from a slice of values.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| Point::new((i + 1) as f64, y))
            .collect()
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the series, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The final observation, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Index of the final observation, if any.
    #[must_use]
    pub fn last_x(&self) -> Option<f64> {
        self.last().map(|p| p.x)
    }

    /// All `x` values in order.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// All `y` values in order.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Checks that every coordinate is finite.
    pub fn ensure_finite(&self) -> PredictionResult<()> {
        match self
            .points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            Some(index) => {
                let p = self.points[index];
                Err(PredictionError::invalid_input(format!(
                    "point {index} ({}, {}) is not finite",
                    p.x, p.y
                )))
            }
            None => Ok(()),
        }
    }
}

impl From<Vec<Point>> for Series {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Series {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_is_one_based() {
        let series = Series::from_values(&[10.0, 20.0, 30.0]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.xs(), vec![1.0, 2.0, 3.0]);
        assert_eq!(series.ys(), vec![10.0, 20.0, 30.0]);
        assert_eq!(series.last_x(), Some(3.0));
    }

    #[test]
    fn test_empty_series() {
        let series = Series::default();
        assert!(series.is_empty());
        assert_eq!(series.last(), None);
        assert!(series.ensure_finite().is_ok());
    }

    #[test]
    fn test_ensure_finite_rejects_nan() {
        let series = Series::new(vec![Point::new(1.0, 1.0), Point::new(2.0, f64::NAN)]);
        let err = series.ensure_finite().unwrap_err();
        assert!(err.to_string().contains("point 1"));
    }

    #[test]
    fn test_serde_transparent() {
        let series: Series = vec![Point::from((1.0, 2.0))].into();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0}]"#);

        let back: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);
    }
}
