//! Integration test: end-to-end projections through the pipeline.
//!
//! Covers the reference scenarios for each model together with the
//! failure modes callers must handle.
//!
//! | Input | Model | Expected |
//! |-------|-------|----------|
//! | (1,2),(2,4),(3,6) | Linear | 8, 10, 12, 14, 16 |
//! | (1,2),(2,4),(3,6) | Polynomial(2) | same as linear |
//! | (1,2),(2,4),(3,8) | Exponential | 16, 32, 64, 128, 256 |

use approx::assert_relative_eq;

use trendcast_core::prelude::*;

fn doubling_line() -> Series {
    Series::new(vec![
        Point::new(1.0, 2.0),
        Point::new(2.0, 4.0),
        Point::new(3.0, 6.0),
    ])
}

#[test]
fn test_linear_reference_values() {
    let pipeline = PredictionPipeline::new(Model::linear(), 5);
    let result = pipeline.run(&doubling_line()).unwrap();

    assert_eq!(
        result,
        vec![
            Point::new(4.0, 8.0),
            Point::new(5.0, 10.0),
            Point::new(6.0, 12.0),
            Point::new(7.0, 14.0),
            Point::new(8.0, 16.0),
        ]
    );
}

#[test]
fn test_polynomial_reproduces_linear() {
    let series = doubling_line();
    let linear = extrapolate(&series, 5, &Model::linear()).unwrap();
    let polynomial = extrapolate(&series, 5, &Model::polynomial(2).unwrap()).unwrap();

    for (l, p) in linear.iter().zip(&polynomial) {
        assert_eq!(l.x, p.x);
        assert_relative_eq!(l.y, p.y, max_relative = 1e-9);
    }
}

#[test]
fn test_exponential_reference_values() {
    let series = Series::new(vec![
        Point::new(1.0, 2.0),
        Point::new(2.0, 4.0),
        Point::new(3.0, 8.0),
    ]);
    let result = extrapolate(&series, 5, &Model::exponential_growth()).unwrap();

    let expected = [16.0, 32.0, 64.0, 128.0, 256.0];
    for (i, (point, y)) in result.iter().zip(expected).enumerate() {
        assert_eq!(point.x, 4.0 + i as f64);
        assert_relative_eq!(point.y, y, max_relative = 1e-6);
    }
}

#[test]
fn test_identical_x_is_degenerate_for_every_model() {
    let series = Series::new(vec![
        Point::new(5.0, 1.0),
        Point::new(5.0, 2.0),
        Point::new(5.0, 3.0),
    ]);

    for model in [
        Model::linear(),
        Model::polynomial(2).unwrap(),
        Model::exponential_growth(),
    ] {
        let err = extrapolate(&series, 5, &model).unwrap_err();
        assert!(
            matches!(err, PredictionError::DegenerateFit { .. }),
            "{} returned {err:?}",
            model.name()
        );
    }
}

#[test]
fn test_non_positive_exponential_input() {
    let series = Series::from_values(&[3.0, 0.0, 5.0]);
    let err = extrapolate(&series, 5, &Model::exponential_growth()).unwrap_err();
    assert!(matches!(err, PredictionError::InvalidDomain { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_non_contiguous_input_continues_from_last_x() {
    let series = Series::new(vec![
        Point::new(1.0, 10.0),
        Point::new(4.0, 40.0),
        Point::new(10.0, 100.0),
    ]);
    let result = extrapolate(&series, 3, &Model::linear()).unwrap();

    assert_eq!(result.iter().map(|p| p.x).collect::<Vec<_>>(), vec![11.0, 12.0, 13.0]);
    assert_relative_eq!(result[2].y, 130.0, max_relative = 1e-12);
}

#[test]
fn test_config_driven_pipeline_with_history() {
    let config = PredictionConfig::from_toml_str("model = \"polynomial\"\nfuture_points = 3").unwrap();
    let pipeline = PredictionPipeline::from_config(&config).unwrap();

    let history = Series::from_values(&[1000.0, 1200.0, 1100.0, 1300.0, 1400.0]);
    let predicted = pipeline.run(&history).unwrap();
    let combined = PredictionPipeline::with_history(&history, &predicted);

    assert_eq!(combined.len(), 8);
    assert_eq!(&combined.points()[..5], history.points());
    assert_eq!(&combined.points()[5..], predicted.as_slice());
}
