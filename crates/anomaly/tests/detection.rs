//! Integration tests for unusual-point detection.

use approx::assert_relative_eq;
use klimat_anomaly::{AnomalyError, DetectorConfig, Direction, detect_unusual_points};
use klimat_regression::DataPoint;

fn pts(raw: &[(i32, f64)]) -> Vec<DataPoint> {
    raw.iter().map(|&(y, v)| DataPoint::new(y, v)).collect()
}

#[test]
fn single_tenfold_jump_is_flagged() {
    let points = pts(&[
        (2018, 100.0),
        (2019, 102.0),
        (2020, 104.0),
        (2021, 1040.0),
        (2022, 1060.0),
    ]);
    let found = detect_unusual_points(&points, &DetectorConfig::default()).unwrap();

    assert!(found.has_unusual_points);
    assert_eq!(found.details.len(), 1);
    let jump = &found.details[0];
    assert_eq!(jump.year, 2021);
    assert_eq!(jump.from_year, 2020);
    assert_eq!(jump.to_year, 2021);
    assert_eq!(jump.direction, Direction::Increase);
    assert_relative_eq!(jump.change_pct, 900.0, epsilon = 1e-9);

    // |changes| = 2, 1.9608, 900, 1.9231 -> median of the middle two.
    let median = (2.0 + 200.0 / 102.0) / 2.0;
    assert_relative_eq!(jump.threshold_pct, 4.0 * median, epsilon = 1e-9);
}

#[test]
fn fewer_than_four_points_reports_nothing() {
    let points = pts(&[(2020, 1.0), (2021, 100.0), (2022, 1.0)]);
    let found = detect_unusual_points(&points, &DetectorConfig::default()).unwrap();
    assert!(!found.has_unusual_points);
    assert!(found.details.is_empty());
}

#[test]
fn steady_series_reports_nothing() {
    let points = pts(&[(2019, 100.0), (2020, 95.0), (2021, 90.0), (2022, 86.0)]);
    let found = detect_unusual_points(&points, &DetectorConfig::default()).unwrap();
    assert!(!found.has_unusual_points);
}

#[test]
fn sharp_drop_is_flagged_as_decrease() {
    let points = pts(&[
        (2018, 1000.0),
        (2019, 990.0),
        (2020, 980.0),
        (2021, 100.0),
        (2022, 99.0),
    ]);
    let found = detect_unusual_points(&points, &DetectorConfig::default()).unwrap();
    assert_eq!(found.details.len(), 1);
    assert_eq!(found.details[0].direction, Direction::Decrease);
    assert!(found.details[0].change_pct < 0.0);
    assert!(found.details[0].reason.contains("decreased"));
}

#[test]
fn zero_previous_values_are_skipped() {
    let points = pts(&[
        (2018, 0.0),
        (2019, 500.0),
        (2020, 505.0),
        (2021, 510.0),
        (2022, 515.0),
    ]);
    let found = detect_unusual_points(&points, &DetectorConfig::default()).unwrap();
    assert!(!found.has_unusual_points);
}

#[test]
fn lower_multiplier_flags_more() {
    let points = pts(&[(2018, 100.0), (2019, 110.0), (2020, 100.0), (2021, 130.0), (2022, 128.0)]);
    let strict = detect_unusual_points(&points, &DetectorConfig::default()).unwrap();
    let loose =
        detect_unusual_points(&points, &DetectorConfig::new().with_multiplier(1.5)).unwrap();
    assert!(loose.details.len() > strict.details.len());
}

#[test]
fn invalid_config_is_an_error() {
    let points = pts(&[(2018, 1.0), (2019, 2.0), (2020, 3.0), (2021, 4.0)]);
    let result = detect_unusual_points(&points, &DetectorConfig::new().with_multiplier(-4.0));
    assert!(matches!(result, Err(AnomalyError::InvalidConfig { .. })));
}
