//! Input validation shared by every entry point.

use klimat_regression::DataPoint;

use crate::error::TrendError;

/// Checks a series and returns it sorted by year.
///
/// # Errors
///
/// - [`TrendError::EmptySeries`] if there are no points.
/// - [`TrendError::MalformedSeries`] on a non-finite value or a repeated
///   year.
pub(crate) fn validate_series(points: &[DataPoint]) -> Result<Vec<DataPoint>, TrendError> {
    if points.is_empty() {
        return Err(TrendError::EmptySeries);
    }
    if let Some(p) = points.iter().find(|p| !p.value.is_finite()) {
        return Err(TrendError::MalformedSeries {
            reason: format!("non-finite value {} in year {}", p.value, p.year),
        });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.year);
    if let Some(w) = sorted.windows(2).find(|w| w[0].year == w[1].year) {
        return Err(TrendError::MalformedSeries {
            reason: format!("duplicate year {}", w[0].year),
        });
    }
    Ok(sorted)
}

/// Checks that `from <= to`.
pub(crate) fn validate_year_range(
    context: &'static str,
    from: i32,
    to: i32,
) -> Result<(), TrendError> {
    if from > to {
        return Err(TrendError::InvalidRange { context, from, to });
    }
    Ok(())
}

/// Requires at least `min` points.
pub(crate) fn require_points(points: &[DataPoint], min: usize) -> Result<(), TrendError> {
    if points.len() < min {
        return Err(TrendError::InsufficientData {
            n: points.len(),
            min,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_valid_series() {
        let points = [DataPoint::new(2022, 2.0), DataPoint::new(2020, 1.0)];
        let sorted = validate_series(&points).unwrap();
        assert_eq!(sorted[0].year, 2020);
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(validate_series(&[]), Err(TrendError::EmptySeries)));
    }

    #[test]
    fn rejects_duplicate_years() {
        let points = [DataPoint::new(2020, 1.0), DataPoint::new(2020, 2.0)];
        assert!(matches!(
            validate_series(&points),
            Err(TrendError::MalformedSeries { .. })
        ));
    }

    #[test]
    fn rejects_nan() {
        let points = [DataPoint::new(2020, f64::NAN)];
        assert!(matches!(
            validate_series(&points),
            Err(TrendError::MalformedSeries { .. })
        ));
    }

    #[test]
    fn year_range() {
        assert!(validate_year_range("test", 2020, 2020).is_ok());
        assert!(matches!(
            validate_year_range("test", 2021, 2020),
            Err(TrendError::InvalidRange {
                from: 2021,
                to: 2020,
                ..
            })
        ));
    }

    #[test]
    fn require_points_counts() {
        let points = [DataPoint::new(2020, 1.0)];
        assert!(require_points(&points, 1).is_ok());
        assert!(matches!(
            require_points(&points, 2),
            Err(TrendError::InsufficientData { n: 1, min: 2 })
        ));
    }
}
