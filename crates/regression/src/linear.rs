//! Straight-line regression.

use crate::error::RegressionError;
use crate::fit::LinearFit;
use crate::point::DataPoint;
use crate::{MIN_POINTS, least_squares, recency_weights, validate_decay};

/// Ordinary least squares on `(year, value)`.
///
/// Years are shifted by the earliest year before fitting; the returned
/// intercept is converted back to absolute years.
///
/// # Errors
///
/// Returns [`RegressionError::InsufficientData`] for fewer than two points
/// and [`RegressionError::DegenerateInput`] if all points share one year.
pub fn linear_regression(points: &[DataPoint]) -> Result<LinearFit, RegressionError> {
    if points.len() < MIN_POINTS {
        return Err(RegressionError::InsufficientData {
            n: points.len(),
            min: MIN_POINTS,
        });
    }

    let origin = points.iter().map(|p| p.year).min().unwrap_or_default();
    let xs: Vec<f64> = points.iter().map(|p| (p.year - origin) as f64).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.value).collect();

    let (slope, intercept) = least_squares(&xs, &ys, &vec![1.0; points.len()])?;
    Ok(LinearFit::new(slope, intercept - slope * origin as f64))
}

/// Recency-weighted least squares, anchored on the latest point.
///
/// Points are sorted chronologically and weighted `decay^(n-1-i)`, so the
/// latest point has weight 1. The slope is the weighted least-squares slope;
/// the intercept is chosen so the line passes exactly through the latest
/// observation. With exactly two points the slope equals the two-point
/// slope.
///
/// # Errors
///
/// Returns [`RegressionError::InvalidDecay`] for a decay outside `(0, 1]`,
/// plus the errors of [`linear_regression`].
pub fn weighted_linear_regression(
    points: &[DataPoint],
    decay: f64,
) -> Result<LinearFit, RegressionError> {
    validate_decay(decay)?;
    if points.len() < MIN_POINTS {
        return Err(RegressionError::InsufficientData {
            n: points.len(),
            min: MIN_POINTS,
        });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.year);

    let origin = sorted[0].year;
    let xs: Vec<f64> = sorted.iter().map(|p| (p.year - origin) as f64).collect();
    let ys: Vec<f64> = sorted.iter().map(|p| p.value).collect();
    let weights = recency_weights(sorted.len(), decay);

    let (slope, _) = least_squares(&xs, &ys, &weights)?;
    let last = sorted[sorted.len() - 1];
    Ok(LinearFit::through(slope, last))
}

/// Ordinary least-squares slope. Returns 0.0 when no slope can be fitted.
pub fn trend_slope(points: &[DataPoint]) -> f64 {
    linear_regression(points).map(|f| f.slope).unwrap_or(0.0)
}
