//! Exponential (log-linear) regression.

use crate::error::RegressionError;
use crate::fit::ExponentialFit;
use crate::point::DataPoint;
use crate::{MIN_POINTS, least_squares, recency_weights, validate_decay};

/// Positive points sorted chronologically; `ln` is undefined elsewhere.
fn positive_points(points: &[DataPoint]) -> Result<Vec<DataPoint>, RegressionError> {
    let mut usable: Vec<DataPoint> = points.iter().copied().filter(|p| p.value > 0.0).collect();
    if usable.len() < MIN_POINTS {
        return Err(RegressionError::InsufficientData {
            n: usable.len(),
            min: MIN_POINTS,
        });
    }
    usable.sort_by_key(|p| p.year);
    Ok(usable)
}

fn fit_log_linear(usable: &[DataPoint], weights: &[f64]) -> Result<ExponentialFit, RegressionError> {
    let origin = usable[0].year;
    let xs: Vec<f64> = usable.iter().map(|p| (p.year - origin) as f64).collect();
    let ln_ys: Vec<f64> = usable.iter().map(|p| p.value.ln()).collect();

    let (b, ln_a) = least_squares(&xs, &ln_ys, weights)?;
    Ok(ExponentialFit::new(ln_a.exp(), b, origin))
}

/// Fits `value = a * e^(b * (year - origin))` by least squares on
/// `ln(value)`.
///
/// Points with `value <= 0` are discarded first. The origin is the earliest
/// usable year.
///
/// # Errors
///
/// Returns [`RegressionError::InsufficientData`] if fewer than two positive
/// points remain.
pub fn exponential_regression(points: &[DataPoint]) -> Result<ExponentialFit, RegressionError> {
    let usable = positive_points(points)?;
    fit_log_linear(&usable, &vec![1.0; usable.len()])
}

/// Recency-weighted variant of [`exponential_regression`].
///
/// Uses the same `decay^(n-1-i)` weights as
/// [`weighted_linear_regression`](crate::weighted_linear_regression),
/// applied in log space.
///
/// # Errors
///
/// Returns [`RegressionError::InvalidDecay`] for a decay outside `(0, 1]`,
/// plus the errors of [`exponential_regression`].
pub fn weighted_exponential_regression(
    points: &[DataPoint],
    decay: f64,
) -> Result<ExponentialFit, RegressionError> {
    validate_decay(decay)?;
    let usable = positive_points(points)?;
    let weights = recency_weights(usable.len(), decay);
    fit_log_linear(&usable, &weights)
}
