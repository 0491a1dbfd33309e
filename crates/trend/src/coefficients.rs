//! Regression point selection and trend coefficients.

use klimat_regression::{
    DataPoint, ExponentialFit, LinearFit, MIN_POINTS, exponential_regression, linear_regression,
    weighted_exponential_regression, weighted_linear_regression,
};

use crate::config::{TrendConfig, Weighting};
use crate::error::TrendError;
use crate::guarded;
use crate::validate::{require_points, validate_series};

/// Picks the points that feed the trend regression.
///
/// With a base year that differs from the latest reported year, every point
/// from the base year onward is used. Otherwise (no base year, or the base
/// year is the latest year) only the last two points are used.
///
/// `sorted` must be in chronological order.
pub fn select_regression_points(sorted: &[DataPoint], base_year: Option<i32>) -> Vec<DataPoint> {
    let Some(last) = sorted.last() else {
        return Vec::new();
    };
    match base_year {
        Some(base) if base != last.year => {
            sorted.iter().filter(|p| p.year >= base).copied().collect()
        }
        _ => sorted[sorted.len().saturating_sub(2)..].to_vec(),
    }
}

fn selected_points(points: &[DataPoint], config: &TrendConfig) -> Result<Vec<DataPoint>, TrendError> {
    config.validate()?;
    let sorted = validate_series(points)?;
    let selected = select_regression_points(&sorted, config.base_year());
    require_points(&selected, MIN_POINTS)?;
    Ok(selected)
}

fn fit_linear(selected: &[DataPoint], config: &TrendConfig) -> Result<LinearFit, TrendError> {
    let fit = match config.weighting() {
        Weighting::Ordinary => linear_regression(selected)?,
        Weighting::RecencyWeighted => weighted_linear_regression(selected, config.decay())?,
    };
    Ok(fit)
}

/// Fits the trend line over the selected regression points.
///
/// # Errors
///
/// Returns [`TrendError::InsufficientData`] when fewer than two points are
/// selected, and validation or regression errors otherwise.
pub fn trend_coefficients(
    points: &[DataPoint],
    config: &TrendConfig,
) -> Result<LinearFit, TrendError> {
    guarded("trend_coefficients", || {
        let selected = selected_points(points, config)?;
        fit_linear(&selected, config)
    })
}

/// Fits the trend line and moves its intercept so that it passes exactly
/// through the latest reported observation.
///
/// The slope is unchanged from [`trend_coefficients`]. Used wherever the
/// fitted line continues real data, so there is no step at the boundary.
///
/// # Errors
///
/// Same as [`trend_coefficients`].
pub fn anchored_trend_coefficients(
    points: &[DataPoint],
    config: &TrendConfig,
) -> Result<LinearFit, TrendError> {
    guarded("anchored_trend_coefficients", || {
        let selected = selected_points(points, config)?;
        let fit = fit_linear(&selected, config)?;
        let latest = selected[selected.len() - 1];
        Ok(LinearFit::through(fit.slope, latest))
    })
}

/// Fits an exponential trend over the selected regression points.
///
/// # Errors
///
/// Same as [`trend_coefficients`]; non-positive values are skipped by the
/// fit and may leave too few points.
pub fn exponential_coefficients(
    points: &[DataPoint],
    config: &TrendConfig,
) -> Result<ExponentialFit, TrendError> {
    guarded("exponential_coefficients", || {
        let selected = selected_points(points, config)?;
        let fit = match config.weighting() {
            Weighting::Ordinary => exponential_regression(&selected)?,
            Weighting::RecencyWeighted => {
                weighted_exponential_regression(&selected, config.decay())?
            }
        };
        Ok(fit)
    })
}
