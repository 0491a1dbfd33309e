//! Per-entity trend summary.

use klimat_regression::{DataPoint, Fit, LinearFit};
use serde::Serialize;
use tracing::debug;

use crate::coefficients::{anchored_trend_coefficients, exponential_coefficients};
use crate::config::{ApproximationMode, TrendConfig, Weighting};
use crate::error::TrendError;
use crate::exponential::rescale_through;
use crate::guarded;
use crate::validate::validate_series;

/// How the trend coefficients were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendMethod {
    LinearRegression,
    WeightedLinearRegression,
    ExponentialRegression,
    /// Slope supplied by the caller, anchored on the latest report.
    ExternalSlope,
}

/// Direction of the yearly change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Summary of an entity's reporting history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub method: TrendMethod,
    pub coefficients: Fit,
    /// Number of usable reported years.
    pub clean_data_points: usize,
    pub trend_direction: TrendDirection,
    /// Yearly change relative to the latest reported value, in percent.
    pub yearly_percentage_change: f64,
}

fn yearly_percentage_change(fit: &Fit, latest: DataPoint) -> f64 {
    match fit {
        Fit::Linear(f) if latest.value > 0.0 => f.slope / latest.value * 100.0,
        Fit::Linear(_) => 0.0,
        Fit::Exponential(f) => (f.b.exp() - 1.0) * 100.0,
    }
}

fn direction(change_pct: f64, stable_threshold_pct: f64) -> TrendDirection {
    if change_pct > stable_threshold_pct {
        TrendDirection::Increasing
    } else if change_pct < -stable_threshold_pct {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

/// Builds the trend summary for one entity.
///
/// A finite `external_slope` takes precedence and is anchored on the
/// latest report. Otherwise the coefficients are fitted locally according
/// to `config` (anchored linear, or exponential rescaled through the latest
/// report).
///
/// # Errors
///
/// Returns validation or fitting errors; with an external slope only one
/// reported year is needed.
#[tracing::instrument(skip(points, config), fields(n_points = points.len()))]
pub fn analyze_trend(
    points: &[DataPoint],
    external_slope: Option<f64>,
    config: &TrendConfig,
) -> Result<TrendAnalysis, TrendError> {
    guarded("analyze_trend", || {
        config.validate()?;
        let sorted = validate_series(points)?;
        let latest = sorted[sorted.len() - 1];

        let (method, coefficients) = match (external_slope, config.mode()) {
            (Some(slope), _) if slope.is_finite() => (
                TrendMethod::ExternalSlope,
                Fit::Linear(LinearFit::through(slope, latest)),
            ),
            (_, ApproximationMode::Linear) => {
                let method = match config.weighting() {
                    Weighting::Ordinary => TrendMethod::LinearRegression,
                    Weighting::RecencyWeighted => TrendMethod::WeightedLinearRegression,
                };
                (method, Fit::Linear(anchored_trend_coefficients(&sorted, config)?))
            }
            (_, ApproximationMode::Exponential) => {
                let fit = exponential_coefficients(&sorted, config)?;
                (
                    TrendMethod::ExponentialRegression,
                    Fit::Exponential(rescale_through(fit, latest)?),
                )
            }
        };

        let change = yearly_percentage_change(&coefficients, latest);
        let trend_direction = direction(change, config.stable_threshold_pct());
        debug!(?method, change, ?trend_direction, "trend analysed");

        Ok(TrendAnalysis {
            method,
            coefficients,
            clean_data_points: sorted.len(),
            trend_direction,
            yearly_percentage_change: change,
        })
    })
}
