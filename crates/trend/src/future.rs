//! Forward projection of a fitted trend.

use std::collections::BTreeMap;

use klimat_regression::{DataPoint, LinearFit};
use tracing::debug;

use crate::error::TrendError;
use crate::guarded;
use crate::validate::{validate_series, validate_year_range};

/// Projected values from the last reported year through the end year.
#[derive(Debug, Clone)]
pub struct FutureTrend {
    trend: BTreeMap<i32, f64>,
    cumulative_emissions: f64,
    coefficients: LinearFit,
}

impl FutureTrend {
    /// Returns the per-year projected values.
    pub fn trend(&self) -> &BTreeMap<i32, f64> {
        &self.trend
    }

    /// Returns the projected value for `year`, if covered.
    pub fn value(&self, year: i32) -> Option<f64> {
        self.trend.get(&year).copied()
    }

    /// Returns the cumulative emissions over the projected range.
    pub fn cumulative_emissions(&self) -> f64 {
        self.cumulative_emissions
    }

    /// Returns the coefficients the projection was made with.
    pub fn coefficients(&self) -> &LinearFit {
        &self.coefficients
    }
}

/// Projects `fit` over `last_year_with_data..=end_year`.
///
/// Every year gets `max(0, fit(year))`, as emissions cannot be negative.
/// The coefficients are used as given; pass the same fit that filled the
/// historical gap so both halves of a chart agree. `current_year` may fall
/// before the last report; the projection still starts there.
///
/// # Errors
///
/// - [`TrendError::EmptySeries`] / [`TrendError::MalformedSeries`] for an
///   unusable series.
/// - [`TrendError::InvalidRange`] if `end_year` is before
///   `last_year_with_data`.
pub fn future_trend(
    points: &[DataPoint],
    last_year_with_data: i32,
    current_year: i32,
    fit: &LinearFit,
    end_year: i32,
) -> Result<FutureTrend, TrendError> {
    guarded("future_trend", || {
        validate_series(points)?;
        validate_year_range("projection", last_year_with_data, end_year)?;

        let trend: BTreeMap<i32, f64> = (last_year_with_data..=end_year)
            .map(|year| (year, fit.evaluate(year).max(0.0)))
            .collect();
        let values: Vec<f64> = trend.values().copied().collect();
        let cumulative_emissions = klimat_stats::cumulative_trapezoid(&values);
        debug!(
            n_years = values.len(),
            current_year,
            cumulative_emissions,
            "future trend projected"
        );

        Ok(FutureTrend {
            trend,
            cumulative_emissions,
            coefficients: *fit,
        })
    })
}
