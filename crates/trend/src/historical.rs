//! Gap-filling between the last report and the current year.

use std::collections::BTreeMap;

use klimat_regression::{DataPoint, LinearFit};
use tracing::debug;

use crate::error::TrendError;
use crate::guarded;
use crate::validate::{validate_series, validate_year_range};

/// Approximated values from the last reported year through the current year.
#[derive(Debug, Clone)]
pub struct ApproximatedHistorical {
    approximated: BTreeMap<i32, f64>,
    cumulative_emissions: f64,
    coefficients: LinearFit,
}

impl ApproximatedHistorical {
    /// Returns the per-year values, boundary year included.
    pub fn approximated(&self) -> &BTreeMap<i32, f64> {
        &self.approximated
    }

    /// Returns the value for `year`, if covered.
    pub fn value(&self, year: i32) -> Option<f64> {
        self.approximated.get(&year).copied()
    }

    /// Returns the cumulative emissions of the gap years (boundary excluded).
    pub fn cumulative_emissions(&self) -> f64 {
        self.cumulative_emissions
    }

    /// Returns the coefficients the gap was filled with.
    pub fn coefficients(&self) -> &LinearFit {
        &self.coefficients
    }
}

/// Fills the years from `last_year_with_data` to `current_year` inclusive.
///
/// The boundary year keeps its reported value. Every later year gets
/// `max(0, fit(year))`. Cumulative emissions cover only the years after the
/// boundary, since the boundary year is already reported.
///
/// # Errors
///
/// - [`TrendError::EmptySeries`] / [`TrendError::MalformedSeries`] for an
///   unusable series.
/// - [`TrendError::InvalidRange`] if `current_year < last_year_with_data`.
/// - [`TrendError::MissingBoundaryValue`] if nothing was reported for
///   `last_year_with_data`.
pub fn approximated_historical(
    points: &[DataPoint],
    last_year_with_data: i32,
    current_year: i32,
    fit: &LinearFit,
) -> Result<ApproximatedHistorical, TrendError> {
    guarded("approximated_historical", || {
        let sorted = validate_series(points)?;
        validate_year_range("historical gap", last_year_with_data, current_year)?;

        let boundary = sorted
            .iter()
            .find(|p| p.year == last_year_with_data)
            .ok_or(TrendError::MissingBoundaryValue {
                year: last_year_with_data,
            })?;

        let mut approximated = BTreeMap::new();
        approximated.insert(boundary.year, boundary.value);

        let mut gap = Vec::new();
        for year in (last_year_with_data + 1)..=current_year {
            let v = fit.evaluate(year).max(0.0);
            approximated.insert(year, v);
            gap.push(v);
        }

        let cumulative_emissions = klimat_stats::cumulative_trapezoid(&gap);
        debug!(gap_years = gap.len(), cumulative_emissions, "historical gap filled");

        Ok(ApproximatedHistorical {
            approximated,
            cumulative_emissions,
            coefficients: *fit,
        })
    })
}
