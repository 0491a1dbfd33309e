//! Exponential approximation mode.

use klimat_regression::{DataPoint, ExponentialFit, Fit, MIN_POINTS};
use tracing::debug;

use crate::carbon_law::carbon_law_anchor;
use crate::coefficients::exponential_coefficients;
use crate::config::TrendConfig;
use crate::error::TrendError;
use crate::guarded;
use crate::record::{ChartData, Derived, EmissionRecord, assemble_rows, record_points};
use crate::validate::{require_points, validate_series, validate_year_range};

/// Rescales `fit` so that it passes exactly through `point`.
///
/// A zero `point.value` gives a scale of 0, so the whole curve vanishes.
pub(crate) fn rescale_through(
    fit: ExponentialFit,
    point: DataPoint,
) -> Result<ExponentialFit, TrendError> {
    let fitted = fit.evaluate(point.year);
    if !point.value.is_finite() || point.value < 0.0 || !fitted.is_finite() || fitted <= 0.0 {
        return Err(TrendError::NonPositiveAnchor {
            year: point.year,
            value: point.value,
        });
    }
    Ok(fit.scaled(point.value / fitted))
}

/// Chart series following an exponential trend through the latest report.
///
/// The curve is fitted over the base-year-selected points and rescaled so it
/// passes through the latest reported value. Years after that report get
/// `max(0, curve(year))` as both `approximated` and `trend`; the report year
/// itself keeps its reported value. The Carbon Law curve starts from the
/// curve's value at `current_year`.
///
/// # Errors
///
/// Validation and fitting errors, or [`TrendError::NonPositiveAnchor`] when
/// the latest report is negative or the fitted curve vanishes there.
#[tracing::instrument(skip(records, config), fields(n_records = records.len()))]
pub fn exponential_approximated_data(
    records: &[EmissionRecord],
    current_year: i32,
    config: &TrendConfig,
) -> Result<Vec<ChartData>, TrendError> {
    guarded("exponential_approximated_data", || {
        config.validate()?;
        let sorted = validate_series(&record_points(records))?;
        require_points(&sorted, MIN_POINTS)?;

        let first = sorted[0];
        let last = sorted[sorted.len() - 1];
        validate_year_range("projection", last.year, config.end_year())?;

        let curve = rescale_through(exponential_coefficients(&sorted, config)?, last)?;
        let reported_now = sorted.iter().find(|p| p.year == current_year).map(|p| p.value);
        let anchor = carbon_law_anchor(reported_now, None, &Fit::Exponential(curve), current_year);
        let carbon_law = config.carbon_law();

        let rows = assemble_rows(records, first.year, config.end_year(), |year| {
            let projected = (year > last.year).then(|| curve.evaluate(year).max(0.0));
            Derived {
                approximated: if year == last.year {
                    Some(last.value)
                } else {
                    projected
                },
                trend: projected,
                carbon_law: carbon_law.value(anchor, year, current_year),
            }
        });
        debug!(n_rows = rows.len(), a = curve.a, b = curve.b, "exponential series built");
        Ok(rows)
    })
}
