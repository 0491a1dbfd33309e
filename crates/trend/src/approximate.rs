//! Unified chart series: reported data, gap-fill, projection and Carbon Law.

use klimat_regression::{Fit, MIN_POINTS};
use tracing::debug;

use crate::carbon_law::carbon_law_anchor;
use crate::coefficients::anchored_trend_coefficients;
use crate::config::{ApproximationMode, TrendConfig};
use crate::error::TrendError;
use crate::exponential::exponential_approximated_data;
use crate::future::future_trend;
use crate::guarded;
use crate::historical::approximated_historical;
use crate::record::{ChartData, Derived, EmissionRecord, assemble_rows, record_points};
use crate::validate::{require_points, validate_series, validate_year_range};

/// Builds the per-year chart series for one entity.
///
/// In exponential mode this is [`exponential_approximated_data`]. In linear
/// mode the anchored trend coefficients are computed once and shared by the
/// historical gap-fill and the future projection. One row is emitted for
/// every year from the first report to `config.end_year()`:
///
/// - `total` (and the scope breakdown) for reported years;
/// - `approximated` from the gap-fill up to `current_year`, from the
///   projection after it (no gap-fill when `current_year` is before the
///   last report);
/// - `trend` from the projection for years after the last report;
/// - `carbon_law` from `current_year` on.
///
/// # Errors
///
/// Any failed prerequisite fails the whole call; no partial series is
/// returned.
#[tracing::instrument(skip(records, config), fields(mode = ?config.mode(), n_records = records.len()))]
pub fn sophisticated_approximated_data(
    records: &[EmissionRecord],
    current_year: i32,
    config: &TrendConfig,
) -> Result<Vec<ChartData>, TrendError> {
    guarded("sophisticated_approximated_data", || {
        config.validate()?;
        if config.mode() == ApproximationMode::Exponential {
            return exponential_approximated_data(records, current_year, config);
        }

        let sorted = validate_series(&record_points(records))?;
        require_points(&sorted, MIN_POINTS)?;
        let first = sorted[0];
        let last = sorted[sorted.len() - 1];
        validate_year_range("projection", last.year, config.end_year())?;

        let fit = anchored_trend_coefficients(&sorted, config)?;
        let historical = (current_year >= last.year)
            .then(|| approximated_historical(&sorted, last.year, current_year, &fit))
            .transpose()?;
        let future = future_trend(&sorted, last.year, current_year, &fit, config.end_year())?;

        let reported_now = sorted.iter().find(|p| p.year == current_year).map(|p| p.value);
        let anchor = carbon_law_anchor(
            reported_now,
            historical.as_ref().and_then(|h| h.value(current_year)),
            &Fit::Linear(fit),
            current_year,
        );
        let carbon_law = config.carbon_law();

        let rows = assemble_rows(records, first.year, config.end_year(), |year| Derived {
            approximated: if year <= current_year {
                historical.as_ref().and_then(|h| h.value(year))
            } else {
                future.value(year)
            },
            trend: if year > last.year {
                future.value(year)
            } else {
                None
            },
            carbon_law: carbon_law.value(anchor, year, current_year),
        });
        debug!(
            n_rows = rows.len(),
            slope = fit.slope,
            gap_cumulative = historical.as_ref().map_or(0.0, |h| h.cumulative_emissions()),
            future_cumulative = future.cumulative_emissions(),
            "linear series built"
        );
        Ok(rows)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn records() -> Vec<EmissionRecord> {
        vec![
            EmissionRecord::new(2019, Some(140.0)),
            EmissionRecord::new(2020, Some(130.0)),
            EmissionRecord::new(2021, None),
            EmissionRecord::new(2022, Some(120.0)),
        ]
    }

    #[test]
    fn covers_first_report_to_end_year() {
        let config = TrendConfig::new().with_end_year(2030);
        let rows = sophisticated_approximated_data(&records(), 2024, &config).unwrap();
        assert_eq!(rows.first().map(|r| r.year), Some(2019));
        assert_eq!(rows.last().map(|r| r.year), Some(2030));
        assert_eq!(rows.len(), 12);
    }

    #[test]
    fn reported_years_keep_totals() {
        let rows = sophisticated_approximated_data(&records(), 2024, &TrendConfig::new()).unwrap();
        assert_eq!(rows[0].total, Some(140.0));
        assert_eq!(rows[2].total, None);
        assert_eq!(rows[3].total, Some(120.0));
        assert!(rows[0].approximated.is_none());
    }

    #[test]
    fn gap_and_projection_follow_two_point_slope() {
        // Last two reports: 2020 -> 130, 2022 -> 120, slope -5.
        let rows = sophisticated_approximated_data(&records(), 2024, &TrendConfig::new()).unwrap();
        let at = |y: i32| rows.iter().find(|r| r.year == y).unwrap();
        assert_eq!(at(2022).approximated, Some(120.0));
        assert!(at(2022).trend.is_none());
        assert_relative_eq!(at(2023).approximated.unwrap(), 115.0, epsilon = 1e-9);
        assert_relative_eq!(at(2024).approximated.unwrap(), 110.0, epsilon = 1e-9);
        assert_relative_eq!(at(2025).approximated.unwrap(), 105.0, epsilon = 1e-9);
    }

    #[test]
    fn carbon_law_starts_at_current_year() {
        let rows = sophisticated_approximated_data(&records(), 2024, &TrendConfig::new()).unwrap();
        let at = |y: i32| rows.iter().find(|r| r.year == y).unwrap();
        assert!(at(2023).carbon_law.is_none());
        assert_relative_eq!(at(2024).carbon_law.unwrap(), 110.0, epsilon = 1e-9);
        assert_relative_eq!(at(2025).carbon_law.unwrap(), 110.0 * 0.8828, epsilon = 1e-9);
    }

    #[test]
    fn current_year_before_last_report_skips_gap() {
        // Slope -5 through 2022 -> 120; the clock says 2021.
        let config = TrendConfig::new().with_end_year(2025);
        let rows = sophisticated_approximated_data(&records(), 2021, &config).unwrap();
        let at = |y: i32| rows.iter().find(|r| r.year == y).unwrap();
        assert!(at(2021).approximated.is_none());
        assert_relative_eq!(at(2021).carbon_law.unwrap(), 125.0, epsilon = 1e-9);
        assert_eq!(at(2022).approximated, Some(120.0));
        assert_relative_eq!(at(2023).trend.unwrap(), 115.0, epsilon = 1e-9);
    }

    #[test]
    fn single_report_is_insufficient() {
        let records = [EmissionRecord::new(2022, Some(10.0))];
        let result = sophisticated_approximated_data(&records, 2024, &TrendConfig::new());
        assert!(matches!(result, Err(TrendError::InsufficientData { .. })));
    }
}
