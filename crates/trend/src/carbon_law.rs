//! Carbon Law reference trajectory.
//!
//! The Carbon Law curve assumes emissions fall by a fixed fraction every
//! year from an anchor value: `anchor * (1 - r)^(year - anchor_year)`.

use std::ops::RangeInclusive;

use klimat_regression::Fit;

use crate::error::TrendError;

/// Annual reduction rate of the Carbon Law curve.
pub const DEFAULT_REDUCTION_RATE: f64 = 0.1172;

/// Rate some chart views have used for the same curve. Not applied by
/// default; pass it through [`CarbonLaw::new`] to reproduce those views.
pub const ALTERNATE_REDUCTION_RATE: f64 = 0.1356;

/// Fixed-rate decarbonization reference curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonLaw {
    reduction_rate: f64,
}

impl Default for CarbonLaw {
    fn default() -> Self {
        Self {
            reduction_rate: DEFAULT_REDUCTION_RATE,
        }
    }
}

impl CarbonLaw {
    /// Creates a curve with the given annual reduction rate.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::InvalidConfig`] unless `0 < rate < 1`.
    pub fn new(reduction_rate: f64) -> Result<Self, TrendError> {
        if !reduction_rate.is_finite() || reduction_rate <= 0.0 || reduction_rate >= 1.0 {
            return Err(TrendError::InvalidConfig {
                reason: format!("carbon law reduction rate must be in (0, 1), got {reduction_rate}"),
            });
        }
        Ok(Self { reduction_rate })
    }

    /// Returns the annual reduction rate.
    pub fn reduction_rate(&self) -> f64 {
        self.reduction_rate
    }

    fn decayed(&self, anchor: f64, years_after: i32) -> f64 {
        anchor * (1.0 - self.reduction_rate).powi(years_after)
    }

    /// Reference value at `year` for a curve anchored at `anchor_year`.
    ///
    /// `None` before the anchor year, and wherever the value is not
    /// positive (nothing left to reduce).
    pub fn value(&self, anchor: f64, year: i32, anchor_year: i32) -> Option<f64> {
        if year < anchor_year {
            return None;
        }
        let v = self.decayed(anchor, year - anchor_year);
        (v > 0.0).then_some(v)
    }

    /// Year-by-year sum of the curve over `years`, anchored on
    /// `start_value` at the first year of the range.
    pub fn cumulative(&self, start_value: f64, years: RangeInclusive<i32>) -> f64 {
        let start = *years.start();
        let values: Vec<f64> = years.map(|y| self.decayed(start_value, y - start)).collect();
        klimat_stats::yearly_sum(&values)
    }
}

/// Picks the value the Carbon Law curve starts from at `current_year`.
///
/// Priority: a reported value, then the approximated-historical value,
/// then the fitted trend evaluated at `current_year`.
pub fn carbon_law_anchor(
    actual: Option<f64>,
    approximated: Option<f64>,
    fit: &Fit,
    current_year: i32,
) -> f64 {
    actual
        .or(approximated)
        .unwrap_or_else(|| fit.evaluate(current_year))
}
