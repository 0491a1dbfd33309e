//! Paris-budget verdict.
//!
//! An entity meets its budget when its projected emissions, summed year by
//! year over the window, stay within the Carbon Law reference started from
//! the same first-year value.

use klimat_regression::DataPoint;
use serde::Serialize;
use tracing::debug;

use crate::analysis::TrendAnalysis;
use crate::carbon_law::CarbonLaw;
use crate::error::TrendError;

/// Inclusive year window of the cumulative-budget comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParisWindow {
    start: i32,
    end: i32,
}

impl Default for ParisWindow {
    fn default() -> Self {
        Self {
            start: 2025,
            end: 2050,
        }
    }
}

impl ParisWindow {
    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::InvalidRange`] if `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self, TrendError> {
        if start > end {
            return Err(TrendError::InvalidRange {
                context: "paris window",
                from: start,
                to: end,
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the first year of the window.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Returns the last year of the window.
    pub fn end(&self) -> i32 {
        self.end
    }
}

/// Quantitative outcome of the budget comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParisAssessment {
    /// Emissions in the first window year (reported or from the trend).
    pub emissions_start: Option<f64>,
    /// Projected emissions summed over the window.
    pub trend_cumulative: Option<f64>,
    /// Carbon Law emissions summed over the window.
    pub budget_cumulative: Option<f64>,
    pub meets: bool,
}

impl ParisAssessment {
    fn undetermined(emissions_start: Option<f64>) -> Self {
        Self {
            emissions_start,
            trend_cumulative: None,
            budget_cumulative: None,
            meets: false,
        }
    }
}

/// Compares an entity's projected emissions with the Carbon Law budget.
///
/// 1. The first-year value is the reported figure if present, else the
///    trend evaluated at that year. Without either the verdict is `false`.
/// 2. A first-year value `<= 0` meets the budget outright.
/// 3. Otherwise the trend (each year floored at zero) and the Carbon Law
///    curve from the first-year value are summed over the window.
/// 4. The budget is met iff the trend total does not exceed the Carbon Law
///    total.
pub fn assess_paris_budget(
    points: &[DataPoint],
    analysis: Option<&TrendAnalysis>,
    carbon_law: &CarbonLaw,
    window: &ParisWindow,
) -> ParisAssessment {
    let reported = points
        .iter()
        .find(|p| p.year == window.start() && p.value.is_finite())
        .map(|p| p.value);
    let fitted = analysis.map(|a| a.coefficients.evaluate(window.start()));

    let Some(start_value) = reported.or(fitted).filter(|v| v.is_finite()) else {
        debug!("no emissions for the first window year");
        return ParisAssessment::undetermined(None);
    };

    if start_value <= 0.0 {
        return ParisAssessment {
            emissions_start: Some(start_value),
            trend_cumulative: None,
            budget_cumulative: None,
            meets: true,
        };
    }

    let Some(analysis) = analysis else {
        return ParisAssessment::undetermined(Some(start_value));
    };

    let yearly: Vec<f64> = (window.start()..=window.end())
        .map(|y| analysis.coefficients.evaluate(y).max(0.0))
        .collect();
    let trend_cumulative = klimat_stats::yearly_sum(&yearly);
    let budget_cumulative = carbon_law.cumulative(start_value, window.start()..=window.end());
    let meets = trend_cumulative <= budget_cumulative;
    debug!(trend_cumulative, budget_cumulative, meets, "paris budget assessed");

    ParisAssessment {
        emissions_start: Some(start_value),
        trend_cumulative: Some(trend_cumulative),
        budget_cumulative: Some(budget_cumulative),
        meets,
    }
}

/// Boolean form of [`assess_paris_budget`].
pub fn meets_paris_budget(
    points: &[DataPoint],
    analysis: Option<&TrendAnalysis>,
    carbon_law: &CarbonLaw,
    window: &ParisWindow,
) -> bool {
    assess_paris_budget(points, analysis, carbon_law, window).meets
}
