//! Gap-filling, projection and Carbon Law reference curves for yearly
//! emissions reports.
//!
//! Entities report emissions irregularly. This crate turns those sparse
//! reports into a continuous per-year chart series: the years between the
//! last report and the current year are approximated from a trend, the
//! trend is projected to an end year, and a Carbon Law curve shows the
//! reference decarbonization pathway from the current year on.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌────────────────────┐
//!  │   records    │────▶│  coefficients  │────▶│ historical gap +   │
//!  │  (validate)  │     │  (fit trend)   │     │ future projection  │
//!  └──────────────┘     └────────────────┘     └─────────┬──────────┘
//!                                                        ▼
//!                                              ┌────────────────────┐
//!                                              │  chart rows with   │
//!                                              │  carbon law curve  │
//!                                              └────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use klimat_trend::{EmissionRecord, TrendConfig, sophisticated_approximated_data};
//!
//! let records = [
//!     EmissionRecord::new(2020, Some(100.0)),
//!     EmissionRecord::new(2021, Some(95.0)),
//!     EmissionRecord::new(2022, Some(90.0)),
//! ];
//! let config = TrendConfig::new().with_end_year(2030);
//! let rows = sophisticated_approximated_data(&records, 2024, &config).unwrap();
//!
//! assert_eq!(rows.first().map(|r| r.year), Some(2020));
//! assert_eq!(rows.last().map(|r| r.year), Some(2030));
//! ```

mod analysis;
mod approximate;
mod carbon_law;
mod coefficients;
mod config;
mod error;
mod exponential;
mod future;
mod historical;
mod paris;
mod record;
mod validate;

use std::cell::Cell;

pub use analysis::{TrendAnalysis, TrendDirection, TrendMethod, analyze_trend};
pub use approximate::sophisticated_approximated_data;
pub use carbon_law::{
    ALTERNATE_REDUCTION_RATE, CarbonLaw, DEFAULT_REDUCTION_RATE, carbon_law_anchor,
};
pub use coefficients::{
    anchored_trend_coefficients, exponential_coefficients, select_regression_points,
    trend_coefficients,
};
pub use config::{ApproximationMode, TrendConfig, Weighting};
pub use error::TrendError;
pub use exponential::exponential_approximated_data;
pub use future::{FutureTrend, future_trend};
pub use historical::{ApproximatedHistorical, approximated_historical};
pub use paris::{ParisAssessment, ParisWindow, assess_paris_budget, meets_paris_budget};
pub use record::{ChartData, EmissionRecord, Scope3Category, ScopeValue, record_points};

thread_local! {
    static GUARD_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// Restores the guard depth on scope exit, unwinding included.
struct DepthGuard(u32);

impl DepthGuard {
    fn enter() -> Self {
        Self(GUARD_DEPTH.with(|d| d.replace(d.get() + 1)))
    }

    fn is_outermost(&self) -> bool {
        self.0 == 0
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        GUARD_DEPTH.with(|d| d.set(self.0));
    }
}

/// Runs `body` and logs a failure tagged with `function`.
///
/// Only the outermost guarded call logs at `warn`; calls nested inside it
/// log at `debug`, so one failure produces one warning. The error itself is
/// returned unchanged.
fn guarded<T>(
    function: &'static str,
    body: impl FnOnce() -> Result<T, TrendError>,
) -> Result<T, TrendError> {
    let depth = DepthGuard::enter();
    body().inspect_err(|e| {
        if depth.is_outermost() {
            tracing::warn!(function, error = %e, "trend computation failed");
        } else {
            tracing::debug!(function, error = %e, "nested trend computation failed");
        }
    })
}
