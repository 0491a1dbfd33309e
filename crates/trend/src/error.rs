//! Error types for the klimat-trend crate.

use klimat_regression::RegressionError;

/// Error type for all fallible operations in the klimat-trend crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TrendError {
    /// Returned when the series has no usable observations.
    #[error("series contains no valid data points")]
    EmptySeries,

    /// Returned when there are too few usable observations.
    #[error("insufficient data: got {n} data points, need at least {min}")]
    InsufficientData {
        /// Number of usable points.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when the series is structurally invalid.
    #[error("malformed series: {reason}")]
    MalformedSeries {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a year range runs backwards.
    #[error("invalid year range for {context}: {from} is after {to}")]
    InvalidRange {
        /// Which computation the range belongs to.
        context: &'static str,
        /// First year of the range.
        from: i32,
        /// Last year of the range.
        to: i32,
    },

    /// Returned when no reported value exists at the gap-fill boundary.
    #[error("no reported value for boundary year {year}")]
    MissingBoundaryValue {
        /// The boundary year.
        year: i32,
    },

    /// Returned when an exponential curve cannot be anchored on a value.
    #[error("cannot anchor exponential curve at year {year} on value {value}")]
    NonPositiveAnchor {
        /// Anchor year.
        year: i32,
        /// Offending value.
        value: f64,
    },

    /// Returned when a configuration value is invalid.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps a regression failure.
    #[error(transparent)]
    Regression(#[from] RegressionError),
}
