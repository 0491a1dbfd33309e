//! Result types for unusual-point detection.

use serde::Serialize;

/// Direction of a year-over-year change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Emissions went up.
    Increase,
    /// Emissions went down.
    Decrease,
}

/// One flagged transition between consecutive reported years.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusualPoint {
    /// Year the unusual value was reported (same as `to_year`).
    pub year: i32,
    pub from_year: i32,
    pub to_year: i32,
    pub from_value: f64,
    pub to_value: f64,
    /// Signed percentage change from `from_value` to `to_value`.
    pub change_pct: f64,
    /// Threshold the absolute change exceeded.
    pub threshold_pct: f64,
    pub direction: Direction,
    /// Human-readable explanation for display.
    pub reason: String,
}

/// Outcome of unusual-point detection over one series.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusualPoints {
    /// Whether any transition was flagged.
    pub has_unusual_points: bool,
    /// Flagged transitions in chronological order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<UnusualPoint>,
}

impl UnusualPoints {
    /// An outcome with nothing flagged.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds an outcome from the flagged transitions.
    pub fn from_details(details: Vec<UnusualPoint>) -> Self {
        Self {
            has_unusual_points: !details.is_empty(),
            details,
        }
    }
}
