//! Yearly observations and valid-point extraction.

use serde::{Deserialize, Serialize};

/// One emissions observation for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Calendar year.
    pub year: i32,
    /// Observed (or derived) emissions value.
    pub value: f64,
}

impl DataPoint {
    /// Creates a new data point.
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Extracts the usable observations from a raw yearly series.
///
/// Years whose value is absent or non-finite are dropped (never treated as
/// zero). The result is sorted chronologically.
pub fn valid_points<I>(series: I) -> Vec<DataPoint>
where
    I: IntoIterator<Item = (i32, Option<f64>)>,
{
    let mut points: Vec<DataPoint> = series
        .into_iter()
        .filter_map(|(year, value)| match value {
            Some(v) if v.is_finite() => Some(DataPoint::new(year, v)),
            _ => None,
        })
        .collect();
    points.sort_by_key(|p| p.year);
    points
}
