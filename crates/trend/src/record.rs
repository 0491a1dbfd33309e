//! Reported emissions records and the chart rows derived from them.

use std::collections::BTreeMap;

use klimat_regression::{DataPoint, valid_points};
use serde::{Deserialize, Serialize};

/// One scope figure as reported (or estimated) for a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeValue {
    pub value: f64,
    #[serde(default, rename = "isAIGenerated")]
    pub is_ai_generated: bool,
}

/// One reported scope 3 category figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope3Category {
    /// GHG Protocol category number (1-16).
    pub category: u8,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default, rename = "isAIGenerated")]
    pub is_ai_generated: bool,
}

/// Reported emissions for one entity and year.
///
/// Only `total` feeds the trend engine; the scope breakdown is carried
/// through to chart rows unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionRecord {
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope1: Option<ScopeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope2: Option<ScopeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope3: Option<ScopeValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope3_categories: Vec<Scope3Category>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub original_values: BTreeMap<String, f64>,
}

impl EmissionRecord {
    /// Creates a record with only a total.
    pub fn new(year: i32, total: Option<f64>) -> Self {
        Self {
            year,
            total,
            ..Self::default()
        }
    }
}

/// Usable `(year, total)` observations of `records`, sorted by year.
pub fn record_points(records: &[EmissionRecord]) -> Vec<DataPoint> {
    valid_points(records.iter().map(|r| (r.year, r.total)))
}

/// One year of chart output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub year: i32,
    /// Reported total, present only for reported years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Gap-filled or projected value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximated: Option<f64>,
    /// Fitted trend value, after the last reported year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
    /// Carbon Law reference value, from the current year on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_law: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope1: Option<ScopeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope2: Option<ScopeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope3: Option<ScopeValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scope3_categories: Vec<Scope3Category>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub original_values: BTreeMap<String, f64>,
}

/// Derived values for one chart year.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Derived {
    pub approximated: Option<f64>,
    pub trend: Option<f64>,
    pub carbon_law: Option<f64>,
}

/// Builds one row per year in `first_year..=end_year`, merging the reported
/// record for that year (if any) with the derived values.
pub(crate) fn assemble_rows(
    records: &[EmissionRecord],
    first_year: i32,
    end_year: i32,
    mut derive: impl FnMut(i32) -> Derived,
) -> Vec<ChartData> {
    let by_year: BTreeMap<i32, &EmissionRecord> = records.iter().map(|r| (r.year, r)).collect();

    (first_year..=end_year)
        .map(|year| {
            let d = derive(year);
            let mut row = ChartData {
                year,
                approximated: d.approximated,
                trend: d.trend,
                carbon_law: d.carbon_law,
                ..ChartData::default()
            };
            if let Some(rec) = by_year.get(&year) {
                row.total = rec.total.filter(|v| v.is_finite());
                row.scope1 = rec.scope1.clone();
                row.scope2 = rec.scope2.clone();
                row.scope3 = rec.scope3.clone();
                row.scope3_categories = rec.scope3_categories.clone();
                row.original_values = rec.original_values.clone();
            }
            row
        })
        .collect()
}
