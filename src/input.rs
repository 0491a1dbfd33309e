//! Entity input and JSON output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use klimat_trend::EmissionRecord;

/// One reporting entity from the input file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    /// Year the entity's own reduction target counts from.
    #[serde(default)]
    pub base_year: Option<i32>,
    /// Externally computed yearly slope, preferred over a local fit.
    #[serde(default)]
    pub trend_slope: Option<f64>,
    #[serde(default)]
    pub emissions: Vec<EmissionRecord>,
}

/// Reads the JSON array of entities at `path`.
pub fn read_entities(path: &Path) -> Result<Vec<Entity>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse entities JSON: {}", path.display()))
}

/// Writes `value` as pretty JSON to `path`, or to stdout if `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match path {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write output to stdout")
        }
    }
}

/// Resolves the year treated as "now": the CLI flag, else the local clock.
pub fn resolve_current_year(flag: Option<i32>) -> i32 {
    flag.unwrap_or_else(|| chrono::Local::now().year())
}
