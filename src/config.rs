use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Klimat configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KlimatConfig {
    /// Trend fitting and projection settings.
    #[serde(default)]
    pub trend: TrendToml,

    /// Carbon Law reference curve settings.
    #[serde(default)]
    pub carbon_law: CarbonLawToml,

    /// Paris-budget window.
    #[serde(default)]
    pub paris: ParisToml,

    /// Unusual-point detection settings.
    #[serde(default)]
    pub anomaly: AnomalyToml,
}

impl KlimatConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrendToml {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
    #[serde(default = "default_weighting")]
    pub weighting: String,
    #[serde(default = "default_decay")]
    pub decay: f64,
    #[serde(default = "default_stable_threshold_pct")]
    pub stable_threshold_pct: f64,
}

impl Default for TrendToml {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            end_year: default_end_year(),
            weighting: default_weighting(),
            decay: default_decay(),
            stable_threshold_pct: default_stable_threshold_pct(),
        }
    }
}

fn default_mode() -> String {
    "linear".to_string()
}
fn default_end_year() -> i32 {
    2050
}
fn default_weighting() -> String {
    "ordinary".to_string()
}
fn default_decay() -> f64 {
    klimat_regression::DEFAULT_DECAY
}
fn default_stable_threshold_pct() -> f64 {
    0.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarbonLawToml {
    #[serde(default = "default_reduction_rate")]
    pub reduction_rate: f64,
}

impl Default for CarbonLawToml {
    fn default() -> Self {
        Self {
            reduction_rate: default_reduction_rate(),
        }
    }
}

fn default_reduction_rate() -> f64 {
    klimat_trend::DEFAULT_REDUCTION_RATE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParisToml {
    #[serde(default = "default_paris_start")]
    pub start: i32,
    #[serde(default = "default_paris_end")]
    pub end: i32,
}

impl Default for ParisToml {
    fn default() -> Self {
        Self {
            start: default_paris_start(),
            end: default_paris_end(),
        }
    }
}

fn default_paris_start() -> i32 {
    2025
}
fn default_paris_end() -> i32 {
    2050
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnomalyToml {
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    #[serde(default = "default_min_points")]
    pub min_points: usize,
}

impl Default for AnomalyToml {
    fn default() -> Self {
        Self {
            multiplier: default_multiplier(),
            min_points: default_min_points(),
        }
    }
}

fn default_multiplier() -> f64 {
    4.0
}
fn default_min_points() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config: KlimatConfig = toml::from_str("").unwrap();
        assert_eq!(config.trend.mode, "linear");
        assert_eq!(config.trend.end_year, 2050);
        assert_eq!(config.trend.weighting, "ordinary");
        assert_eq!(config.trend.decay, 0.7);
        assert_eq!(config.carbon_law.reduction_rate, 0.1172);
        assert_eq!((config.paris.start, config.paris.end), (2025, 2050));
        assert_eq!(config.anomaly.multiplier, 4.0);
        assert_eq!(config.anomaly.min_points, 4);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: KlimatConfig = toml::from_str(
            r#"
            [trend]
            mode = "exponential"

            [carbon_law]
            reduction_rate = 0.1356
            "#,
        )
        .unwrap();
        assert_eq!(config.trend.mode, "exponential");
        assert_eq!(config.trend.end_year, 2050);
        assert_eq!(config.carbon_law.reduction_rate, 0.1356);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<KlimatConfig, _> = toml::from_str("[trend]\nhorizon = 2040\n");
        assert!(result.is_err());
        let result: Result<KlimatConfig, _> = toml::from_str("[forecast]\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_without_path_is_default() {
        let config = KlimatConfig::load(None).unwrap();
        assert_eq!(config.trend.end_year, 2050);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[paris]\nstart = 2030").unwrap();
        let config = KlimatConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.paris.start, 2030);
        assert_eq!(config.paris.end, 2050);
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = KlimatConfig::load(Some(Path::new("/nonexistent/klimat.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/klimat.toml"));
    }
}
