//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use klimat_anomaly::DetectorConfig;
use klimat_trend::{ApproximationMode, CarbonLaw, ParisWindow, TrendConfig, Weighting};

use crate::config::{AnomalyToml, KlimatConfig};

/// Parses an approximation mode name into the corresponding enum variant.
pub fn parse_mode(s: &str) -> Result<ApproximationMode> {
    match s.to_lowercase().as_str() {
        "linear" => Ok(ApproximationMode::Linear),
        "exponential" => Ok(ApproximationMode::Exponential),
        other => bail!("unknown approximation mode: {other:?}"),
    }
}

/// Parses a regression weighting name into the corresponding enum variant.
pub fn parse_weighting(s: &str) -> Result<Weighting> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "ordinary" => Ok(Weighting::Ordinary),
        "recency_weighted" | "weighted" => Ok(Weighting::RecencyWeighted),
        other => bail!("unknown weighting: {other:?}"),
    }
}

/// Builds a [`TrendConfig`] from the TOML configuration.
///
/// `mode` and `end_year` override the file values when given. The per-entity
/// base year is set later by the commands.
pub fn build_trend_config(
    config: &KlimatConfig,
    mode: Option<&str>,
    end_year: Option<i32>,
) -> Result<TrendConfig> {
    let mode = parse_mode(mode.unwrap_or(&config.trend.mode))?;
    let weighting = parse_weighting(&config.trend.weighting)?;
    let carbon_law = CarbonLaw::new(config.carbon_law.reduction_rate)?;
    let window = ParisWindow::new(config.paris.start, config.paris.end)?;

    let cfg = TrendConfig::new()
        .with_mode(mode)
        .with_end_year(end_year.unwrap_or(config.trend.end_year))
        .with_weighting(weighting)
        .with_decay(config.trend.decay)
        .with_carbon_law(carbon_law)
        .with_paris_window(window)
        .with_stable_threshold_pct(config.trend.stable_threshold_pct);
    cfg.validate().context("invalid [trend] configuration")?;
    Ok(cfg)
}

/// Builds a [`DetectorConfig`] from the TOML anomaly configuration.
pub fn build_detector_config(anomaly: &AnomalyToml) -> Result<DetectorConfig> {
    let cfg = DetectorConfig::new()
        .with_multiplier(anomaly.multiplier)
        .with_min_points(anomaly.min_points);
    cfg.validate().context("invalid [anomaly] configuration")?;
    Ok(cfg)
}
