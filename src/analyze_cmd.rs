//! Analyze command: trend summary, Paris verdict and unusual points.

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug_span, info, info_span, warn};

use klimat_anomaly::{DetectorConfig, UnusualPoints, detect_unusual_points};
use klimat_trend::{
    ParisAssessment, TrendAnalysis, TrendConfig, analyze_trend, assess_paris_budget, record_points,
};

use crate::cli::RunArgs;
use crate::config::KlimatConfig;
use crate::convert;
use crate::input::{Entity, read_entities, write_json};

/// Analysis results for one entity.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedEntity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<TrendAnalysis>,
    pub paris: ParisAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unusual_points: Option<UnusualPoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the analysis pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    let config = KlimatConfig::load(args.config.as_deref())?;
    let trend_cfg = convert::build_trend_config(&config, args.mode.as_deref(), args.end_year)?;
    let detector_cfg = convert::build_detector_config(&config.anomaly)?;
    if args.current_year.is_some() {
        info!("--current-year has no effect on analyze");
    }

    info!(path = %args.input.display(), "reading entities");
    let entities = read_entities(&args.input)?;
    info!(n = entities.len(), "loaded entities");

    let results = analyze_all(&entities, &trend_cfg, &detector_cfg);
    let n_failed = results.iter().filter(|r| r.error.is_some()).count();
    if n_failed > 0 {
        warn!(n_failed, "some entities could not be fully analysed");
    }

    write_json(&results, args.output.as_deref())?;
    info!("analysis output written");
    Ok(())
}

/// Analyses every entity in parallel; output order matches input order.
pub fn analyze_all(
    entities: &[Entity],
    trend_cfg: &TrendConfig,
    detector_cfg: &DetectorConfig,
) -> Vec<AnalyzedEntity> {
    entities
        .par_iter()
        .map(|entity| analyze_entity(entity, trend_cfg, detector_cfg))
        .collect()
}

fn analyze_entity(
    entity: &Entity,
    trend_cfg: &TrendConfig,
    detector_cfg: &DetectorConfig,
) -> AnalyzedEntity {
    let _span = debug_span!("entity", name = %entity.name).entered();
    let config = trend_cfg.clone().with_base_year(entity.base_year);
    let points = record_points(&entity.emissions);

    let mut errors = Vec::new();
    let analysis = analyze_trend(&points, entity.trend_slope, &config)
        .inspect_err(|e| errors.push(format!("trend: {e}")))
        .ok();
    let paris = assess_paris_budget(
        &points,
        analysis.as_ref(),
        config.carbon_law(),
        config.paris_window(),
    );
    let unusual_points = detect_unusual_points(&points, detector_cfg)
        .inspect_err(|e| errors.push(format!("unusual points: {e}")))
        .ok();

    AnalyzedEntity {
        name: entity.name.clone(),
        analysis,
        paris,
        unusual_points,
        error: (!errors.is_empty()).then(|| errors.join("; ")),
    }
}
