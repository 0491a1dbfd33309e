//! Approximate command: per-entity chart series.

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug_span, info, info_span, warn};

use klimat_trend::{ChartData, TrendConfig, sophisticated_approximated_data};

use crate::cli::RunArgs;
use crate::config::KlimatConfig;
use crate::convert;
use crate::input::{Entity, read_entities, resolve_current_year, write_json};

/// Chart series, or the reason there is none, for one entity.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproximatedEntity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ChartData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the approximation pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("approximate").entered();

    let config = KlimatConfig::load(args.config.as_deref())?;
    let trend_cfg = convert::build_trend_config(&config, args.mode.as_deref(), args.end_year)?;
    let current_year = resolve_current_year(args.current_year);

    info!(path = %args.input.display(), "reading entities");
    let entities = read_entities(&args.input)?;
    info!(n = entities.len(), current_year, "loaded entities");

    let results = approximate_all(&entities, current_year, &trend_cfg);
    let n_failed = results.iter().filter(|r| r.error.is_some()).count();
    if n_failed > 0 {
        warn!(n_failed, "some entities could not be approximated");
    }

    write_json(&results, args.output.as_deref())?;
    info!("approximation output written");
    Ok(())
}

/// Approximates every entity in parallel; output order matches input order.
pub fn approximate_all(
    entities: &[Entity],
    current_year: i32,
    config: &TrendConfig,
) -> Vec<ApproximatedEntity> {
    entities
        .par_iter()
        .map(|entity| approximate_entity(entity, current_year, config))
        .collect()
}

fn approximate_entity(entity: &Entity, current_year: i32, config: &TrendConfig) -> ApproximatedEntity {
    let _span = debug_span!("entity", name = %entity.name).entered();
    let config = config.clone().with_base_year(entity.base_year);
    match sophisticated_approximated_data(&entity.emissions, current_year, &config) {
        Ok(data) => ApproximatedEntity {
            name: entity.name.clone(),
            data: Some(data),
            error: None,
        },
        Err(e) => ApproximatedEntity {
            name: entity.name.clone(),
            data: None,
            error: Some(e.to_string()),
        },
    }
}
