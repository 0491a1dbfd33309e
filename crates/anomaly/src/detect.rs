//! Median-based detection of unusual year-over-year changes.

use klimat_regression::DataPoint;
use tracing::debug;

use crate::config::DetectorConfig;
use crate::error::AnomalyError;
use crate::result::{Direction, UnusualPoint, UnusualPoints};

/// A year-over-year transition with a non-zero starting value.
struct Transition {
    from: DataPoint,
    to: DataPoint,
    change_pct: f64,
}

fn transitions(sorted: &[DataPoint]) -> Vec<Transition> {
    sorted
        .windows(2)
        .filter(|w| w[0].value != 0.0)
        .map(|w| Transition {
            from: w[0],
            to: w[1],
            change_pct: (w[1].value - w[0].value) / w[0].value.abs() * 100.0,
        })
        .collect()
}

fn describe(t: &Transition, direction: Direction, multiplier: f64, median: f64) -> String {
    let verb = match direction {
        Direction::Increase => "increased",
        Direction::Decrease => "decreased",
    };
    format!(
        "Emissions {verb} by {:.1}% from {} to {}, more than {multiplier}x the median \
         year-over-year change of {median:.1}%",
        t.change_pct.abs(),
        t.from.year,
        t.to.year,
    )
}

/// Flags year-over-year changes that exceed `multiplier` times the median
/// absolute year-over-year change of the series.
///
/// Points are sorted chronologically first. Series with fewer than
/// `config.min_points()` points report nothing. Transitions starting from a
/// zero value are skipped.
///
/// # Errors
///
/// Returns [`AnomalyError::InvalidConfig`] if the configuration is invalid.
#[tracing::instrument(skip(points, config), fields(n_points = points.len()))]
pub fn detect_unusual_points(
    points: &[DataPoint],
    config: &DetectorConfig,
) -> Result<UnusualPoints, AnomalyError> {
    config.validate()?;

    if points.len() < config.min_points() {
        debug!("too few points for detection");
        return Ok(UnusualPoints::none());
    }

    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.year);

    let steps = transitions(&sorted);
    let abs_changes: Vec<f64> = steps.iter().map(|t| t.change_pct.abs()).collect();
    let Some(median) = klimat_stats::median_unsorted(&abs_changes) else {
        return Ok(UnusualPoints::none());
    };
    let threshold = config.multiplier() * median;

    let details: Vec<UnusualPoint> = steps
        .iter()
        .filter(|t| t.change_pct.abs() > threshold)
        .map(|t| {
            let direction = if t.change_pct >= 0.0 {
                Direction::Increase
            } else {
                Direction::Decrease
            };
            UnusualPoint {
                year: t.to.year,
                from_year: t.from.year,
                to_year: t.to.year,
                from_value: t.from.value,
                to_value: t.to.value,
                change_pct: t.change_pct,
                threshold_pct: threshold,
                direction,
                reason: describe(t, direction, config.multiplier(), median),
            }
        })
        .collect();

    debug!(median, threshold, n_flagged = details.len(), "detection complete");
    Ok(UnusualPoints::from_details(details))
}
