//! Statistical helper functions for the klimat trend engine.

/// Weighted arithmetic mean.
///
/// Returns `None` if the slices differ in length, are empty, or the weights
/// sum to zero.
pub fn weighted_mean(data: &[f64], weights: &[f64]) -> Option<f64> {
    if data.len() != weights.len() || data.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return None;
    }
    let sum: f64 = data.iter().zip(weights).map(|(x, w)| x * w).sum();
    Some(sum / total)
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Median of unsorted data. Returns `None` if empty.
pub fn median_unsorted(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(median(&sorted))
}

/// Cumulative total of a yearly series using trapezoidal steps.
///
/// The first value is counted in full; every later value adds the
/// trapezoid `(prev + cur) / 2` spanning the year from its predecessor.
/// A single value therefore integrates to itself. Returns 0.0 if empty.
pub fn cumulative_trapezoid(values: &[f64]) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };
    let mut total = first;
    let mut prev = first;
    for &cur in rest {
        total += (prev + cur) / 2.0;
        prev = cur;
    }
    total
}

/// Plain year-by-year sum of a yearly series.
pub fn yearly_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}
