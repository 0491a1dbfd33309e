//! Regression primitives for yearly emissions series.
//!
//! This crate fits straight lines and exponential curves to sparse,
//! irregular `(year, value)` observations. Every fit comes back as a typed
//! coefficient set ([`LinearFit`], [`ExponentialFit`], or the tagged
//! [`Fit`]) that callers evaluate at arbitrary years.
//!
//! # Quick start
//!
//! ```rust
//! use klimat_regression::{DEFAULT_DECAY, DataPoint, weighted_linear_regression};
//!
//! let points = [
//!     DataPoint::new(2020, 100.0),
//!     DataPoint::new(2021, 110.0),
//!     DataPoint::new(2022, 120.0),
//! ];
//! let fit = weighted_linear_regression(&points, DEFAULT_DECAY).unwrap();
//!
//! // The weighted fit always passes through the latest observation.
//! assert!((fit.evaluate(2022) - 120.0).abs() < 1e-9);
//! ```

mod error;
mod exponential;
mod fit;
mod linear;
mod point;

pub use error::RegressionError;
pub use exponential::{exponential_regression, weighted_exponential_regression};
pub use fit::{ExponentialFit, Fit, LinearFit};
pub use linear::{linear_regression, trend_slope, weighted_linear_regression};
pub use point::{DataPoint, valid_points};

/// Default geometric decay applied per year of age in the weighted fits.
pub const DEFAULT_DECAY: f64 = 0.7;

/// Minimum number of points any regression needs.
pub const MIN_POINTS: usize = 2;

/// Checks that a recency decay is finite and in `(0, 1]`.
///
/// # Errors
///
/// Returns [`RegressionError::InvalidDecay`] otherwise.
pub fn validate_decay(decay: f64) -> Result<(), RegressionError> {
    if !decay.is_finite() || decay <= 0.0 || decay > 1.0 {
        return Err(RegressionError::InvalidDecay { decay });
    }
    Ok(())
}

/// Recency weights `decay^(n-1-i)` for `n` chronologically sorted points.
/// The latest point gets weight 1.
fn recency_weights(n: usize, decay: f64) -> Vec<f64> {
    (0..n).map(|i| decay.powi((n - 1 - i) as i32)).collect()
}

/// Weighted least-squares line through `(xs, ys)`.
///
/// Returns `(slope, intercept)` in the frame of `xs`.
fn least_squares(xs: &[f64], ys: &[f64], weights: &[f64]) -> Result<(f64, f64), RegressionError> {
    let x_mean = klimat_stats::weighted_mean(xs, weights).ok_or(RegressionError::DegenerateInput)?;
    let y_mean = klimat_stats::weighted_mean(ys, weights).ok_or(RegressionError::DegenerateInput)?;

    let mut s_xy = 0.0;
    let mut s_xx = 0.0;
    for ((&x, &y), &w) in xs.iter().zip(ys).zip(weights) {
        let dx = x - x_mean;
        s_xy += w * dx * (y - y_mean);
        s_xx += w * dx * dx;
    }

    if s_xx == 0.0 {
        return Err(RegressionError::DegenerateInput);
    }

    let slope = s_xy / s_xx;
    Ok((slope, y_mean - slope * x_mean))
}
