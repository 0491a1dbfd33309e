//! Fitted coefficient sets.

use serde::Serialize;

use crate::point::DataPoint;

/// A straight line `value = slope * year + intercept`.
///
/// The intercept is expressed in absolute years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    /// Change in value per year.
    pub slope: f64,
    /// Value at year 0.
    pub intercept: f64,
}

impl LinearFit {
    /// Creates a line from explicit coefficients.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Creates the line with `slope` that passes exactly through `point`.
    pub fn through(slope: f64, point: DataPoint) -> Self {
        Self {
            slope,
            intercept: point.value - slope * point.year as f64,
        }
    }

    /// Evaluates the line at `year`.
    pub fn evaluate(&self, year: i32) -> f64 {
        self.slope * year as f64 + self.intercept
    }
}

/// An exponential curve `value = a * e^(b * (year - origin))`.
///
/// With `origin = 0` this is the plain `a * e^(b * year)` form. Fits
/// produced by this crate use the earliest fitted year as origin so that
/// `a` stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExponentialFit {
    /// Value at the origin year.
    pub a: f64,
    /// Continuous growth rate per year.
    pub b: f64,
    /// Reference year of the curve.
    pub origin: i32,
}

impl ExponentialFit {
    /// Creates a curve from explicit coefficients.
    pub fn new(a: f64, b: f64, origin: i32) -> Self {
        Self { a, b, origin }
    }

    /// Evaluates the curve at `year`.
    pub fn evaluate(&self, year: i32) -> f64 {
        self.a * (self.b * (year - self.origin) as f64).exp()
    }

    /// Returns the same curve multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            a: self.a * factor,
            ..*self
        }
    }
}

/// A fitted trend of either shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Fit {
    /// Straight-line trend.
    Linear(LinearFit),
    /// Exponential trend.
    Exponential(ExponentialFit),
}

impl Fit {
    /// Evaluates the trend at `year`.
    pub fn evaluate(&self, year: i32) -> f64 {
        match self {
            Fit::Linear(f) => f.evaluate(year),
            Fit::Exponential(f) => f.evaluate(year),
        }
    }
}

impl From<LinearFit> for Fit {
    fn from(f: LinearFit) -> Self {
        Fit::Linear(f)
    }
}

impl From<ExponentialFit> for Fit {
    fn from(f: ExponentialFit) -> Self {
        Fit::Exponential(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_evaluate() {
        let f = LinearFit::new(10.0, 90.0);
        assert_relative_eq!(f.evaluate(2023), 20320.0);
    }

    #[test]
    fn linear_through_point() {
        let f = LinearFit::through(-5.0, DataPoint::new(2022, 120.0));
        assert_relative_eq!(f.evaluate(2022), 120.0, epsilon = 1e-9);
        assert_relative_eq!(f.evaluate(2024), 110.0, epsilon = 1e-9);
    }

    #[test]
    fn exponential_origin_zero_matches_plain_form() {
        let f = ExponentialFit::new(2.0, 0.001, 0);
        assert_relative_eq!(f.evaluate(2000), 2.0 * (2.0_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn exponential_scaled() {
        let f = ExponentialFit::new(100.0, -0.1, 2020).scaled(0.5);
        assert_relative_eq!(f.evaluate(2020), 50.0);
    }

    #[test]
    fn fit_dispatch() {
        let lin: Fit = LinearFit::new(1.0, 0.0).into();
        let exp: Fit = ExponentialFit::new(10.0, 0.0, 2000).into();
        assert_relative_eq!(lin.evaluate(5), 5.0);
        assert_relative_eq!(exp.evaluate(2050), 10.0);
    }

    #[test]
    fn fit_serializes_with_kind_tag() {
        let fit = Fit::Linear(LinearFit::new(2.0, 1.0));
        let json = serde_json::to_string(&fit).unwrap();
        assert_eq!(json, r#"{"kind":"linear","slope":2.0,"intercept":1.0}"#);
    }
}
