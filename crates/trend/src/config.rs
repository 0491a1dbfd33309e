//! Configuration for trend fitting and approximation.

use klimat_regression::DEFAULT_DECAY;

use crate::carbon_law::CarbonLaw;
use crate::error::TrendError;
use crate::paris::ParisWindow;

/// Which curve shape the approximated series follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproximationMode {
    /// Straight-line trend anchored on the latest report.
    Linear,
    /// Exponential trend rescaled through the latest report.
    Exponential,
}

/// How regression points are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Every selected point counts equally.
    Ordinary,
    /// Older points decay geometrically by the configured decay.
    RecencyWeighted,
}

/// Configuration for trend fitting, gap-filling and projection.
///
/// # Example
///
/// ```
/// use klimat_trend::{ApproximationMode, TrendConfig};
///
/// let config = TrendConfig::new()
///     .with_mode(ApproximationMode::Exponential)
///     .with_end_year(2045)
///     .with_base_year(Some(2019));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TrendConfig {
    mode: ApproximationMode,
    end_year: i32,
    base_year: Option<i32>,
    weighting: Weighting,
    decay: f64,
    carbon_law: CarbonLaw,
    paris_window: ParisWindow,
    stable_threshold_pct: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: linear mode, `end_year = 2050`, no base year, ordinary
    /// weighting, `decay = 0.7`, the default Carbon Law rate, the
    /// 2025-2050 Paris window and a 0.5 %/yr stable band.
    pub fn new() -> Self {
        Self {
            mode: ApproximationMode::Linear,
            end_year: 2050,
            base_year: None,
            weighting: Weighting::Ordinary,
            decay: DEFAULT_DECAY,
            carbon_law: CarbonLaw::default(),
            paris_window: ParisWindow::default(),
            stable_threshold_pct: 0.5,
        }
    }

    /// Sets the approximation mode.
    pub fn with_mode(mut self, mode: ApproximationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the last projected year.
    pub fn with_end_year(mut self, end_year: i32) -> Self {
        self.end_year = end_year;
        self
    }

    /// Sets the base year regression points are selected from.
    pub fn with_base_year(mut self, base_year: Option<i32>) -> Self {
        self.base_year = base_year;
        self
    }

    /// Sets the regression weighting.
    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Sets the recency decay used by [`Weighting::RecencyWeighted`].
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Sets the Carbon Law reference curve.
    pub fn with_carbon_law(mut self, carbon_law: CarbonLaw) -> Self {
        self.carbon_law = carbon_law;
        self
    }

    /// Sets the cumulative-budget window for the Paris verdict.
    pub fn with_paris_window(mut self, window: ParisWindow) -> Self {
        self.paris_window = window;
        self
    }

    /// Sets the yearly change (in percent) within which a trend is stable.
    pub fn with_stable_threshold_pct(mut self, pct: f64) -> Self {
        self.stable_threshold_pct = pct;
        self
    }

    // --- Accessors ---

    /// Returns the approximation mode.
    pub fn mode(&self) -> ApproximationMode {
        self.mode
    }

    /// Returns the last projected year.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Returns the base year, if any.
    pub fn base_year(&self) -> Option<i32> {
        self.base_year
    }

    /// Returns the regression weighting.
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Returns the recency decay.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Returns the Carbon Law reference curve.
    pub fn carbon_law(&self) -> &CarbonLaw {
        &self.carbon_law
    }

    /// Returns the Paris budget window.
    pub fn paris_window(&self) -> &ParisWindow {
        &self.paris_window
    }

    /// Returns the stable band in percent per year.
    pub fn stable_threshold_pct(&self) -> f64 {
        self.stable_threshold_pct
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Regression`] for an invalid decay and
    /// [`TrendError::InvalidConfig`] for a negative or non-finite stable
    /// threshold.
    pub fn validate(&self) -> Result<(), TrendError> {
        klimat_regression::validate_decay(self.decay)?;
        if !self.stable_threshold_pct.is_finite() || self.stable_threshold_pct < 0.0 {
            return Err(TrendError::InvalidConfig {
                reason: format!(
                    "stable_threshold_pct must be finite and >= 0, got {}",
                    self.stable_threshold_pct
                ),
            });
        }
        Ok(())
    }
}
