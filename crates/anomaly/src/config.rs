//! Detector configuration.

use crate::error::AnomalyError;

/// Configuration for [`detect_unusual_points`](crate::detect_unusual_points).
///
/// # Example
///
/// ```
/// use klimat_anomaly::DetectorConfig;
///
/// let config = DetectorConfig::new().with_multiplier(3.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    multiplier: f64,
    min_points: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorConfig {
    /// Creates a configuration with defaults: `multiplier = 4.0`,
    /// `min_points = 4`.
    pub fn new() -> Self {
        Self {
            multiplier: 4.0,
            min_points: 4,
        }
    }

    /// Sets the multiple of the median change above which a change is flagged.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the minimum number of reported years needed before detecting.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Returns the median multiplier.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the minimum number of reported years.
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnomalyError::InvalidConfig`] if the multiplier is not
    /// finite and positive or `min_points < 2`.
    pub fn validate(&self) -> Result<(), AnomalyError> {
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err(AnomalyError::InvalidConfig {
                reason: format!(
                    "multiplier must be finite and > 0, got {}",
                    self.multiplier
                ),
            });
        }
        if self.min_points < 2 {
            return Err(AnomalyError::InvalidConfig {
                reason: format!("min_points must be >= 2, got {}", self.min_points),
            });
        }
        Ok(())
    }
}
