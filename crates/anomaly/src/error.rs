//! Error types for the klimat-anomaly crate.

/// Error type for all fallible operations in the klimat-anomaly crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnomalyError {
    /// Returned when the detector configuration is invalid.
    #[error("invalid detector config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
