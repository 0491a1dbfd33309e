//! Error types for the klimat-regression crate.

/// Error type for all fallible operations in the klimat-regression crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegressionError {
    /// Returned when there are too few usable points to fit.
    #[error("insufficient data: got {n} usable points, need at least {min}")]
    InsufficientData {
        /// Number of usable points.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when every point shares the same year.
    #[error("degenerate input: all points share the same year")]
    DegenerateInput,

    /// Returned when a recency decay is outside `(0, 1]`.
    #[error("invalid decay: {decay} (must be finite and in (0, 1])")]
    InvalidDecay {
        /// The invalid decay.
        decay: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_insufficient_data() {
        let e = RegressionError::InsufficientData { n: 1, min: 2 };
        assert_eq!(
            e.to_string(),
            "insufficient data: got 1 usable points, need at least 2"
        );
    }

    #[test]
    fn error_degenerate_input() {
        let e = RegressionError::DegenerateInput;
        assert_eq!(
            e.to_string(),
            "degenerate input: all points share the same year"
        );
    }

    #[test]
    fn error_invalid_decay() {
        let e = RegressionError::InvalidDecay { decay: 1.5 };
        assert_eq!(
            e.to_string(),
            "invalid decay: 1.5 (must be finite and in (0, 1])"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<RegressionError>();
    }
}
