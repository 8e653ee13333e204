//! Error types for the timecourse-peaks crate.

/// Error type for all fallible operations in the timecourse-peaks crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PeakError {
    /// Returned when the series is too short to classify.
    #[error("insufficient data: got {n} samples, need at least {min}")]
    InsufficientData {
        /// Number of samples provided.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when a classification does not line up with its series.
    #[error(
        "length mismatch: series has {series_len} samples, classification has {classification_len}"
    )]
    LengthMismatch {
        /// Length of the series.
        series_len: usize,
        /// Length of the supplied classification.
        classification_len: usize,
    },

    /// Returned when sensitivity is outside `[0, 1]` or not finite.
    #[error("invalid sensitivity: {value} (must be in [0, 1])")]
    InvalidSensitivity {
        /// The rejected value.
        value: f64,
    },

    /// Returned when the series contains NaN or infinity.
    #[error("non-finite sample at index {index}")]
    NonFiniteData {
        /// Index of the first non-finite sample.
        index: usize,
    },

    /// Returned when a boundary point is neither a peak nor a valley.
    ///
    /// Raw detection always marks both endpoints, so this indicates a
    /// corrupted externally supplied classification.
    #[error("unknown state at boundary index {index}: expected a peak or valley")]
    UnknownState {
        /// Boundary index that was found insignificant.
        index: usize,
    },
}
