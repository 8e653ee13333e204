//! Error types for the timecourse-metrics crate.

use timecourse_peaks::PeakError;

/// Error type for all fallible operations in the timecourse-metrics crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MetricError {
    /// Returned when values and time points differ in length.
    #[error("length mismatch: {values_len} values, {time_len} time points")]
    LengthMismatch {
        /// Number of values.
        values_len: usize,
        /// Number of time points.
        time_len: usize,
    },

    /// Returned when at least half of the values are missing.
    #[error("too many missing values: {missing} of {n}")]
    TooManyMissing {
        /// Number of missing (non-finite) values.
        missing: usize,
        /// Total number of values.
        n: usize,
    },

    /// Returned when too few usable samples remain.
    #[error("insufficient data: got {n} usable samples, need at least {min}")]
    InsufficientData {
        /// Usable samples.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when a time point is non-finite or not after its predecessor.
    #[error("invalid time point at index {index}: {reason}")]
    InvalidTimePoints {
        /// Index into the original time points.
        index: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Wraps a classification failure.
    #[error("classification failed: {0}")]
    Peaks(#[from] PeakError),
}
