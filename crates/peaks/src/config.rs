//! Configuration for peak classification.

use crate::error::PeakError;

/// Configuration for [`find_peaks`](crate::find_peaks).
///
/// # Example
///
/// ```
/// use timecourse_peaks::PeakConfig;
///
/// let config = PeakConfig::new().with_sensitivity(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct PeakConfig {
    sensitivity: f64,
}

impl PeakConfig {
    /// Default sensitivity: a peak must rise 10% of the series range above
    /// its neighbours.
    pub const DEFAULT_SENSITIVITY: f64 = 0.1;

    /// Creates a configuration with `sensitivity = 0.1`.
    pub fn new() -> Self {
        Self {
            sensitivity: Self::DEFAULT_SENSITIVITY,
        }
    }

    /// Sets the sensitivity fraction.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Returns the sensitivity fraction.
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Checks that sensitivity is finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<(), PeakError> {
        validate_sensitivity(self.sensitivity)
    }
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_sensitivity(value: f64) -> Result<(), PeakError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(PeakError::InvalidSensitivity { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = PeakConfig::new();
        assert!((cfg.sensitivity() - 0.1).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder() {
        let cfg = PeakConfig::default().with_sensitivity(0.75);
        assert!((cfg.sensitivity() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_bounds_inclusive() {
        assert!(PeakConfig::new().with_sensitivity(0.0).validate().is_ok());
        assert!(PeakConfig::new().with_sensitivity(1.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects() {
        for bad in [-0.01, 1.5, f64::NAN, f64::INFINITY] {
            let err = PeakConfig::new().with_sensitivity(bad).validate();
            assert!(
                matches!(err, Err(PeakError::InvalidSensitivity { .. })),
                "expected rejection for {bad}"
            );
        }
    }
}
