//! Configuration for metric computation.

use timecourse_peaks::PeakConfig;

use crate::error::MetricError;
use crate::metric::{Metric, MetricSelect};

/// Configuration for [`compute_metrics`](crate::compute_metrics).
///
/// # Example
///
/// ```
/// use timecourse_metrics::{Metric, MetricConfig, MetricSelect};
///
/// let config = MetricConfig::new()
///     .with_sensitivity(0.25)
///     .with_select(MetricSelect::none().with(Metric::PeakCount));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MetricConfig {
    peaks: PeakConfig,
    select: MetricSelect,
}

impl MetricConfig {
    /// Creates a configuration with default sensitivity and every metric selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the peak classification sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.peaks = self.peaks.with_sensitivity(sensitivity);
        self
    }

    /// Replaces the peak classification configuration.
    pub fn with_peak_config(mut self, peaks: PeakConfig) -> Self {
        self.peaks = peaks;
        self
    }

    /// Sets which metrics are computed.
    pub fn with_select(mut self, select: MetricSelect) -> Self {
        self.select = select;
        self
    }

    /// Returns the peak classification configuration.
    pub fn peak_config(&self) -> &PeakConfig {
        &self.peaks
    }

    /// Returns the metric selection.
    pub fn select(&self) -> MetricSelect {
        self.select
    }

    /// True if `metric` is selected.
    pub fn is_selected(&self, metric: Metric) -> bool {
        self.select.contains(metric)
    }

    /// Validates the peak configuration.
    pub fn validate(&self) -> Result<(), MetricError> {
        self.peaks.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = MetricConfig::new();
        assert!((cfg.peak_config().sensitivity() - 0.1).abs() < f64::EPSILON);
        assert_eq!(cfg.select(), MetricSelect::all());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = MetricConfig::new()
            .with_sensitivity(0.6)
            .with_select(MetricSelect::none().with(Metric::Auc));
        assert!((cfg.peak_config().sensitivity() - 0.6).abs() < f64::EPSILON);
        assert!(cfg.is_selected(Metric::Auc));
        assert!(!cfg.is_selected(Metric::Mean));
    }

    #[test]
    fn with_peak_config_replaces() {
        let cfg = MetricConfig::new().with_peak_config(PeakConfig::new().with_sensitivity(0.9));
        assert!((cfg.peak_config().sensitivity() - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_bad_sensitivity() {
        let err = MetricConfig::new().with_sensitivity(1.2).validate();
        assert!(matches!(err, Err(MetricError::Peaks(_))));
    }
}
