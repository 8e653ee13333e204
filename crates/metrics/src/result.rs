//! Metric results.

use serde::Serialize;
use timecourse_peaks::Classification;

use crate::metric::Metric;

/// Computed scalar metrics.
///
/// A field is `None` when its metric was not selected or is undefined for
/// the course (for example peak metrics without any significant peak).
/// `None` fields are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equilibrium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivative: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_auc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_slope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay_rate: Option<f64>,
}

impl MetricSet {
    /// Value of `metric`, if computed.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        *self.slot(metric)
    }

    /// Stores `value` for `metric`.
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        *self.slot_mut(metric) = value;
    }

    /// Fixed-size vector in [`Metric::ALL`] order, NaN where `None`.
    pub fn to_array(&self) -> [f64; Metric::COUNT] {
        Metric::ALL.map(|m| self.get(m).unwrap_or(f64::NAN))
    }

    fn slot(&self, metric: Metric) -> &Option<f64> {
        match metric {
            Metric::Mean => &self.mean,
            Metric::Auc => &self.auc,
            Metric::Max => &self.max,
            Metric::MaxTime => &self.max_time,
            Metric::Equilibrium => &self.equilibrium,
            Metric::Derivative => &self.derivative,
            Metric::DataPoints => &self.data_points,
            Metric::PeakCount => &self.peak_count,
            Metric::PeakTime => &self.peak_time,
            Metric::PeakAuc => &self.peak_auc,
            Metric::ActivationSlope => &self.activation_slope,
            Metric::DecayRate => &self.decay_rate,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::Mean => &mut self.mean,
            Metric::Auc => &mut self.auc,
            Metric::Max => &mut self.max,
            Metric::MaxTime => &mut self.max_time,
            Metric::Equilibrium => &mut self.equilibrium,
            Metric::Derivative => &mut self.derivative,
            Metric::DataPoints => &mut self.data_points,
            Metric::PeakCount => &mut self.peak_count,
            Metric::PeakTime => &mut self.peak_time,
            Metric::PeakAuc => &mut self.peak_auc,
            Metric::ActivationSlope => &mut self.activation_slope,
            Metric::DecayRate => &mut self.decay_rate,
        }
    }
}

/// Output of [`compute_metrics`](crate::compute_metrics).
///
/// Holds the usable samples (missing values dropped), their classification,
/// and the metrics derived from both.
#[derive(Debug, Clone)]
pub struct MetricResult {
    time: Vec<f64>,
    values: Vec<f64>,
    source_indices: Vec<usize>,
    classification: Classification,
    metrics: MetricSet,
}

impl MetricResult {
    pub(crate) fn new(
        time: Vec<f64>,
        values: Vec<f64>,
        source_indices: Vec<usize>,
        classification: Classification,
        metrics: MetricSet,
    ) -> Self {
        Self {
            time,
            values,
            source_indices,
            classification,
            metrics,
        }
    }

    /// Time points of the usable samples.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Values of the usable samples.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Index of each usable sample in the original input.
    pub fn source_indices(&self) -> &[usize] {
        &self.source_indices
    }

    /// Classification of the usable samples.
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Computed metrics.
    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }
}
