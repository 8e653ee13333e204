//! Metric identifiers and bitmask selection.

/// A single scalar metric.
///
/// The discriminant is the metric's position in
/// [`MetricSet::to_array`](crate::MetricSet::to_array) and its bit in
/// [`MetricSelect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Metric {
    /// Arithmetic mean of the course.
    Mean = 0,
    /// Trapezoidal area under the whole course.
    Auc = 1,
    /// Maximum value.
    Max = 2,
    /// Time point of the maximum.
    MaxTime = 3,
    /// Mean of the last quarter of samples.
    Equilibrium = 4,
    /// Largest absolute slope between consecutive samples.
    Derivative = 5,
    /// Number of usable samples.
    DataPoints = 6,
    /// Number of significant peaks.
    PeakCount = 7,
    /// Time point of the dominant peak.
    PeakTime = 8,
    /// Area between the dominant peak's flanking valleys.
    PeakAuc = 9,
    /// Rise rate from the left flank to the dominant peak.
    ActivationSlope = 10,
    /// Fall rate from the dominant peak to the right flank.
    DecayRate = 11,
}

impl Metric {
    /// Number of metrics.
    pub const COUNT: usize = 12;

    /// All metrics in output order.
    pub const ALL: [Metric; Self::COUNT] = [
        Self::Mean,
        Self::Auc,
        Self::Max,
        Self::MaxTime,
        Self::Equilibrium,
        Self::Derivative,
        Self::DataPoints,
        Self::PeakCount,
        Self::PeakTime,
        Self::PeakAuc,
        Self::ActivationSlope,
        Self::DecayRate,
    ];

    /// Position in the output vector.
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Snake-case name, matching the configuration keys and JSON fields.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Auc => "auc",
            Self::Max => "max",
            Self::MaxTime => "max_time",
            Self::Equilibrium => "equilibrium",
            Self::Derivative => "derivative",
            Self::DataPoints => "data_points",
            Self::PeakCount => "peak_count",
            Self::PeakTime => "peak_time",
            Self::PeakAuc => "peak_auc",
            Self::ActivationSlope => "activation_slope",
            Self::DecayRate => "decay_rate",
        }
    }

    /// Looks up a metric by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Set of metrics to compute, stored as a bitmask.
///
/// # Example
///
/// ```
/// use timecourse_metrics::{Metric, MetricSelect};
///
/// let select = MetricSelect::none().with(Metric::Mean).with(Metric::PeakCount);
/// assert!(select.contains(Metric::Mean));
/// assert!(!select.contains(Metric::Auc));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricSelect {
    mask: u16,
}

impl MetricSelect {
    /// Every metric selected.
    pub fn all() -> Self {
        Self {
            mask: (1 << Metric::COUNT) - 1,
        }
    }

    /// No metric selected.
    pub fn none() -> Self {
        Self { mask: 0 }
    }

    /// Builds a selection from one flag per metric, in [`Metric::ALL`] order.
    /// Missing trailing flags count as deselected.
    pub fn from_flags(flags: &[bool]) -> Self {
        Metric::ALL
            .into_iter()
            .zip(flags)
            .filter(|(_, on)| **on)
            .fold(Self::none(), |sel, (m, _)| sel.with(m))
    }

    /// Adds `metric` to the selection.
    pub fn with(mut self, metric: Metric) -> Self {
        self.mask |= metric.bit();
        self
    }

    /// Removes `metric` from the selection.
    pub fn without(mut self, metric: Metric) -> Self {
        self.mask &= !metric.bit();
        self
    }

    /// Sets whether `metric` is selected.
    pub fn set(self, metric: Metric, on: bool) -> Self {
        if on { self.with(metric) } else { self.without(metric) }
    }

    /// True if `metric` is selected.
    pub fn contains(&self, metric: Metric) -> bool {
        self.mask & metric.bit() != 0
    }

    /// True if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Selected metrics in output order.
    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        Metric::ALL.into_iter().filter(|m| self.contains(*m))
    }

    /// Raw bitmask; bit `i` is [`Metric::ALL`]`[i]`.
    pub fn bits(&self) -> u16 {
        self.mask
    }
}

impl Default for MetricSelect {
    fn default() -> Self {
        Self::all()
    }
}
