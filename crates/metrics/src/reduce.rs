//! Metric reduction over a classified timecourse.

use timecourse_peaks::{Classification, Extremum, find_peaks};
use timecourse_stats::{argmax, mean, trapz};
use tracing::debug;

use crate::config::MetricConfig;
use crate::error::MetricError;
use crate::metric::Metric;
use crate::result::{MetricResult, MetricSet};

/// Minimum usable samples for classification.
pub const MIN_SAMPLES: usize = 3;

/// Classifies a timecourse and computes the selected metrics.
///
/// Non-finite values are treated as missing and dropped together with their
/// time points. The course is rejected if half or more of the values are
/// missing (`missing >= n / 2`, integer division).
///
/// # Errors
///
/// - [`MetricError::LengthMismatch`] if `values` and `time` differ in length.
/// - [`MetricError::TooManyMissing`] if too many values are missing.
/// - [`MetricError::InvalidTimePoints`] if a usable time point is non-finite
///   or not strictly after the previous usable one.
/// - [`MetricError::InsufficientData`] for fewer than three usable samples.
/// - [`MetricError::Peaks`] if classification fails.
#[tracing::instrument(skip(values, time, config), fields(n = values.len()))]
pub fn compute_metrics(
    values: &[f64],
    time: &[f64],
    config: &MetricConfig,
) -> Result<MetricResult, MetricError> {
    config.validate()?;
    let n = values.len();
    if time.len() != n {
        return Err(MetricError::LengthMismatch {
            values_len: n,
            time_len: time.len(),
        });
    }
    if n == 0 {
        return Err(MetricError::InsufficientData {
            n: 0,
            min: MIN_SAMPLES,
        });
    }

    let source_indices: Vec<usize> = (0..n).filter(|&i| values[i].is_finite()).collect();
    let missing = n - source_indices.len();
    if missing >= n / 2 && missing > 0 {
        return Err(MetricError::TooManyMissing { missing, n });
    }
    if missing > 0 {
        debug!(missing, "dropping missing values");
    }

    let kept_time: Vec<f64> = source_indices.iter().map(|&i| time[i]).collect();
    let kept_values: Vec<f64> = source_indices.iter().map(|&i| values[i]).collect();
    check_time(&kept_time, &source_indices)?;

    if kept_values.len() < MIN_SAMPLES {
        return Err(MetricError::InsufficientData {
            n: kept_values.len(),
            min: MIN_SAMPLES,
        });
    }

    let classification = find_peaks(&kept_values, config.peak_config())?;
    let metrics = reduce(&kept_time, &kept_values, &classification, config);

    Ok(MetricResult::new(
        kept_time,
        kept_values,
        source_indices,
        classification,
        metrics,
    ))
}

/// Rejects non-finite or non-increasing time points.
fn check_time(time: &[f64], source_indices: &[usize]) -> Result<(), MetricError> {
    for (k, &t) in time.iter().enumerate() {
        if !t.is_finite() {
            return Err(MetricError::InvalidTimePoints {
                index: source_indices[k],
                reason: format!("non-finite value {t}"),
            });
        }
        if k > 0 && t <= time[k - 1] {
            return Err(MetricError::InvalidTimePoints {
                index: source_indices[k],
                reason: format!("{t} does not follow {}", time[k - 1]),
            });
        }
    }
    Ok(())
}

/// The highest significant peak and the samples bounding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DominantPeak {
    peak: usize,
    left: usize,
    right: usize,
}

impl DominantPeak {
    /// Highest peak (earliest on ties), flanked by the nearest valleys or
    /// the series ends.
    fn find(values: &[f64], marks: &Classification) -> Option<Self> {
        let peaks = marks.peaks();
        let heights: Vec<f64> = peaks.iter().map(|&p| values[p]).collect();
        let peak = peaks[argmax(&heights)?];

        let left = (0..peak)
            .rev()
            .find(|&k| marks[k] == Extremum::Valley)
            .unwrap_or(0);
        let right = (peak + 1..values.len())
            .find(|&k| marks[k] == Extremum::Valley)
            .unwrap_or(values.len() - 1);
        Some(Self { peak, left, right })
    }
}

fn reduce(
    time: &[f64],
    values: &[f64],
    marks: &Classification,
    config: &MetricConfig,
) -> MetricSet {
    let n = values.len();
    let top = argmax(values);
    let dominant = DominantPeak::find(values, marks);

    let mut set = MetricSet::default();
    for metric in config.select().iter() {
        let value = match metric {
            Metric::Mean => Some(mean(values)),
            Metric::Auc => Some(trapz(time, values)),
            Metric::Max => top.map(|i| values[i]),
            Metric::MaxTime => top.map(|i| time[i]),
            Metric::Equilibrium => {
                let tail = n.div_ceil(4);
                Some(mean(&values[n - tail..]))
            }
            Metric::Derivative => steepest_slope(time, values),
            Metric::DataPoints => Some(n as f64),
            Metric::PeakCount => Some(marks.count(Extremum::Peak) as f64),
            Metric::PeakTime => dominant.map(|d| time[d.peak]),
            Metric::PeakAuc => dominant
                .filter(|d| d.left < d.right)
                .map(|d| trapz(&time[d.left..=d.right], &values[d.left..=d.right])),
            Metric::ActivationSlope => dominant
                .filter(|d| d.left < d.peak)
                .map(|d| (values[d.peak] - values[d.left]) / (time[d.peak] - time[d.left])),
            Metric::DecayRate => dominant
                .filter(|d| d.right > d.peak)
                .map(|d| (values[d.peak] - values[d.right]) / (time[d.right] - time[d.peak])),
        };
        set.set(metric, value);
    }
    set
}

/// Largest absolute slope between consecutive samples.
fn steepest_slope(time: &[f64], values: &[f64]) -> Option<f64> {
    time.windows(2)
        .zip(values.windows(2))
        .map(|(t, v)| ((v[1] - v[0]) / (t[1] - t[0])).abs())
        .reduce(f64::max)
}
