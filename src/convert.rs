//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use timecourse_io::CsvConfig;
use timecourse_metrics::{Metric, MetricConfig, MetricSelect};
use timecourse_peaks::PeakConfig;

use crate::config::{InputToml, MetricsToml, PeaksToml};

/// Parses a delimiter string into a single byte. Accepts `"tab"` as an alias.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    if s.eq_ignore_ascii_case("tab") {
        return Ok(b'\t');
    }
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => bail!("delimiter must be a single ASCII character, got {s:?}"),
    }
}

/// Builds a [`PeakConfig`], letting a CLI override win over the file.
pub fn build_peak_config(peaks: &PeaksToml, sensitivity: Option<f64>) -> Result<PeakConfig> {
    let cfg = PeakConfig::new().with_sensitivity(sensitivity.unwrap_or(peaks.sensitivity));
    cfg.validate().context("invalid peak configuration")?;
    Ok(cfg)
}

/// Builds a [`CsvConfig`] from the TOML input configuration.
pub fn build_csv_config(input: &InputToml) -> Result<CsvConfig> {
    let cfg = CsvConfig::default()
        .with_time_column(&input.time_column)
        .with_value_column(&input.value_column)
        .with_delimiter(parse_delimiter(&input.delimiter)?);
    cfg.validate().context("invalid input configuration")?;
    Ok(cfg)
}

/// Builds a [`MetricSelect`] from the per-metric switches.
pub fn build_metric_select(metrics: &MetricsToml) -> Result<MetricSelect> {
    let select = MetricSelect::none()
        .set(Metric::Mean, metrics.mean)
        .set(Metric::Auc, metrics.auc)
        .set(Metric::Max, metrics.max)
        .set(Metric::MaxTime, metrics.max_time)
        .set(Metric::Equilibrium, metrics.equilibrium)
        .set(Metric::Derivative, metrics.derivative)
        .set(Metric::DataPoints, metrics.data_points)
        .set(Metric::PeakCount, metrics.peak_count)
        .set(Metric::PeakTime, metrics.peak_time)
        .set(Metric::PeakAuc, metrics.peak_auc)
        .set(Metric::ActivationSlope, metrics.activation_slope)
        .set(Metric::DecayRate, metrics.decay_rate);
    if select.is_empty() {
        bail!("[metrics] disables every metric; enable at least one");
    }
    Ok(select)
}

/// Builds a [`MetricConfig`] from the peak and metric sections.
pub fn build_metric_config(
    peaks: &PeaksToml,
    metrics: &MetricsToml,
    sensitivity: Option<f64>,
) -> Result<MetricConfig> {
    Ok(MetricConfig::new()
        .with_peak_config(build_peak_config(peaks, sensitivity)?)
        .with_select(build_metric_select(metrics)?))
}
