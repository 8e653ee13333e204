//! Metrics command: classify a timecourse and reduce it to summary metrics.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use timecourse_io::{Timecourse, read_csv};
use timecourse_metrics::{Metric, MetricConfig, MetricSet, compute_metrics};

use crate::cli::RunArgs;
use crate::config::TimecourseConfig;
use crate::convert;
use crate::output::write_json;

/// JSON report of the computed metrics.
///
/// `metrics` holds the selected, defined metrics by name; `vector` is the
/// fixed-order vector with `null` for the rest.
#[derive(Debug, Serialize)]
pub struct MetricsReport {
    pub label: String,
    pub sensitivity: f64,
    pub metrics: MetricSet,
    pub vector: [f64; Metric::COUNT],
}

/// Run the metrics pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("metrics").entered();
    let config = TimecourseConfig::load(args.config.as_deref())?;
    let csv_cfg = convert::build_csv_config(&config.input)?;
    let metric_cfg =
        convert::build_metric_config(&config.peaks, &config.metrics, args.sensitivity)?;

    info!(path = %args.input.display(), "reading timecourse");
    let tc = read_csv(&args.input, &csv_cfg)
        .with_context(|| format!("failed to read CSV: {}", args.input.display()))?;

    let report = summarize(&tc, &metric_cfg)?;
    write_json(&report, args.output.as_deref())
}

/// Computes the configured metrics of `tc`.
pub fn summarize(tc: &Timecourse, config: &MetricConfig) -> Result<MetricsReport> {
    let result = compute_metrics(tc.values(), tc.time(), config)
        .with_context(|| format!("failed to compute metrics for '{}'", tc.label()))?;
    info!(
        used = result.values().len(),
        peaks = result.classification().peaks().len(),
        "metrics computed"
    );

    let metrics = result.metrics().clone();
    Ok(MetricsReport {
        label: tc.label().to_string(),
        sensitivity: config.peak_config().sensitivity(),
        vector: metrics.to_array(),
        metrics,
    })
}
