//! Classify command: label every time point of a timecourse.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span, warn};

use timecourse_io::{Timecourse, read_csv};
use timecourse_peaks::{PeakConfig, find_peaks};

use crate::cli::RunArgs;
use crate::config::TimecourseConfig;
use crate::convert;
use crate::output::write_json;

/// JSON report of a classification.
#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub label: String,
    pub sensitivity: f64,
    pub points: Vec<PointRecord>,
}

/// One classified time point. `index` is the row in the input file.
#[derive(Debug, Serialize)]
pub struct PointRecord {
    pub index: usize,
    pub time: f64,
    pub value: f64,
    pub class: &'static str,
}

/// Run the classify pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("classify").entered();
    let config = TimecourseConfig::load(args.config.as_deref())?;
    let csv_cfg = convert::build_csv_config(&config.input)?;
    let peak_cfg = convert::build_peak_config(&config.peaks, args.sensitivity)?;

    info!(path = %args.input.display(), "reading timecourse");
    let tc = read_csv(&args.input, &csv_cfg)
        .with_context(|| format!("failed to read CSV: {}", args.input.display()))?;

    let report = classify(&tc, &peak_cfg)?;
    write_json(&report, args.output.as_deref())
}

/// Classifies the present values of `tc`. Missing values are skipped.
pub fn classify(tc: &Timecourse, config: &PeakConfig) -> Result<ClassifyReport> {
    let present: Vec<usize> = (0..tc.len())
        .filter(|&i| tc.values()[i].is_finite())
        .collect();
    if present.len() < tc.len() {
        warn!(
            skipped = tc.len() - present.len(),
            "skipping missing values"
        );
    }
    if present.is_empty() {
        bail!("timecourse '{}' has no values", tc.label());
    }

    let series: Vec<f64> = present.iter().map(|&i| tc.values()[i]).collect();
    let marks = find_peaks(&series, config)
        .with_context(|| format!("failed to classify '{}'", tc.label()))?;
    info!(
        peaks = marks.peaks().len(),
        valleys = marks.valleys().len(),
        "classification complete"
    );

    let points = present
        .iter()
        .zip(marks.iter())
        .map(|(&i, state)| PointRecord {
            index: i,
            time: tc.time()[i],
            value: tc.values()[i],
            class: state.as_str(),
        })
        .collect();

    Ok(ClassifyReport {
        label: tc.label().to_string(),
        sensitivity: config.sensitivity(),
        points,
    })
}
