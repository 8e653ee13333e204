use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level timecourse configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimecourseConfig {
    /// Peak classification settings.
    #[serde(default)]
    pub peaks: PeaksToml,

    /// CSV input settings.
    #[serde(default)]
    pub input: InputToml,

    /// Metric selection.
    #[serde(default)]
    pub metrics: MetricsToml,
}

impl TimecourseConfig {
    /// Reads a config file, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeaksToml {
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
}

impl Default for PeaksToml {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
        }
    }
}

fn default_sensitivity() -> f64 {
    timecourse_peaks::PeakConfig::DEFAULT_SENSITIVITY
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    #[serde(default = "default_time_column")]
    pub time_column: String,
    #[serde(default = "default_value_column")]
    pub value_column: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            time_column: default_time_column(),
            value_column: default_value_column(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_time_column() -> String {
    "time".to_string()
}
fn default_value_column() -> String {
    "value".to_string()
}
fn default_delimiter() -> String {
    ",".to_string()
}

/// One switch per metric; all on unless disabled.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsToml {
    #[serde(default = "default_true")]
    pub mean: bool,
    #[serde(default = "default_true")]
    pub auc: bool,
    #[serde(default = "default_true")]
    pub max: bool,
    #[serde(default = "default_true")]
    pub max_time: bool,
    #[serde(default = "default_true")]
    pub equilibrium: bool,
    #[serde(default = "default_true")]
    pub derivative: bool,
    #[serde(default = "default_true")]
    pub data_points: bool,
    #[serde(default = "default_true")]
    pub peak_count: bool,
    #[serde(default = "default_true")]
    pub peak_time: bool,
    #[serde(default = "default_true")]
    pub peak_auc: bool,
    #[serde(default = "default_true")]
    pub activation_slope: bool,
    #[serde(default = "default_true")]
    pub decay_rate: bool,
}

impl Default for MetricsToml {
    fn default() -> Self {
        Self {
            mean: true,
            auc: true,
            max: true,
            max_time: true,
            equilibrium: true,
            derivative: true,
            data_points: true,
            peak_count: true,
            peak_time: true,
            peak_auc: true,
            activation_slope: true,
            decay_rate: true,
        }
    }
}

fn default_true() -> bool {
    true
}
