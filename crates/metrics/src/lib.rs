//! Summary metrics over classified timecourses.
//!
//! [`compute_metrics`] classifies a timecourse with
//! [`timecourse_peaks::find_peaks`] and reduces it, together with its time
//! points, to the scalar metrics chosen in a [`MetricSelect`]. Peak metrics
//! refer to the *dominant* peak: the highest significant peak, flanked by the
//! nearest valley on each side (or the series end when there is none).
//!
//! # Example
//!
//! ```rust
//! use timecourse_metrics::{Metric, MetricConfig, compute_metrics};
//!
//! let time = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let values = [0.0, 4.0, 1.0, 0.5, 0.0];
//!
//! let result = compute_metrics(&values, &time, &MetricConfig::new()).unwrap();
//! assert_eq!(result.metrics().get(Metric::PeakTime), Some(1.0));
//! assert_eq!(result.metrics().get(Metric::Max), Some(4.0));
//! ```

mod config;
mod error;
mod metric;
mod reduce;
mod result;

pub use config::MetricConfig;
pub use error::MetricError;
pub use metric::{Metric, MetricSelect};
pub use reduce::{MIN_SAMPLES, compute_metrics};
pub use result::{MetricResult, MetricSet};
