//! Significant peak and valley classification for short timecourses.
//!
//! A timecourse is classified in two passes: a raw pass that marks every
//! slope reversal from rising to falling, and a refinement pass that keeps
//! only peaks standing out from their neighbours by a fraction of the
//! series' own range, then places one valley between each pair of
//! surviving peaks.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  detect_raw   │────▶│    refine      │────▶│  Classification  │
//!  │  (reversals)  │     │ (significance) │     │  (peak/valley)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use timecourse_peaks::{Extremum, PeakConfig, find_peaks};
//!
//! let series = [0.0, 2.0, 0.5, 0.6, 3.0, 1.0];
//! let config = PeakConfig::new().with_sensitivity(0.2);
//!
//! let marks = find_peaks(&series, &config).unwrap();
//! assert_eq!(marks[4], Extremum::Peak);
//! assert_eq!(marks.peaks(), vec![1, 4]);
//! ```

pub mod classification;
pub mod config;
pub mod detect;
pub mod error;
pub mod refine;
pub mod state;

pub use classification::Classification;
pub use config::PeakConfig;
pub use detect::detect_raw;
pub use error::PeakError;
pub use refine::refine;
pub use state::Extremum;

/// Runs raw detection followed by significance refinement.
///
/// # Errors
///
/// Returns [`PeakError::InvalidSensitivity`] for an invalid configuration,
/// [`PeakError::InsufficientData`] for fewer than three samples, and
/// [`PeakError::NonFiniteData`] if the series contains NaN or infinity.
pub fn find_peaks(series: &[f64], config: &PeakConfig) -> Result<Classification, PeakError> {
    config.validate()?;
    let raw = detect_raw(series)?;
    refine(series, &raw, config.sensitivity())
}

/// Returns `Err` at the first non-finite sample.
pub(crate) fn ensure_finite(series: &[f64]) -> Result<(), PeakError> {
    match series.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(PeakError::NonFiniteData { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_peaks_runs_both_passes() {
        let series = [0.0, 2.0, 0.5, 0.6, 3.0, 1.0];
        let marks = find_peaks(&series, &PeakConfig::new().with_sensitivity(0.2)).unwrap();
        assert_eq!(
            marks.as_slice(),
            &[
                Extremum::Valley,
                Extremum::Peak,
                Extremum::Valley,
                Extremum::Insignificant,
                Extremum::Peak,
                Extremum::Valley,
            ]
        );
    }

    #[test]
    fn find_peaks_rejects_bad_config() {
        let err = find_peaks(&[0.0, 1.0, 0.0], &PeakConfig::new().with_sensitivity(-0.1))
            .unwrap_err();
        assert!(matches!(err, PeakError::InvalidSensitivity { .. }));
    }

    #[test]
    fn find_peaks_rejects_short_series() {
        let err = find_peaks(&[1.0, 2.0], &PeakConfig::new()).unwrap_err();
        assert!(matches!(err, PeakError::InsufficientData { n: 2, min: 3 }));
    }

    #[test]
    fn ensure_finite_reports_index() {
        assert!(ensure_finite(&[1.0, 2.0]).is_ok());
        assert!(matches!(
            ensure_finite(&[1.0, f64::INFINITY, f64::NAN]),
            Err(PeakError::NonFiniteData { index: 1 })
        ));
    }
}
