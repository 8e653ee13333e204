//! Raw extrema detection from slope reversals.
//!
//! Every interior point where the slope turns from rising to falling is
//! marked as a peak candidate. Falling-to-rising turns are not marked:
//! valleys come only from the endpoint rules here and from the valley pass
//! of [`refine`](crate::refine).

use tracing::trace;

use crate::classification::Classification;
use crate::ensure_finite;
use crate::error::PeakError;

/// Minimum series length for raw detection (one first difference).
pub const MIN_DETECT_LEN: usize = 2;

/// Direction of a first difference. Flat counts as rising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slope {
    Rising,
    Falling,
}

impl Slope {
    fn of(delta: f64) -> Self {
        if delta < 0.0 {
            Self::Falling
        } else {
            Self::Rising
        }
    }
}

/// Produces the unfiltered classification of `series`.
///
/// Endpoints are always classified: the first point is a valley if the
/// series rises out of it and a peak otherwise; the last point is a peak
/// if the series rises into it and a valley otherwise.
///
/// # Errors
///
/// Returns [`PeakError::InsufficientData`] for fewer than two samples and
/// [`PeakError::NonFiniteData`] if any sample is NaN or infinite.
pub fn detect_raw(series: &[f64]) -> Result<Classification, PeakError> {
    let n = series.len();
    if n < MIN_DETECT_LEN {
        return Err(PeakError::InsufficientData {
            n,
            min: MIN_DETECT_LEN,
        });
    }
    ensure_finite(series)?;

    let deltas = timecourse_stats::diff(series);
    let mut marks = Classification::insignificant(n);

    let mut last = Slope::of(deltas[0]);
    for (i, &delta) in deltas.iter().enumerate().skip(1) {
        let slope = Slope::of(delta);
        if slope != last {
            if slope == Slope::Falling {
                trace!(index = i, "raw peak candidate");
                marks.mark_peak(i);
            }
            last = slope;
        }
    }

    if deltas[0] > 0.0 {
        marks.mark_valley(0);
    } else {
        marks.mark_peak(0);
    }
    if deltas[n - 2] > 0.0 {
        marks.mark_peak(n - 1);
    } else {
        marks.mark_valley(n - 1);
    }

    Ok(marks)
}
