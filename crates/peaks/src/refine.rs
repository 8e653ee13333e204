//! Significance refinement of raw peak candidates.
//!
//! Candidates are visited from the highest value down. Each one scans
//! outward on both sides until it either clears the minimum jump
//! (`sensitivity * (max - min)`), meets a higher peak, or reaches the
//! series boundary. Lower peaks passed on the way are demoted. Afterwards
//! the lowest point between each pair of surviving peaks becomes the
//! valley separating them.

use tracing::{debug, trace};

use crate::classification::Classification;
use crate::config::validate_sensitivity;
use crate::ensure_finite;
use crate::error::PeakError;
use crate::state::Extremum;

/// Minimum series length for refinement (two boundaries and an interior point).
pub const MIN_REFINE_LEN: usize = 3;

/// Scan direction away from a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Boundary index the scan ends at.
    fn boundary(self, n: usize) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => n - 1,
        }
    }

    fn step(self, index: usize) -> usize {
        match self {
            Self::Left => index - 1,
            Self::Right => index + 1,
        }
    }

    /// Interior positions whose peaks neither block nor get demoted by a scan.
    ///
    /// Only the left side has one: the neighbour of the first sample.
    fn is_exempt(self, index: usize) -> bool {
        self == Self::Left && index == 1
    }
}

/// Outcome of a one-sided scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Significant,
    Insignificant,
}

/// Keeps only significant peaks from `raw` and re-derives valleys.
///
/// `raw` is normally the output of [`detect_raw`](crate::detect_raw), but any
/// classification whose endpoints are peaks or valleys is accepted, including
/// a previous output of this function (refinement is idempotent).
///
/// The input is never modified; a new classification is returned.
///
/// # Errors
///
/// - [`PeakError::InvalidSensitivity`] if `sensitivity` is not in `[0, 1]`.
/// - [`PeakError::LengthMismatch`] if `raw` and `series` differ in length.
/// - [`PeakError::InsufficientData`] for fewer than three samples.
/// - [`PeakError::NonFiniteData`] if any sample is NaN or infinite.
/// - [`PeakError::UnknownState`] if a scan reaches an insignificant endpoint.
#[tracing::instrument(skip(series, raw), fields(n = series.len()))]
pub fn refine(
    series: &[f64],
    raw: &Classification,
    sensitivity: f64,
) -> Result<Classification, PeakError> {
    validate_sensitivity(sensitivity)?;
    let n = series.len();
    if raw.len() != n {
        return Err(PeakError::LengthMismatch {
            series_len: n,
            classification_len: raw.len(),
        });
    }
    if n < MIN_REFINE_LEN {
        return Err(PeakError::InsufficientData {
            n,
            min: MIN_REFINE_LEN,
        });
    }
    ensure_finite(series)?;

    let min_jump = sensitivity * timecourse_stats::range(series);
    debug!(min_jump, "refining peak candidates");

    let mut marks = raw.clone();

    // Values never change, so the rank order is fixed for the whole pass.
    // Candidates demoted along the way are skipped when their turn comes.
    for p in timecourse_stats::rank_descending(series) {
        if p == 0 || p == n - 1 || !marks.is_peak(p) {
            continue;
        }
        let left = scan(series, &mut marks, p, Side::Left, min_jump)?;
        let right = scan(series, &mut marks, p, Side::Right, min_jump)?;
        trace!(index = p, ?left, ?right, kept = marks.is_peak(p), "candidate resolved");
    }

    derive_valleys(series, &mut marks);
    Ok(marks)
}

/// Scans from candidate `p` toward one boundary.
///
/// Demotes lower peaks passed on the way, and demotes `p` itself if a
/// higher (or equal) peak or a boundary peak is met before the jump clears.
fn scan(
    series: &[f64],
    marks: &mut Classification,
    p: usize,
    side: Side,
    min_jump: f64,
) -> Result<Verdict, PeakError> {
    let boundary = side.boundary(series.len());
    let height = series[p];
    let mut q = p;

    loop {
        q = side.step(q);

        if height - series[q] > min_jump {
            return Ok(Verdict::Significant);
        }

        if q == boundary {
            let state = marks[q];
            return match state {
                Extremum::Valley => Ok(Verdict::Significant),
                Extremum::Peak => {
                    debug!(index = p, by = q, side = side.as_str(), "demoted by boundary peak");
                    marks.demote(p);
                    Ok(Verdict::Insignificant)
                }
                Extremum::Insignificant => Err(PeakError::UnknownState { index: q }),
            };
        }

        if marks.is_peak(q) && !side.is_exempt(q) {
            if series[q] < height {
                debug!(index = q, by = p, side = side.as_str(), "demoted lower peak");
                marks.demote(q);
            } else {
                debug!(index = p, by = q, side = side.as_str(), "demoted by higher peak");
                marks.demote(p);
                return Ok(Verdict::Insignificant);
            }
        }
    }
}

/// Places one valley at the minimum between each pair of consecutive peaks.
///
/// Points before the first peak and after the last keep their state; the
/// endpoint already closes those runs.
fn derive_valleys(series: &[f64], marks: &mut Classification) {
    let peaks = marks.peaks();
    for pair in peaks.windows(2) {
        let (start, end) = (pair[0] + 1, pair[1]);
        if start >= end {
            continue;
        }
        for k in start..end {
            marks.demote(k);
        }
        if let Some(offset) = timecourse_stats::argmin(&series[start..end]) {
            marks.mark_valley(start + offset);
        }
    }
}
