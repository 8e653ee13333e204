//! In-memory timecourse.

use crate::error::IoError;

/// A labelled timecourse: one value per time point.
///
/// Missing values are stored as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Timecourse {
    label: String,
    time: Vec<f64>,
    values: Vec<f64>,
}

impl Timecourse {
    /// Creates a timecourse, checking that `time` and `values` align.
    pub fn new(
        label: impl Into<String>,
        time: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, IoError> {
        if time.len() != values.len() {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "time has {} points but values has {}",
                    time.len(),
                    values.len()
                ),
            });
        }
        Ok(Self {
            label: label.into(),
            time,
            values,
        })
    }

    /// Name of the measured quantity (e.g. "AKT").
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time points.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Measured values, NaN where missing.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of time points.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True if there are no time points.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Number of missing values.
    pub fn n_missing(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_accessors() {
        let tc = Timecourse::new("JNK", vec![0.0, 1.0, 2.0], vec![1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(tc.label(), "JNK");
        assert_eq!(tc.len(), 3);
        assert!(!tc.is_empty());
        assert_eq!(tc.time(), &[0.0, 1.0, 2.0]);
        assert_eq!(tc.n_missing(), 1);
    }

    #[test]
    fn new_rejects_mismatch() {
        let err = Timecourse::new("x", vec![0.0], vec![]).unwrap_err();
        assert!(matches!(err, IoError::Validation { count: 1, .. }));
    }
}
