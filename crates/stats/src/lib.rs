//! Numeric helper functions for timecourse analysis.

use std::cmp::Ordering;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Area under the curve by the trapezoidal rule.
///
/// `time` and `values` are paired by index; if the lengths differ, the
/// shorter one bounds the sum. Returns 0.0 for fewer than two pairs.
pub fn trapz(time: &[f64], values: &[f64]) -> f64 {
    let n = time.len().min(values.len());
    (1..n)
        .map(|i| (time[i] - time[i - 1]) * (values[i] + values[i - 1]) / 2.0)
        .sum()
}

/// First difference: `out[i] = data[i + 1] - data[i]`.
///
/// Returns an empty vector for fewer than two elements.
pub fn diff(data: &[f64]) -> Vec<f64> {
    data.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Indices of all elements equal to `value`, in ascending order.
pub fn find<T: PartialEq>(data: &[T], value: &T) -> Vec<usize> {
    data.iter()
        .enumerate()
        .filter(|(_, x)| *x == value)
        .map(|(i, _)| i)
        .collect()
}

/// Indices that sort `data` ascending. Stable: equal values keep index order.
///
/// NaN compares as equal to everything, so it does not move relative to
/// its neighbours in the input.
pub fn argsort(data: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..data.len()).collect();
    idx.sort_by(|&a, &b| data[a].partial_cmp(&data[b]).unwrap_or(Ordering::Equal));
    idx
}

/// Indices ordered by value descending, ties broken by ascending index.
pub fn rank_descending(data: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..data.len()).collect();
    idx.sort_by(|&a, &b| data[b].partial_cmp(&data[a]).unwrap_or(Ordering::Equal));
    idx
}

/// Index of the smallest value (first occurrence). `None` if empty.
pub fn argmin(data: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &x) in data.iter().enumerate() {
        match best {
            Some(b) if x >= data[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Index of the largest value (first occurrence). `None` if empty.
pub fn argmax(data: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &x) in data.iter().enumerate() {
        match best {
            Some(b) if x <= data[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Max minus min. Returns 0.0 if empty.
pub fn range(data: &[f64]) -> f64 {
    match (argmin(data), argmax(data)) {
        (Some(lo), Some(hi)) => data[hi] - data[lo],
        _ => 0.0,
    }
}
