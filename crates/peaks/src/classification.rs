//! Index-aligned classification of a series.

use std::ops::Index;

use crate::state::Extremum;

/// One [`Extremum`] per sample, aligned by index with the classified series.
///
/// Mutation goes through named operations ([`mark_peak`](Self::mark_peak),
/// [`mark_valley`](Self::mark_valley), [`demote`](Self::demote)) so every
/// state change is visible at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    marks: Vec<Extremum>,
}

impl Classification {
    /// Creates a classification of `n` insignificant points.
    pub fn insignificant(n: usize) -> Self {
        Self {
            marks: vec![Extremum::Insignificant; n],
        }
    }

    /// Wraps an existing sequence of states.
    pub fn new(marks: Vec<Extremum>) -> Self {
        Self { marks }
    }

    /// Number of classified points.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True if no points are classified.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// State at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Extremum> {
        self.marks.get(index).copied()
    }

    /// True if the point at `index` is a peak.
    pub fn is_peak(&self, index: usize) -> bool {
        self.get(index) == Some(Extremum::Peak)
    }

    /// Borrows the states as a slice.
    pub fn as_slice(&self) -> &[Extremum] {
        &self.marks
    }

    /// Iterates over the states in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Extremum> {
        self.marks.iter()
    }

    /// Indices holding `state`, ascending.
    pub fn indices_of(&self, state: Extremum) -> Vec<usize> {
        timecourse_stats::find(&self.marks, &state)
    }

    /// Indices of all peaks, ascending.
    pub fn peaks(&self) -> Vec<usize> {
        self.indices_of(Extremum::Peak)
    }

    /// Indices of all valleys, ascending.
    pub fn valleys(&self) -> Vec<usize> {
        self.indices_of(Extremum::Valley)
    }

    /// Number of points holding `state`.
    pub fn count(&self, state: Extremum) -> usize {
        self.marks.iter().filter(|&&m| m == state).count()
    }

    /// `1 / -1 / 0` markers, one per point.
    pub fn to_markers(&self) -> Vec<i8> {
        self.marks.iter().map(|m| m.as_marker()).collect()
    }

    /// Marks `index` as a peak.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn mark_peak(&mut self, index: usize) {
        self.marks[index] = Extremum::Peak;
    }

    /// Marks `index` as a valley.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn mark_valley(&mut self, index: usize) {
        self.marks[index] = Extremum::Valley;
    }

    /// Marks `index` as insignificant.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn demote(&mut self, index: usize) {
        self.marks[index] = Extremum::Insignificant;
    }

    /// Consumes the classification, returning the states.
    pub fn into_vec(self) -> Vec<Extremum> {
        self.marks
    }
}

impl Index<usize> for Classification {
    type Output = Extremum;

    fn index(&self, index: usize) -> &Extremum {
        &self.marks[index]
    }
}

impl From<Vec<Extremum>> for Classification {
    fn from(marks: Vec<Extremum>) -> Self {
        Self::new(marks)
    }
}

impl<'a> IntoIterator for &'a Classification {
    type Item = &'a Extremum;
    type IntoIter = std::slice::Iter<'a, Extremum>;

    fn into_iter(self) -> Self::IntoIter {
        self.marks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Extremum::{Insignificant as I, Peak as P, Valley as V};

    #[test]
    fn insignificant_constructor() {
        let c = Classification::insignificant(4);
        assert_eq!(c.len(), 4);
        assert_eq!(c.count(I), 4);
        assert!(c.peaks().is_empty());
    }

    #[test]
    fn empty() {
        let c = Classification::default();
        assert!(c.is_empty());
        assert_eq!(c.get(0), None);
        assert!(!c.is_peak(0));
    }

    #[test]
    fn named_mutations() {
        let mut c = Classification::insignificant(5);
        c.mark_peak(1);
        c.mark_peak(3);
        c.mark_valley(2);
        assert_eq!(c.as_slice(), &[I, P, V, P, I]);

        c.demote(3);
        assert_eq!(c.as_slice(), &[I, P, V, I, I]);
        assert!(c.is_peak(1));
        assert!(!c.is_peak(3));
    }

    #[test]
    fn indices_and_counts() {
        let c = Classification::from(vec![V, I, P, I, V, P]);
        assert_eq!(c.peaks(), vec![2, 5]);
        assert_eq!(c.valleys(), vec![0, 4]);
        assert_eq!(c.count(I), 2);
        assert_eq!(c[2], P);
    }

    #[test]
    fn markers() {
        let c = Classification::new(vec![V, I, P]);
        assert_eq!(c.to_markers(), vec![-1, 0, 1]);
        assert_eq!(c.into_vec(), vec![V, I, P]);
    }

    #[test]
    fn iteration() {
        let c = Classification::new(vec![P, V]);
        let collected: Vec<Extremum> = (&c).into_iter().copied().collect();
        assert_eq!(collected, vec![P, V]);
        assert_eq!(c.iter().count(), 2);
    }
}
