//! Invariants of the classifier over seeded random series.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use timecourse_peaks::{Classification, Extremum, detect_raw, refine};

const SENSITIVITIES: [f64; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Random series of 3..=25 samples in [0, 3).
fn random_series(rng: &mut StdRng) -> Vec<f64> {
    let n = rng.random_range(3..=25);
    (0..n).map(|_| rng.random_range(0.0..3.0)).collect()
}

/// Random series on a coarse integer grid, so plateaus and ties are common.
fn random_plateau_series(rng: &mut StdRng) -> Vec<f64> {
    let n = rng.random_range(3..=15);
    (0..n).map(|_| rng.random_range(0..5) as f64).collect()
}

fn classify(series: &[f64], sensitivity: f64) -> Classification {
    let raw = detect_raw(series).expect("detect_raw failed");
    refine(series, &raw, sensitivity).expect("refine failed")
}

fn for_each_case(
    seed: u64,
    cases: usize,
    generate: fn(&mut StdRng) -> Vec<f64>,
    check: impl Fn(&[f64]),
) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..cases {
        let series = generate(&mut rng);
        check(&series);
    }
}

#[test]
fn refinement_is_idempotent() {
    let check = |series: &[f64]| {
        for s in SENSITIVITIES {
            let once = classify(series, s);
            let twice = refine(series, &once, s).unwrap();
            assert_eq!(once, twice, "series {series:?}, sensitivity {s}");
        }
    };
    for_each_case(1, 500, random_series, check);
    for_each_case(2, 500, random_plateau_series, check);
}

#[test]
fn endpoints_are_never_insignificant() {
    let check = |series: &[f64]| {
        for s in SENSITIVITIES {
            let marks = classify(series, s);
            assert!(marks[0].is_extremum(), "series {series:?}, sensitivity {s}");
            assert!(
                marks[series.len() - 1].is_extremum(),
                "series {series:?}, sensitivity {s}"
            );
        }
    };
    for_each_case(3, 500, random_series, check);
    for_each_case(4, 500, random_plateau_series, check);
}

#[test]
fn one_valley_at_the_minimum_between_consecutive_peaks() {
    let check = |series: &[f64]| {
        for s in SENSITIVITIES {
            let marks = classify(series, s);
            for pair in marks.peaks().windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(b - a >= 2, "adjacent peaks in {series:?} at {s}");

                let valleys: Vec<usize> =
                    (a + 1..b).filter(|&k| marks[k] == Extremum::Valley).collect();
                let mut lowest = a + 1;
                for k in a + 2..b {
                    if series[k] < series[lowest] {
                        lowest = k;
                    }
                }
                assert_eq!(valleys, vec![lowest], "series {series:?}, sensitivity {s}");
            }
        }
    };
    for_each_case(5, 500, random_series, check);
    for_each_case(6, 500, random_plateau_series, check);
}

#[test]
fn stricter_sensitivity_never_adds_peaks() {
    let check = |series: &[f64]| {
        let counts: Vec<usize> = SENSITIVITIES
            .iter()
            .map(|&s| classify(series, s).count(Extremum::Peak))
            .collect();
        for w in counts.windows(2) {
            assert!(w[1] <= w[0], "series {series:?}, counts {counts:?}");
        }
    };
    for_each_case(7, 500, random_series, check);
    for_each_case(8, 500, random_plateau_series, check);
}

#[test]
fn interior_peaks_exceed_surviving_neighbours() {
    // Continuous values only: on plateaus a peak may equal its valley.
    let check = |series: &[f64]| {
        let n = series.len();
        for s in SENSITIVITIES {
            let marks = classify(series, s);
            for p in marks.peaks().into_iter().filter(|&p| p > 0 && p < n - 1) {
                let left = (0..p).rev().find(|&k| marks[k].is_extremum());
                let right = (p + 1..n).find(|&k| marks[k].is_extremum());
                let (Some(l), Some(r)) = (left, right) else {
                    panic!("endpoint left unclassified in {series:?}");
                };
                assert!(
                    series[p] > series[l] && series[p] > series[r],
                    "series {series:?}, sensitivity {s}, peak {p}"
                );
            }
        }
    };
    for_each_case(9, 500, random_series, check);
}
