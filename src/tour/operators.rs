//! 2-opt neighborhood for closed tours.
//!
//! A 2-opt move reverses the tour segment at positions `[i, j]`. Of the
//! tour's edges only two change: `(a, b)` and `(c, d)` are replaced by
//! `(a, c)` and `(b, d)`, where `a` precedes position `i` and `d`
//! follows position `j` (both wrapping around the cycle). The energy
//! delta is therefore computable in O(1) from four distances.
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

use rand::Rng;

use super::energy::distance;
use super::types::City;

/// A neighboring tour together with its energy change.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptMove {
    /// The tour after reversal.
    pub tour: Vec<usize>,
    /// `tour_length(tour) - tour_length(input)`.
    pub delta: f64,
    /// First reversed position.
    pub i: usize,
    /// Last reversed position (inclusive).
    pub j: usize,
}

/// Whether reversing positions `[i, j]` of an `n`-city tour reverses the
/// whole sequence.
pub fn is_full_reversal(n: usize, i: usize, j: usize) -> bool {
    i == 0 && j + 1 == n
}

/// Draws `i` in `[0, n-2]`, then `j` in `[i+1, n-1]`.
///
/// # Panics
/// Panics if `n < 2`.
pub fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "2-opt needs at least two positions");
    let i = rng.random_range(0..=n - 2);
    let j = rng.random_range(i + 1..=n - 1);
    (i, j)
}

/// Edge-exchange delta for reversing `tour[i..=j]`.
///
/// `a` is the predecessor of position `i` (the last city when `i == 0`)
/// and `d` the successor of position `j` modulo `n`. For the whole-tour
/// case `i == 0, j == n-1` this formula does not describe the reversal;
/// [`two_opt_move_at`] handles that case separately.
pub fn two_opt_delta(tour: &[usize], cities: &[City], i: usize, j: usize) -> f64 {
    let n = tour.len();
    let a = if i > 0 { tour[i - 1] } else { tour[n - 1] };
    let b = tour[i];
    let c = tour[j];
    let d = tour[(j + 1) % n];

    let old_edges = distance(&cities[a], &cities[b]) + distance(&cities[c], &cities[d]);
    let new_edges = distance(&cities[a], &cities[c]) + distance(&cities[b], &cities[d]);
    new_edges - old_edges
}

/// Applies the 2-opt reversal of positions `[i, j]`.
///
/// Reversing the whole sequence traverses the same cycle backwards, so
/// its delta is exactly `0.0`.
///
/// # Panics
/// Panics unless `i < j < tour.len()`.
pub fn two_opt_move_at(tour: &[usize], cities: &[City], i: usize, j: usize) -> TwoOptMove {
    let n = tour.len();
    assert!(i < j && j < n, "invalid 2-opt segment [{i}, {j}] for n = {n}");

    let mut new_tour = tour.to_vec();
    new_tour[i..=j].reverse();

    let delta = if is_full_reversal(n, i, j) {
        0.0
    } else {
        two_opt_delta(tour, cities, i, j)
    };

    TwoOptMove {
        tour: new_tour,
        delta,
        i,
        j,
    }
}

/// Random 2-opt neighbor of `tour`.
///
/// Consumes exactly two draws from `rng` (see [`random_segment`]).
///
/// # Complexity
/// O(n) for the copy; the delta itself is O(1).
///
/// # Panics
/// Panics if `tour.len() < 2`.
pub fn two_opt_move<R: Rng>(tour: &[usize], cities: &[City], rng: &mut R) -> TwoOptMove {
    let (i, j) = random_segment(tour.len(), rng);
    two_opt_move_at(tour, cities, i, j)
}
