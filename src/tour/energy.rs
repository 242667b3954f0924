//! Distances and tour energy.

use super::types::City;

/// Euclidean distance between two cities.
#[inline]
pub fn distance(p: &City, q: &City) -> f64 {
    p.distance_to(q)
}

/// Total length of the closed tour: every consecutive pair plus the
/// edge from the last city back to the first.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `tour` references an index outside `cities`.
pub fn tour_length(tour: &[usize], cities: &[City]) -> f64 {
    let n = tour.len();
    let mut total = 0.0;
    for i in 0..n {
        total += distance(&cities[tour[i]], &cities[tour[(i + 1) % n]]);
    }
    total
}

/// Returns `true` if `tour` contains every index in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
