//! Temperature bootstrapping.
//!
//! Both temperatures are derived from the instance itself so the
//! schedule follows the problem's distance scale:
//!
//! - the initial temperature accepts an average worsening 2-opt move
//!   with probability 0.9 under the Metropolis rule `exp(-delta / T)`;
//! - the minimum temperature is a small fraction of the mean pairwise
//!   city distance.
//!
//! # References
//!
//! - Ben-Ameur (2004), "Computing the Initial Temperature of Simulated Annealing"

use rand::Rng;

use crate::random::random_tour;
use crate::tour::{distance, random_segment, two_opt_delta, City};

/// Number of sampled moves used by [`estimate_initial_temperature`].
pub const DEFAULT_SAMPLE_SIZE: usize = 200;

/// Acceptance probability targeted for an average worsening move.
pub const INITIAL_ACCEPTANCE: f64 = 0.9;

/// Returned when no sampled move was worsening.
pub const FALLBACK_INITIAL_TEMPERATURE: f64 = 10.0;

/// Initial temperatures below this are replaced by [`UNDERFLOW_TEMPERATURE`].
pub const TEMPERATURE_EPSILON: f64 = 1e-6;

/// Substitute for a near-zero initial temperature.
pub const UNDERFLOW_TEMPERATURE: f64 = 1.0;

/// Fraction of the mean pairwise distance used as stopping temperature.
pub const MIN_TEMPERATURE_SCALE: f64 = 1e-3;

/// Estimates the starting temperature from sampled 2-opt deltas.
///
/// Builds one shuffled base tour, evaluates `sample_size` random segment
/// reversals on it (the base tour is never modified) and averages the
/// positive deltas. Returns `-mean / ln(0.9)`, or
/// [`FALLBACK_INITIAL_TEMPERATURE`] when no positive delta was seen.
///
/// Draw order: one shuffle, then `(i, j)` per sample.
///
/// # Panics
/// Panics if `cities.len() < 2`.
pub fn estimate_initial_temperature<R: Rng>(
    cities: &[City],
    sample_size: usize,
    rng: &mut R,
) -> f64 {
    let n = cities.len();
    let base = random_tour(n, rng);

    let mut sum = 0.0;
    let mut count = 0usize;
    for _ in 0..sample_size {
        let (i, j) = random_segment(n, rng);
        let delta = two_opt_delta(&base, cities, i, j);
        if delta > 0.0 {
            sum += delta;
            count += 1;
        }
    }

    if count == 0 {
        return FALLBACK_INITIAL_TEMPERATURE;
    }

    let avg_delta = sum / count as f64;
    -avg_delta / INITIAL_ACCEPTANCE.ln()
}

/// [`estimate_initial_temperature`] with the near-zero guard applied.
pub fn initial_temperature<R: Rng>(cities: &[City], sample_size: usize, rng: &mut R) -> f64 {
    let t = estimate_initial_temperature(cities, sample_size, rng);
    if t < TEMPERATURE_EPSILON {
        UNDERFLOW_TEMPERATURE
    } else {
        t
    }
}

/// Stopping temperature: mean distance over all unordered city pairs,
/// scaled by [`MIN_TEMPERATURE_SCALE`].
///
/// Returns `0.0` when there are fewer than two cities.
///
/// # Complexity
/// O(n²)
pub fn estimate_min_temperature(cities: &[City]) -> f64 {
    let n = cities.len();
    let mut sum = 0.0;
    let mut pairs = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            sum += distance(&cities[i], &cities[j]);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return 0.0;
    }
    sum / pairs as f64 * MIN_TEMPERATURE_SCALE
}
