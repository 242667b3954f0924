//! Seeded random sources.
//!
//! Every function that consumes randomness takes an explicit `&mut R`
//! where `R: Rng`. This module only builds the default generator and
//! the random starting permutation.
//!
//! `Pcg64` is used rather than `StdRng` because its output stream is
//! fixed across `rand` releases, so a seed reproduces the same run
//! bit-for-bit.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Default generator used by the runners.
pub type AnnealRng = Pcg64;

/// Creates a generator from a seed.
pub fn create_rng(seed: u64) -> AnnealRng {
    Pcg64::seed_from_u64(seed)
}

/// Creates a generator from OS entropy.
pub fn entropy_rng() -> AnnealRng {
    create_rng(rand::random())
}

/// Returns a uniformly shuffled permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    tour.shuffle(rng);
    tour
}
