//! Euclidean tours.
//!
//! Cities, tour energy (total cyclic length) and the 2-opt neighbor
//! move with its O(1) energy delta. These are the primitives both
//! annealing drivers are built on.

mod energy;
mod operators;
mod types;

pub use energy::{distance, is_permutation, tour_length};
pub use operators::{
    is_full_reversal, random_segment, two_opt_delta, two_opt_move, two_opt_move_at,
    TwoOptMove,
};
pub use types::{validate_cities, City, MIN_CITIES};
