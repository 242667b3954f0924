//! Euclidean Traveling Salesman Problem by simulated annealing.
//!
//! Searches closed tours over a set of 2D cities with 2-opt segment
//! reversals, accepting worsening moves with a temperature-controlled
//! probability to escape local minima.
//!
//! - **Tours** ([`tour`]): cities, tour length, the 2-opt move with its
//!   O(1) energy delta.
//! - **Annealing** ([`anneal`](mod@anneal)): temperature estimation,
//!   adaptive cooling, and two drivers over one shared iteration: a
//!   blocking runner and a resumable step-wise annealer for renderers.
//! - **Randomness** ([`random`]): every draw comes from an explicit,
//!   seedable generator, so a seed reproduces a run bit-for-bit.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::anneal::{AnnealConfig, AnnealRunner};
//! use tsp_anneal::City;
//!
//! let cities: Vec<City> = [(0, 0), (0, 1), (1, 1), (1, 0)]
//!     .into_iter()
//!     .map(City::from)
//!     .collect();
//! let result = AnnealRunner::run(&cities, &AnnealConfig::default().with_seed(42)).unwrap();
//! assert!(result.best_energy <= 4.01);
//! ```
//!
//! Single-threaded; presentation and city generation are left to callers.

pub mod anneal;
pub mod error;
pub mod random;
pub mod tour;

pub use anneal::{anneal, anneal_stepwise, AnnealConfig, AnnealResult, Checkpoint};
pub use error::{TspError, TspResult};
pub use random::{create_rng, AnnealRng};
pub use tour::{tour_length, two_opt_move, City};
