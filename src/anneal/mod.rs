//! Simulated Annealing over 2-opt moves.
//!
//! Starts from a random tour and repeatedly proposes a 2-opt reversal,
//! accepting it by the Metropolis criterion. Both temperatures are
//! estimated from the instance; the temperature is multiplied at fixed
//! intervals by a factor chosen from the recent acceptance rate.
//!
//! Two drivers share one iteration implementation:
//!
//! - [`AnnealRunner`] / [`anneal`]: run to completion, return the best tour.
//! - [`StepwiseAnnealer`] / [`anneal_stepwise`]: suspend at every
//!   checkpoint and hand out a [`Checkpoint`] for external rendering.
//!
//! A run ends when the iteration budget is spent or the temperature falls
//! below the estimated minimum, whichever comes first.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod cooling;
mod runner;
mod state;
mod stepwise;
mod temperature;
mod types;

pub use config::AnnealConfig;
pub use cooling::{adaptive_alpha, AdaptiveCooling};
pub use runner::{anneal, AnnealRunner};
pub use stepwise::{anneal_stepwise, StepwiseAnnealer};
pub use temperature::{
    estimate_initial_temperature, estimate_min_temperature, initial_temperature,
    DEFAULT_SAMPLE_SIZE, FALLBACK_INITIAL_TEMPERATURE, INITIAL_ACCEPTANCE, MIN_TEMPERATURE_SCALE,
    TEMPERATURE_EPSILON, UNDERFLOW_TEMPERATURE,
};
pub use types::{AnnealResult, Checkpoint, Termination};
