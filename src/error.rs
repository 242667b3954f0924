//! Error types for tsp-anneal.

use thiserror::Error;

/// Result type alias for annealing operations.
pub type TspResult<T> = Result<T, TspError>;

/// Errors reported before or during an annealing run.
///
/// Degenerate sampling during temperature estimation and a near-zero
/// initial temperature are recovered locally and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Not enough cities to form a tour.
    #[error("need at least {required} cities, got {found}")]
    TooFewCities {
        /// Number of cities supplied.
        found: usize,
        /// Minimum number accepted.
        required: usize,
    },

    /// A city coordinate is NaN or infinite.
    #[error("city {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending city.
        index: usize,
    },

    /// Coordinates are finite but spread so far apart that distance sums
    /// overflow `f64`.
    #[error("coordinate span {span:e} overflows tour lengths")]
    CoordinateOverflow {
        /// Diagonal of the cities' bounding box (may be infinite).
        span: f64,
    },

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the problem.
        message: String,
    },

    /// Cached energy diverged from the recomputed tour length.
    #[error(
        "energy drift at iteration {iteration}: cached {cached:.9}, recomputed {recomputed:.9} (tolerance {tolerance:.3e})"
    )]
    EnergyDrift {
        /// Iteration at which the check failed.
        iteration: usize,
        /// Incrementally maintained energy.
        cached: f64,
        /// Energy recomputed from scratch.
        recomputed: f64,
        /// Relative tolerance that was exceeded.
        tolerance: f64,
    },
}

impl TspError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TspError::Config {
            message: message.into(),
        }
    }
}
