//! Run outputs: checkpoints and final results.

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Temperature fell below the estimated minimum.
    TemperatureFloor,
    /// `max_iterations` were executed.
    IterationBudget,
    /// Stopped from outside: cancellation flag or `close()`.
    Cancelled,
    /// Stopped by a failed energy check.
    Aborted,
}

/// Progress snapshot handed out by the step-wise annealer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkpoint {
    /// Iterations executed so far.
    pub iteration: usize,
    /// Tour the search currently sits on.
    pub current_tour: Vec<usize>,
    /// Best tour found so far.
    pub best_tour: Vec<usize>,
    /// Cached length of `current_tour`.
    pub current_energy: f64,
    /// Length of `best_tour`.
    pub best_energy: f64,
    /// Temperature at the checkpoint, before any recool in the same
    /// iteration.
    pub temperature: f64,
}

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Best tour found.
    pub best_tour: Vec<usize>,

    /// Length of the best tour.
    pub best_energy: f64,

    /// Total iterations executed.
    pub iterations: usize,

    /// Estimated starting temperature (after the near-zero guard).
    pub initial_temperature: f64,

    /// Estimated stopping temperature.
    pub min_temperature: f64,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Accepted moves over the whole run, including improvements.
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,

    /// Number of recools performed.
    pub recools: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best energy at the start and after every recool.
    pub cost_history: Vec<f64>,
}
