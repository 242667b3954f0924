//! Blocking annealing loop.

use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::AnnealConfig;
use super::state::SearchState;
use super::types::{AnnealResult, Termination};
use crate::error::TspResult;
use crate::random::{create_rng, entropy_rng};
use crate::tour::{validate_cities, City};

/// Runs simulated annealing to completion.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs annealing with a generator seeded from `config.seed`.
    pub fn run(cities: &[City], config: &AnnealConfig) -> TspResult<AnnealResult> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs annealing with an optional cancellation token.
    ///
    /// The flag is polled before every iteration; a set flag ends the run
    /// with [`Termination::Cancelled`] and the best tour found so far.
    pub fn run_with_cancel(
        cities: &[City],
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<AnnealResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::drive(cities, config, &mut rng, cancel.as_deref())
    }

    /// Runs annealing drawing from a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        cities: &[City],
        config: &AnnealConfig,
        rng: &mut R,
    ) -> TspResult<AnnealResult> {
        Self::drive(cities, config, rng, None)
    }

    fn drive<R: Rng>(
        cities: &[City],
        config: &AnnealConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> TspResult<AnnealResult> {
        config.validate()?;
        validate_cities(cities)?;

        let mut state = SearchState::bootstrap(cities, config, rng);
        let mut termination = Termination::IterationBudget;

        while state.iterations() < config.max_iterations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                termination = Termination::Cancelled;
                break;
            }

            let step = state.step(cities, rng);

            if step.is_multiple_of(config.recool_interval) {
                state.recool(&config.cooling);
            }

            state.verify_if_due(cities, config)?;

            if state.below_floor() {
                termination = Termination::TemperatureFloor;
                break;
            }
        }

        Ok(state.into_result(termination))
    }
}

/// Anneals `cities` and returns the best tour with its length.
///
/// Uses the default configuration with the given budget; randomness is
/// drawn from `rng` only.
///
/// # Errors
/// [`TspError::TooFewCities`](crate::TspError::TooFewCities) for fewer
/// than two cities, before any permutation is built.
///
/// # Examples
///
/// ```
/// use tsp_anneal::{anneal, create_rng, City};
///
/// let cities: Vec<City> = [(0, 0), (0, 1), (1, 1), (1, 0)].into_iter().map(City::from).collect();
/// let (tour, length) = anneal(&cities, 20_000, false, &mut create_rng(7)).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert!((length - 4.0).abs() < 1e-9);
/// ```
pub fn anneal<R: Rng>(
    cities: &[City],
    max_iterations: usize,
    enable_log: bool,
    rng: &mut R,
) -> TspResult<(Vec<usize>, f64)> {
    let config = AnnealConfig::default()
        .with_max_iterations(max_iterations)
        .with_logging(enable_log);
    let result = AnnealRunner::run_with_rng(cities, &config, rng)?;
    Ok((result.best_tour, result.best_energy))
}
