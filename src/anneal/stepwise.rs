//! Resumable annealing.
//!
//! [`StepwiseAnnealer`] runs the same iteration as
//! [`AnnealRunner`](super::AnnealRunner) but stops every
//! `checkpoint_interval` iterations and hands out a [`Checkpoint`].
//! The caller decides when to resume by asking for the next one, so a
//! renderer controls pacing (pause, resume, speed) simply by how often
//! it pulls. Nothing runs between calls.
//!
//! Within one iteration the order is: step, checkpoint capture, recool,
//! energy check, temperature-floor check. A checkpoint captured on the
//! iteration that crosses the floor is still delivered; the following
//! call returns `None`.

use rand::Rng;
use std::iter::FusedIterator;

use super::config::AnnealConfig;
use super::state::SearchState;
use super::types::{AnnealResult, Checkpoint, Termination};
use crate::error::TspResult;
use crate::random::{create_rng, entropy_rng, AnnealRng};
use crate::tour::{validate_cities, City};

/// Annealing run that suspends at fixed checkpoints.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::{AnnealConfig, StepwiseAnnealer};
/// use tsp_anneal::City;
///
/// let cities: Vec<City> = [(0, 0), (4, 0), (4, 3), (0, 3), (2, 5)]
///     .into_iter()
///     .map(City::from)
///     .collect();
/// let config = AnnealConfig::stepwise().with_max_iterations(5_000).with_seed(1);
/// let mut annealer = StepwiseAnnealer::new(&cities, config).unwrap();
///
/// while let Some(checkpoint) = annealer.next_checkpoint().unwrap() {
///     assert!(checkpoint.best_energy <= checkpoint.current_energy);
/// }
/// let result = annealer.finish();
/// assert!(result.iterations <= 5_000);
/// ```
#[derive(Debug)]
pub struct StepwiseAnnealer<'a, R: Rng = AnnealRng> {
    cities: &'a [City],
    config: AnnealConfig,
    rng: R,
    state: SearchState,
    termination: Option<Termination>,
}

impl<'a> StepwiseAnnealer<'a, AnnealRng> {
    /// Bootstraps a run seeded from `config.seed`.
    pub fn new(cities: &'a [City], config: AnnealConfig) -> TspResult<Self> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::with_rng(cities, config, rng)
    }
}

impl<'a, R: Rng> StepwiseAnnealer<'a, R> {
    /// Bootstraps a run drawing from `rng`; `config.seed` is ignored.
    ///
    /// Temperature estimation and the starting shuffle happen here, so
    /// the inputs are rejected before any iteration can be requested.
    pub fn with_rng(cities: &'a [City], config: AnnealConfig, mut rng: R) -> TspResult<Self> {
        config.validate()?;
        validate_cities(cities)?;

        let state = SearchState::bootstrap(cities, &config, &mut rng);
        Ok(Self {
            cities,
            config,
            rng,
            state,
            termination: None,
        })
    }

    /// Runs until the next checkpoint.
    ///
    /// Returns `Ok(None)` once the run has terminated. An energy-check
    /// failure ends the run and is returned once.
    pub fn next_checkpoint(&mut self) -> TspResult<Option<Checkpoint>> {
        while self.termination.is_none() {
            if self.state.iterations() >= self.config.max_iterations {
                self.termination = Some(Termination::IterationBudget);
                break;
            }

            let step = self.state.step(self.cities, &mut self.rng);

            let checkpoint = step
                .is_multiple_of(self.config.checkpoint_interval)
                .then(|| self.state.checkpoint());

            if step.is_multiple_of(self.config.recool_interval) {
                self.state.recool(&self.config.cooling);
            }

            if let Err(err) = self.state.verify_if_due(self.cities, &self.config) {
                self.termination = Some(Termination::Aborted);
                return Err(err);
            }

            if self.state.below_floor() {
                self.termination = Some(Termination::TemperatureFloor);
            }

            if checkpoint.is_some() {
                return Ok(checkpoint);
            }
        }
        Ok(None)
    }

    /// Stops the run; further calls yield nothing.
    pub fn close(&mut self) {
        if self.termination.is_none() {
            self.termination = Some(Termination::Cancelled);
        }
    }

    /// Consumes the annealer and returns the result so far.
    ///
    /// A run that has not terminated is reported as cancelled.
    pub fn finish(mut self) -> AnnealResult {
        self.close();
        let termination = self.termination.unwrap_or(Termination::Cancelled);
        self.state.into_result(termination)
    }

    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// Why the run stopped, if it has.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Iterations executed so far.
    pub fn iterations(&self) -> usize {
        self.state.iterations()
    }

    pub fn temperature(&self) -> f64 {
        self.state.temperature()
    }

    pub fn initial_temperature(&self) -> f64 {
        self.state.initial_temperature()
    }

    pub fn min_temperature(&self) -> f64 {
        self.state.min_temperature()
    }

    pub fn current_tour(&self) -> &[usize] {
        self.state.current_tour()
    }

    pub fn current_energy(&self) -> f64 {
        self.state.current_energy()
    }

    pub fn best_tour(&self) -> &[usize] {
        self.state.best_tour()
    }

    pub fn best_energy(&self) -> f64 {
        self.state.best_energy()
    }
}

impl<R: Rng> Iterator for StepwiseAnnealer<'_, R> {
    type Item = TspResult<Checkpoint>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_checkpoint().transpose()
    }
}

impl<R: Rng> FusedIterator for StepwiseAnnealer<'_, R> {}

/// Step-wise counterpart of [`anneal`](super::anneal) using the
/// step-wise defaults with the given budget.
///
/// # Errors
/// [`TspError::TooFewCities`](crate::TspError::TooFewCities) for fewer
/// than two cities.
pub fn anneal_stepwise<R: Rng>(
    cities: &[City],
    max_iterations: usize,
    rng: R,
) -> TspResult<StepwiseAnnealer<'_, R>> {
    let config = AnnealConfig::stepwise().with_max_iterations(max_iterations);
    StepwiseAnnealer::with_rng(cities, config, rng)
}
