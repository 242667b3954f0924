//! Search state shared by both annealing drivers.
//!
//! One iteration:
//!
//! 1. count the attempt
//! 2. draw a 2-opt neighbor and its delta
//! 3. accept if `delta < 0`, else with probability `exp(-delta / T)`
//! 4. on acceptance, take the neighbor and add the delta to the cached energy
//! 5. if the cached energy beats the best, copy the current tour into best
//!
//! Recooling and termination are decided by the drivers.

use rand::Rng;

use super::config::AnnealConfig;
use super::cooling::AdaptiveCooling;
use super::temperature::{estimate_min_temperature, initial_temperature};
use super::types::{AnnealResult, Checkpoint, Termination};
use crate::error::{TspError, TspResult};
use crate::random::random_tour;
use crate::tour::{tour_length, two_opt_move, City};

#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    current: Vec<usize>,
    current_energy: f64,
    best: Vec<usize>,
    best_energy: f64,
    temperature: f64,
    initial_temperature: f64,
    min_temperature: f64,
    // Counters since the last recool.
    accepted: usize,
    attempted: usize,
    iteration: usize,
    accepted_moves: usize,
    improving_moves: usize,
    recools: usize,
    cost_history: Vec<f64>,
}

impl SearchState {
    /// Estimates both temperatures and draws the starting tour.
    ///
    /// Callers must have validated `cities`.
    pub fn bootstrap<R: Rng>(cities: &[City], config: &AnnealConfig, rng: &mut R) -> Self {
        let initial_temperature = initial_temperature(cities, config.sample_size, rng);
        let min_temperature = estimate_min_temperature(cities);

        if config.enable_log {
            log::info!(
                "anneal: bootstrap cities={} t_initial={initial_temperature} t_min={min_temperature}",
                cities.len()
            );
        }

        let current = random_tour(cities.len(), rng);
        let current_energy = tour_length(&current, cities);

        Self {
            best: current.clone(),
            best_energy: current_energy,
            current,
            current_energy,
            temperature: initial_temperature,
            initial_temperature,
            min_temperature,
            accepted: 0,
            attempted: 0,
            iteration: 0,
            accepted_moves: 0,
            improving_moves: 0,
            recools: 0,
            cost_history: vec![current_energy],
        }
    }

    /// Runs one iteration and returns its 0-based index.
    pub fn step<R: Rng>(&mut self, cities: &[City], rng: &mut R) -> usize {
        self.attempted += 1;

        let mv = two_opt_move(&self.current, cities, rng);

        // Metropolis acceptance criterion
        let accept = if mv.delta < 0.0 {
            self.improving_moves += 1;
            true
        } else {
            rng.random::<f64>() < (-mv.delta / self.temperature).exp()
        };

        if accept {
            self.current = mv.tour;
            self.current_energy += mv.delta;
            self.accepted += 1;
            self.accepted_moves += 1;
        }

        if self.current_energy < self.best_energy {
            self.best.clone_from(&self.current);
            self.best_energy = self.current_energy;
        }

        let index = self.iteration;
        self.iteration += 1;
        index
    }

    /// Multiplies the temperature by the policy's alpha for the interval
    /// acceptance rate and resets the interval counters.
    ///
    /// Returns the applied alpha, or `None` if nothing was attempted.
    pub fn recool(&mut self, cooling: &AdaptiveCooling) -> Option<f64> {
        if self.attempted == 0 {
            return None;
        }

        let rate = self.accepted as f64 / self.attempted as f64;
        let alpha = cooling.alpha(rate);
        self.temperature *= alpha;
        self.accepted = 0;
        self.attempted = 0;
        self.recools += 1;
        self.cost_history.push(self.best_energy);

        log::debug!(
            "anneal.recool: iteration={} rate={rate:.3} alpha={alpha} temperature={:.6e}",
            self.iteration,
            self.temperature
        );
        Some(alpha)
    }

    pub fn below_floor(&self) -> bool {
        self.temperature < self.min_temperature
    }

    /// Runs [`verify`](Self::verify) when the configured interval is due.
    pub fn verify_if_due(&self, cities: &[City], config: &AnnealConfig) -> TspResult<()> {
        if config.verify_interval > 0 && self.iteration.is_multiple_of(config.verify_interval) {
            self.verify(cities, config.drift_tolerance)
        } else {
            Ok(())
        }
    }

    /// Compares cached energies of the current and best tours against
    /// lengths recomputed from scratch.
    pub fn verify(&self, cities: &[City], tolerance: f64) -> TspResult<()> {
        for (tour, cached) in [
            (&self.current, self.current_energy),
            (&self.best, self.best_energy),
        ] {
            let recomputed = tour_length(tour, cities);
            if (cached - recomputed).abs() > tolerance * recomputed.abs().max(1.0) {
                return Err(TspError::EnergyDrift {
                    iteration: self.iteration,
                    cached,
                    recomputed,
                    tolerance,
                });
            }
        }
        Ok(())
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            iteration: self.iteration,
            current_tour: self.current.clone(),
            best_tour: self.best.clone(),
            current_energy: self.current_energy,
            best_energy: self.best_energy,
            temperature: self.temperature,
        }
    }

    pub fn iterations(&self) -> usize {
        self.iteration
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    pub fn min_temperature(&self) -> f64 {
        self.min_temperature
    }

    pub fn current_tour(&self) -> &[usize] {
        &self.current
    }

    pub fn current_energy(&self) -> f64 {
        self.current_energy
    }

    pub fn best_tour(&self) -> &[usize] {
        &self.best
    }

    pub fn best_energy(&self) -> f64 {
        self.best_energy
    }

    pub fn into_result(mut self, termination: Termination) -> AnnealResult {
        if self
            .cost_history
            .last()
            .is_none_or(|&last| (last - self.best_energy).abs() > 1e-15)
        {
            self.cost_history.push(self.best_energy);
        }

        log::debug!(
            "anneal: done termination={termination:?} iterations={} best={:.6} t={:.6e}",
            self.iteration,
            self.best_energy,
            self.temperature
        );

        AnnealResult {
            best_tour: self.best,
            best_energy: self.best_energy,
            iterations: self.iteration,
            initial_temperature: self.initial_temperature,
            min_temperature: self.min_temperature,
            final_temperature: self.temperature,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            recools: self.recools,
            termination,
            cost_history: self.cost_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, AnnealRng};
    use crate::tour::{is_permutation, random_segment};
    use rand::RngCore;

    /// Counts every word pulled from the wrapped generator.
    struct CountingRng {
        inner: AnnealRng,
        draws: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self {
                inner: create_rng(seed),
                draws: 0,
            }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dst);
        }
    }

    fn ring(n: usize) -> Vec<City> {
        (0..n)
            .map(|k| {
                let angle = k as f64 * std::f64::consts::TAU / n as f64;
                City::new(50.0 * angle.cos(), 50.0 * angle.sin())
            })
            .collect()
    }

    #[test]
    fn test_bootstrap_state() {
        let cities = ring(12);
        let state = SearchState::bootstrap(&cities, &AnnealConfig::default(), &mut create_rng(1));

        assert!(is_permutation(state.current_tour(), 12));
        assert_eq!(state.current_tour(), state.best_tour());
        assert_eq!(state.current_energy(), state.best_energy());
        assert!(state.initial_temperature() > state.min_temperature());
        assert_eq!(state.temperature(), state.initial_temperature());
        assert_eq!(state.iterations(), 0);
    }

    #[test]
    fn test_step_keeps_cache_consistent() {
        let cities = ring(20);
        let mut rng = create_rng(8);
        let mut state = SearchState::bootstrap(&cities, &AnnealConfig::default(), &mut rng);

        for k in 0..2_000 {
            assert_eq!(state.step(&cities, &mut rng), k);
            assert!(state.best_energy() <= state.current_energy());
        }
        assert!(state.verify(&cities, 1e-9).is_ok());
        assert!(is_permutation(state.current_tour(), 20));
        assert!(is_permutation(state.best_tour(), 20));
    }

    #[test]
    fn test_recool_resets_interval_counters() {
        let cities = ring(10);
        let mut rng = create_rng(3);
        let mut state = SearchState::bootstrap(&cities, &AnnealConfig::default(), &mut rng);
        let cooling = AdaptiveCooling::default();

        assert_eq!(state.recool(&cooling), None);

        for _ in 0..100 {
            state.step(&cities, &mut rng);
        }
        let t0 = state.temperature();
        let alpha = state.recool(&cooling).expect("attempted > 0");
        assert!((state.temperature() - t0 * alpha).abs() < 1e-15 * t0);
        assert_eq!((state.accepted, state.attempted), (0, 0));
        assert_eq!(state.recool(&cooling), None);
        assert_eq!(state.recools, 1);
    }

    #[test]
    fn test_verify_detects_drift() {
        let cities = ring(8);
        let mut state = SearchState::bootstrap(&cities, &AnnealConfig::default(), &mut create_rng(2));
        state.current_energy += 1.0;

        match state.verify(&cities, 1e-9) {
            Err(TspError::EnergyDrift { cached, recomputed, .. }) => {
                assert!((cached - recomputed - 1.0).abs() < 1e-9);
            }
            other => panic!("expected drift error, got {other:?}"),
        }
    }

    #[test]
    fn test_best_is_independent_copy() {
        let cities = ring(15);
        let mut rng = create_rng(21);
        let mut state = SearchState::bootstrap(&cities, &AnnealConfig::default(), &mut rng);

        for _ in 0..500 {
            state.step(&cities, &mut rng);
            let recomputed = tour_length(state.best_tour(), &cities);
            assert!((recomputed - state.best_energy()).abs() < 1e-9 * recomputed.max(1.0));
        }
    }

    #[test]
    fn test_bootstrap_draw_order() {
        // Estimation shuffle, one (i, j) per sample, then the starting
        // shuffle; nothing else touches the generator.
        let cities = ring(9);
        for sample_size in [0, 5, 40] {
            let config = AnnealConfig::default().with_sample_size(sample_size);
            let mut rng = CountingRng::new(17);
            let state = SearchState::bootstrap(&cities, &config, &mut rng);

            let mut replay = CountingRng::new(17);
            random_tour(cities.len(), &mut replay);
            for _ in 0..sample_size {
                random_segment(cities.len(), &mut replay);
            }
            let start = random_tour(cities.len(), &mut replay);

            assert_eq!(state.current_tour(), start.as_slice());
            assert_eq!(rng.draws, replay.draws, "sample_size {sample_size}");
            assert_eq!(rng.next_u64(), replay.next_u64());
        }
    }

    #[test]
    fn test_two_city_segments_take_one_draw_each() {
        let mut rng = CountingRng::new(3);
        for _ in 0..10 {
            assert_eq!(random_segment(2, &mut rng), (0, 1));
        }
        assert_eq!(rng.draws, 20);
    }

    #[test]
    fn test_full_reversal_step_draws_uniform() {
        let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
        let mut rng = CountingRng::new(4);
        let mut state = SearchState::bootstrap(&cities, &AnnealConfig::default(), &mut rng);

        let before = rng.draws;
        for _ in 0..3 {
            state.step(&cities, &mut rng);
        }
        // i, j and the acceptance uniform
        assert_eq!(rng.draws - before, 9);
        assert_eq!(state.accepted_moves, 3);
        assert_eq!(state.improving_moves, 0);
    }

    #[test]
    fn test_step_skips_uniform_for_improving_moves() {
        let cities = ring(8);
        let mut rng = CountingRng::new(6);
        let mut state = SearchState::bootstrap(&cities, &AnnealConfig::default(), &mut rng);

        let (mut improving, mut other) = (0, 0);
        for _ in 0..500 {
            let draws = rng.draws;
            let improving_before = state.improving_moves;
            state.step(&cities, &mut rng);

            if state.improving_moves > improving_before {
                assert_eq!(rng.draws - draws, 2);
                improving += 1;
            } else {
                assert_eq!(rng.draws - draws, 3);
                other += 1;
            }
        }
        assert!(improving > 0 && other > 0, "improving {improving}, other {other}");
    }
}
