//! Annealing configuration.

use super::cooling::AdaptiveCooling;
use super::temperature::DEFAULT_SAMPLE_SIZE;
use crate::error::{TspError, TspResult};

/// Configuration shared by [`AnnealRunner`](super::AnnealRunner) and
/// [`StepwiseAnnealer`](super::StepwiseAnnealer).
///
/// Temperatures are not configured: both are estimated from the cities
/// at the start of every run.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::{AdaptiveCooling, AnnealConfig};
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(50_000)
///     .with_recool_interval(2_000)
///     .with_cooling(AdaptiveCooling::default())
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Hard iteration budget. The run may stop earlier at the
    /// temperature floor.
    pub max_iterations: usize,

    /// Iterations between recools. The interval acceptance counters are
    /// reset at every recool.
    pub recool_interval: usize,

    /// Iterations between checkpoints of the step-wise annealer.
    ///
    /// Ignored by the blocking runner.
    pub checkpoint_interval: usize,

    /// Number of sampled moves for initial-temperature estimation.
    pub sample_size: usize,

    /// Acceptance-rate driven cooling policy.
    pub cooling: AdaptiveCooling,

    /// Recompute the tour length from scratch every this many
    /// iterations and compare it with the cached energy. 0 = disabled.
    pub verify_interval: usize,

    /// Relative tolerance for the energy check.
    pub drift_tolerance: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Log the bootstrap temperatures at `info` level.
    pub enable_log: bool,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 150_000,
            recool_interval: 5_000,
            checkpoint_interval: 500,
            sample_size: DEFAULT_SAMPLE_SIZE,
            cooling: AdaptiveCooling::default(),
            verify_interval: 0,
            drift_tolerance: 1e-6,
            seed: None,
            enable_log: false,
        }
    }
}

impl AnnealConfig {
    /// Defaults for step-wise runs: a smaller budget and a recool at
    /// every checkpoint.
    pub fn stepwise() -> Self {
        Self {
            max_iterations: 100_000,
            recool_interval: 500,
            checkpoint_interval: 500,
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_recool_interval(mut self, n: usize) -> Self {
        self.recool_interval = n;
        self
    }

    pub fn with_checkpoint_interval(mut self, n: usize) -> Self {
        self.checkpoint_interval = n;
        self
    }

    pub fn with_sample_size(mut self, n: usize) -> Self {
        self.sample_size = n;
        self
    }

    pub fn with_cooling(mut self, cooling: AdaptiveCooling) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_verify_interval(mut self, n: usize) -> Self {
        self.verify_interval = n;
        self
    }

    pub fn with_drift_tolerance(mut self, tolerance: f64) -> Self {
        self.drift_tolerance = tolerance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_log = enable;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.recool_interval == 0 {
            return Err(TspError::config("recool_interval must be positive"));
        }
        if self.checkpoint_interval == 0 {
            return Err(TspError::config("checkpoint_interval must be positive"));
        }
        if !(self.drift_tolerance > 0.0) {
            return Err(TspError::config(format!(
                "drift_tolerance must be positive, got {}",
                self.drift_tolerance
            )));
        }
        self.cooling.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.max_iterations, 150_000);
        assert_eq!(config.recool_interval, 5_000);
        assert_eq!(config.sample_size, 200);
        assert_eq!(config.verify_interval, 0);
        assert!(config.seed.is_none());
        assert!(!config.enable_log);
    }

    #[test]
    fn test_stepwise_preset() {
        let config = AnnealConfig::stepwise();
        assert_eq!(config.max_iterations, 100_000);
        assert_eq!(config.recool_interval, 500);
        assert_eq!(config.checkpoint_interval, 500);
    }

    #[test]
    fn test_intervals_independent() {
        let config = AnnealConfig::stepwise()
            .with_checkpoint_interval(50)
            .with_recool_interval(5_000);
        assert_eq!(config.checkpoint_interval, 50);
        assert_eq!(config.recool_interval, 5_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
        assert!(AnnealConfig::stepwise().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_recool_interval() {
        let config = AnnealConfig::default().with_recool_interval(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_checkpoint_interval() {
        let config = AnnealConfig::default().with_checkpoint_interval(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_tolerance() {
        assert!(AnnealConfig::default()
            .with_drift_tolerance(0.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_drift_tolerance(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_cooling() {
        let cooling = AdaptiveCooling {
            slow_alpha: 1.0,
            ..AdaptiveCooling::default()
        };
        let config = AnnealConfig::default().with_cooling(cooling);
        assert!(config.validate().is_err());
    }
}
