//! Adaptive geometric cooling.
//!
//! Temperature is multiplied by a factor `alpha` at every recool
//! checkpoint. Instead of a fixed `alpha`, the factor is picked from the
//! acceptance rate observed since the previous recool: too many
//! acceptances cool fast, too few cool slowly, which keeps the rate in
//! a middle band.

use crate::error::{TspError, TspResult};

/// Three-regime cooling policy keyed on the interval acceptance rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveCooling {
    /// Rates strictly above this use `fast_alpha`.
    pub high_acceptance: f64,
    /// Rates strictly below this use `slow_alpha`.
    pub low_acceptance: f64,
    /// Factor applied while the search moves too freely.
    pub fast_alpha: f64,
    /// Factor applied while the search is nearly frozen.
    pub slow_alpha: f64,
    /// Factor for rates in `[low_acceptance, high_acceptance]`.
    pub default_alpha: f64,
}

impl Default for AdaptiveCooling {
    fn default() -> Self {
        Self {
            high_acceptance: 0.8,
            low_acceptance: 0.2,
            fast_alpha: 0.98,
            slow_alpha: 0.999,
            default_alpha: 0.995,
        }
    }
}

impl AdaptiveCooling {
    /// Cooling factor for the given acceptance rate.
    pub fn alpha(&self, acceptance_rate: f64) -> f64 {
        if acceptance_rate > self.high_acceptance {
            self.fast_alpha
        } else if acceptance_rate < self.low_acceptance {
            self.slow_alpha
        } else {
            self.default_alpha
        }
    }

    /// Validates the policy parameters.
    pub fn validate(&self) -> TspResult<()> {
        for (name, alpha) in [
            ("fast_alpha", self.fast_alpha),
            ("slow_alpha", self.slow_alpha),
            ("default_alpha", self.default_alpha),
        ] {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(TspError::config(format!(
                    "{name} must be in (0, 1), got {alpha}"
                )));
            }
        }
        if self.low_acceptance > self.high_acceptance {
            return Err(TspError::config(format!(
                "low_acceptance ({}) must not exceed high_acceptance ({})",
                self.low_acceptance, self.high_acceptance
            )));
        }
        Ok(())
    }
}

/// Cooling factor under the default policy:
/// rate > 0.8 gives 0.98, rate < 0.2 gives 0.999, anything else 0.995.
pub fn adaptive_alpha(acceptance_rate: f64) -> f64 {
    AdaptiveCooling::default().alpha(acceptance_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_rate_cools_fast() {
        assert_eq!(adaptive_alpha(0.81 + 1e-9), 0.98);
        assert_eq!(adaptive_alpha(1.0), 0.98);
    }

    #[test]
    fn test_low_rate_cools_slowly() {
        assert_eq!(adaptive_alpha(0.19 - 1e-9), 0.999);
        assert_eq!(adaptive_alpha(0.0), 0.999);
    }

    #[test]
    fn test_middle_band_and_boundaries() {
        for rate in [0.2, 0.35, 0.5, 0.8] {
            assert_eq!(adaptive_alpha(rate), 0.995, "rate {rate}");
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = AdaptiveCooling {
            high_acceptance: 0.6,
            low_acceptance: 0.4,
            fast_alpha: 0.9,
            slow_alpha: 0.99,
            default_alpha: 0.95,
        };
        assert_eq!(policy.alpha(0.7), 0.9);
        assert_eq!(policy.alpha(0.3), 0.99);
        assert_eq!(policy.alpha(0.5), 0.95);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let policy = AdaptiveCooling {
            fast_alpha: 1.5,
            ..AdaptiveCooling::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_band() {
        let policy = AdaptiveCooling {
            high_acceptance: 0.1,
            low_acceptance: 0.9,
            ..AdaptiveCooling::default()
        };
        assert!(policy.validate().is_err());
    }
}
