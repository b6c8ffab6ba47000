//! AHP solver configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{AhpOptions, DEFAULT_CONSISTENCY_THRESHOLD, DEFAULT_MAX_ITERATIONS};

/// Weight solver tuning
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AhpConfig {
    /// Consistency ratio below which judgments are accepted
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Upper bound on power-method iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl AhpConfig {
    /// Validate AHP configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let threshold = self.consistency_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ValidationError::InvalidConsistencyThreshold(threshold));
        }
        if self.max_iterations == 0 {
            return Err(ValidationError::InvalidMaxIterations);
        }
        Ok(())
    }

    pub fn options(&self) -> AhpOptions {
        AhpOptions {
            consistency_threshold: self.consistency_threshold,
            max_iterations: self.max_iterations,
        }
    }
}

impl Default for AhpConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AhpConfig::default();
        assert_eq!(config.consistency_threshold, 0.1);
        assert_eq!(config.max_iterations, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        for threshold in [0.0, -0.1, 1.5, f64::NAN] {
            let config = AhpConfig {
                consistency_threshold: threshold,
                ..AhpConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ValidationError::InvalidConsistencyThreshold(_))
            ));
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        let config = AhpConfig {
            max_iterations: 0,
            ..AhpConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMaxIterations)
        ));
    }

    #[test]
    fn converts_to_solver_options() {
        let options = AhpConfig::default().options();
        assert_eq!(options, AhpOptions::default());
    }
}
