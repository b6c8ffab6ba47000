//! Decision orchestration configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::decision::ProfileScaling;

/// Candidate selection and profile scaling
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DecisionConfig {
    /// Forwarders ranked when no explicit subset is given (top N by shipment count)
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,

    /// Multiplier applied to cost per kg
    #[serde(default = "default_cost_scale")]
    pub cost_scale: f64,

    /// Multiplier applied to average transit days
    #[serde(default = "default_transit_scale")]
    pub transit_scale: f64,

    /// Ceiling for scaled cost and transit values
    #[serde(default = "default_scaled_value_cap")]
    pub scaled_value_cap: f64,

    /// Re-normalize AHP weights to sum to 1 before ranking
    #[serde(default = "default_normalize_weights")]
    pub normalize_weights: bool,
}

impl DecisionConfig {
    /// Validate decision configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.candidate_limit == 0 {
            return Err(ValidationError::InvalidCandidateLimit);
        }
        for (name, value) in [
            ("cost_scale", self.cost_scale),
            ("transit_scale", self.transit_scale),
            ("scaled_value_cap", self.scaled_value_cap),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidScale { name, value });
            }
        }
        Ok(())
    }

    pub fn scaling(&self) -> ProfileScaling {
        ProfileScaling {
            cost_scale: self.cost_scale,
            transit_scale: self.transit_scale,
            cap: self.scaled_value_cap,
        }
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            candidate_limit: default_candidate_limit(),
            cost_scale: default_cost_scale(),
            transit_scale: default_transit_scale(),
            scaled_value_cap: default_scaled_value_cap(),
            normalize_weights: default_normalize_weights(),
        }
    }
}

fn default_candidate_limit() -> usize {
    8
}

fn default_cost_scale() -> f64 {
    10.0
}

fn default_transit_scale() -> f64 {
    5.0
}

fn default_scaled_value_cap() -> f64 {
    100.0
}

fn default_normalize_weights() -> bool {
    true
}
