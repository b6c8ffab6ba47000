//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Consistency threshold must be in (0, 1], got {0}")]
    InvalidConsistencyThreshold(f64),

    #[error("AHP max_iterations must be at least 1")]
    InvalidMaxIterations,

    #[error("Candidate limit must be at least 1")]
    InvalidCandidateLimit,

    #[error("Scale '{name}' must be positive and finite, got {value}")]
    InvalidScale { name: &'static str, value: f64 },
}
