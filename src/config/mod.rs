//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DEEPCAL` prefix and nested values use double underscores as separators.
//! Every field has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use deepcal_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ranking up to {} forwarders", config.decision.candidate_limit);
//! ```

mod ahp;
mod decision;
mod error;

pub use ahp::AhpConfig;
pub use decision::DecisionConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix
const ENV_PREFIX: &str = "DEEPCAL";

/// Root engine configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Weight solver settings
    #[serde(default)]
    pub ahp: AhpConfig,

    /// Candidate selection and scaling settings
    #[serde(default)]
    pub decision: DecisionConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DEEPCAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DEEPCAL__AHP__MAX_ITERATIONS=200` -> `ahp.max_iterations = 200`
    /// - `DEEPCAL__DECISION__CANDIDATE_LIMIT=5` -> `decision.candidate_limit = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The format is inferred from the extension (`.toml`, `.yaml`, `.json`).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ahp.validate()?;
        self.decision.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("DEEPCAL__AHP__MAX_ITERATIONS");
        env::remove_var("DEEPCAL__AHP__CONSISTENCY_THRESHOLD");
        env::remove_var("DEEPCAL__DECISION__CANDIDATE_LIMIT");
        env::remove_var("DEEPCAL__DECISION__NORMALIZE_WEIGHTS");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = EngineConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DEEPCAL__AHP__MAX_ITERATIONS", "250");
        env::set_var("DEEPCAL__DECISION__CANDIDATE_LIMIT", "5");
        env::set_var("DEEPCAL__DECISION__NORMALIZE_WEIGHTS", "false");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ahp.max_iterations, 250);
        assert_eq!(config.ahp.consistency_threshold, 0.1);
        assert_eq!(config.decision.candidate_limit, 5);
        assert!(!config.decision.normalize_weights);
    }

    #[test]
    fn test_load_from_toml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[ahp]\nconsistency_threshold = 0.2\n\n[decision]\ncost_scale = 12.5"
        )
        .unwrap();

        let config = EngineConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.ahp.consistency_threshold, 0.2);
        assert_eq!(config.ahp.max_iterations, 100);
        assert_eq!(config.decision.cost_scale, 12.5);
        assert_eq!(config.decision.transit_scale, 5.0);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DEEPCAL__AHP__CONSISTENCY_THRESHOLD", "0.05");

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[ahp]\nconsistency_threshold = 0.2").unwrap();

        let result = EngineConfig::load_from_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().ahp.consistency_threshold, 0.05);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = EngineConfig::load_from_file("/nonexistent/deepcal.toml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let mut config = EngineConfig::default();
        config.decision.candidate_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCandidateLimit)
        ));
    }
}
