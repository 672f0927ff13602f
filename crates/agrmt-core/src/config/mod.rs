//! Configuration system for agrmt.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod agreement_config;
pub mod defaults;
pub mod observability_config;

pub use agreement_config::AgreementConfig;
pub use observability_config::ObservabilityConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Levels accepted by `observability.log_level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`AGRMT_*`)
/// 2. Config file passed to [`AgrmtConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AgrmtConfig {
    pub agreement: AgreementConfig,
    pub observability: ObservabilityConfig,
}

impl AgrmtConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist, then apply `AGRMT_*` environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agreement.parallel_threshold == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "agreement.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let tolerance = self.agreement.weight_tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
            return Err(ConfigError::ValidationFailed {
                field: "agreement.weight_tolerance".to_string(),
                message: "must be between 0.0 and 1.0 (exclusive)".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AGRMT_PARALLEL_THRESHOLD") {
            if let Ok(v) = val.parse::<usize>() {
                self.agreement.parallel_threshold = v;
            }
        }
        if let Ok(val) = std::env::var("AGRMT_WEIGHT_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                self.agreement.weight_tolerance = v;
            }
        }
        if let Ok(val) = std::env::var("AGRMT_LOG_LEVEL") {
            self.observability.log_level = val.to_lowercase();
        }
    }
}
