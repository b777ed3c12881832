//! Runtime configuration loaded from TOML.

use crackers_core::{GameError, RangeBound, RestartPolicy, RestartTarget};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "CRACKERS_CONFIG";

/// Game configuration shared by every front end.
///
/// Every key is optional:
///
/// ```toml
/// default_max_n = 6
/// allowed_max_n = [4, 5, 6, 7]
/// columns = 8
/// restart_policy = "keep"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CrackersConfig {
    /// Range offered when the player makes no choice.
    #[serde(default = "default_max_n")]
    default_max_n: u32,

    /// Ranges a player may choose from.
    #[serde(default = "default_allowed_max_n")]
    allowed_max_n: Vec<u32>,

    /// Numbers per row when a card is printed.
    #[serde(default = "default_columns")]
    columns: usize,

    /// Whether restart keeps the chosen range or returns to `default_max_n`.
    #[serde(default)]
    restart_policy: RestartPolicy,
}

fn default_max_n() -> u32 {
    RangeBound::DEFAULT_BITS
}

fn default_allowed_max_n() -> Vec<u32> {
    RangeBound::ALLOWED.to_vec()
}

fn default_columns() -> usize {
    8
}

impl Default for CrackersConfig {
    fn default() -> Self {
        Self {
            default_max_n: default_max_n(),
            allowed_max_n: default_allowed_max_n(),
            columns: default_columns(),
            restart_policy: RestartPolicy::default(),
        }
    }
}

impl CrackersConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            default_max_n = config.default_max_n,
            columns = config.columns,
            policy = %config.restart_policy,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Resolves configuration: explicit path, then `CRACKERS_CONFIG`, then defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::from_file(path),
            _ => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks that the ranges and layout make sense together.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_max_n.is_empty() {
            return Err(ConfigError::new("allowed_max_n must not be empty"));
        }
        for &bits in &self.allowed_max_n {
            RangeBound::new(bits).map_err(|e| ConfigError::new(format!("allowed_max_n: {}", e)))?;
        }
        if !self.allowed_max_n.contains(&self.default_max_n) {
            return Err(ConfigError::new(format!(
                "default_max_n {} is not in allowed_max_n {:?}",
                self.default_max_n, self.allowed_max_n
            )));
        }
        if self.columns == 0 {
            return Err(ConfigError::new("columns must be at least 1"));
        }
        Ok(())
    }

    /// Returns the default range.
    pub fn default_bound(&self) -> Result<RangeBound, GameError> {
        RangeBound::from_allowed(self.default_max_n, &self.allowed_max_n)
    }

    /// Returns the restart policy paired with the configured default range.
    pub fn restart_target(&self) -> Result<RestartTarget, GameError> {
        Ok(RestartTarget::new(self.restart_policy, self.default_bound()?))
    }

    /// Resolves a player's choice against the allowed set, falling back to the default.
    #[instrument(skip(self))]
    pub fn resolve_bound(&self, requested: Option<u32>) -> Result<RangeBound, GameError> {
        match requested {
            Some(bits) => RangeBound::from_allowed(bits, &self.allowed_max_n),
            None => self.default_bound(),
        }
    }

    /// Returns the allowed ranges as bounds, smallest first.
    pub fn allowed_bounds(&self) -> Vec<RangeBound> {
        let mut bounds: Vec<RangeBound> = self
            .allowed_max_n
            .iter()
            .filter_map(|&bits| RangeBound::new(bits).ok())
            .collect();
        bounds.sort();
        bounds.dedup();
        bounds
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CrackersConfig::from_toml("").unwrap();
        assert_eq!(config, CrackersConfig::default());
        assert_eq!(config.default_bound().unwrap().bits(), 6);
    }

    #[test]
    fn test_reset_policy_parses() {
        let config = CrackersConfig::from_toml("restart_policy = \"reset\"").unwrap();
        assert_eq!(*config.restart_policy(), RestartPolicy::Reset);
    }

    #[test]
    fn test_default_outside_allowed_rejected() {
        let err = CrackersConfig::from_toml("default_max_n = 9").unwrap_err();
        assert!(err.message.contains("default_max_n 9"));
    }

    #[test]
    fn test_reset_targets_configured_default() {
        let toml = "allowed_max_n = [4, 5]\ndefault_max_n = 4\nrestart_policy = \"reset\"";
        let config = CrackersConfig::from_toml(toml).unwrap();
        let target = config.restart_target().unwrap();
        assert_eq!(target.policy(), RestartPolicy::Reset);
        assert_eq!(target.default_bound().bits(), 4);
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert!(CrackersConfig::from_toml("columns = 0").is_err());
    }

    #[test]
    fn test_resolve_bound_enforces_allowed() {
        let config = CrackersConfig::default();
        assert_eq!(config.resolve_bound(Some(7)).unwrap().bits(), 7);
        assert_eq!(config.resolve_bound(None).unwrap().bits(), 6);
        assert_eq!(
            config.resolve_bound(Some(10)),
            Err(GameError::InvalidRangeBound(10))
        );
    }
}
