//! Configuration system for DoseCheck.
//!
//! Load review configuration from TOML or YAML files to control the
//! tolerance band, the initial site filter, and session seeding without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use dosecheck_config::ReviewConfig;
//!
//! let config = ReviewConfig::from_toml_str(r#"
//!     caution_fraction = 0.02
//!     site_filter = "Thorax"
//!     seed_defaults = true
//! "#).unwrap();
//!
//! assert_eq!(config.caution_fraction, 0.02);
//! assert_eq!(config.tolerance().unwrap().caution_fraction(), 0.02);
//! ```
//!
//! Use the defaults when the file is missing:
//!
//! ```
//! use dosecheck_config::ReviewConfig;
//!
//! let config = ReviewConfig::load("review.toml").unwrap_or_default();
//! assert_eq!(config.caution_fraction, 0.05);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dosecheck_core::{TolerancePolicy, ALL_SITES};


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Review session configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReviewConfig {
    /// Fraction of the limit treated as the caution band.
    #[serde(default = "default_caution_fraction")]
    pub caution_fraction: f64,

    /// Site selected when a session opens. `"All"` shows everything.
    #[serde(default = "default_site_filter")]
    pub site_filter: String,

    /// Start sessions from the seed template instead of empty.
    #[serde(default)]
    pub seed_defaults: bool,
}

fn default_caution_fraction() -> f64 {
    0.05
}

fn default_site_filter() -> String {
    ALL_SITES.to_string()
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            caution_fraction: default_caution_fraction(),
            site_filter: default_site_filter(),
            seed_defaults: false,
        }
    }
}

impl ReviewConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Validated tolerance policy for the configured fraction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the fraction is negative or
    /// not finite.
    pub fn tolerance(&self) -> Result<TolerancePolicy, ConfigError> {
        TolerancePolicy::new(self.caution_fraction).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
