//! Cart configuration

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a cart configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Unit price given to a line produced by merging into an existing line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MergePricing {
    /// Keep the existing line's unit price.
    #[default]
    KeepUnitPrice,

    /// Use the cart's total excluding tax, taken before the merge, as the new unit price.
    ///
    /// Reproduces the legacy checkout behaviour. Repeated merges escalate the
    /// unit price quickly.
    PreMergeTotal,
}

/// Cart configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CartConfig {
    /// How merged lines are priced
    pub merge_pricing: MergePricing,
}

impl CartConfig {
    /// Create a configuration with the given merge pricing.
    pub fn new(merge_pricing: MergePricing) -> Self {
        Self { merge_pricing }
    }

    /// Parse a configuration from a YAML document.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is not a valid configuration.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }
}
