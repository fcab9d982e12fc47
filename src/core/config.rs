// src/core/config.rs

use crate::core::common::OxikdError;
use serde::{Deserialize, Serialize};
use std::fs; // For reading file
use std::path::Path;

/// Configuration carried by a `KdTree` and applied to every query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KdTreeConfig {
    /// Reject query bounds that do not enclose the indexed points.
    pub validate_search_bounds: bool,
    /// Largest `k` accepted by k-nearest-neighbour queries; `None` accepts any.
    pub max_neighbours: Option<usize>,
    /// Emit a `trace!` record for each nearest-neighbour query.
    pub log_queries: bool,
}

/// Builder for `KdTreeConfig` with validation on `build`.
#[derive(Debug, Clone, Default)]
pub struct KdTreeConfigBuilder {
    validate_search_bounds: Option<bool>,
    max_neighbours: Option<usize>,
    log_queries: Option<bool>,
}

impl KdTreeConfigBuilder {
    /// Creates a new KdTreeConfigBuilder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the search-bounds enclosure check
    pub fn validate_search_bounds(mut self, enabled: bool) -> Self {
        self.validate_search_bounds = Some(enabled);
        self
    }

    /// Caps `k` for k-nearest-neighbour queries
    pub fn max_neighbours(mut self, max: usize) -> Self {
        self.max_neighbours = Some(max);
        self
    }

    /// Enables or disables per-query trace logging
    pub fn log_queries(mut self, enabled: bool) -> Self {
        self.log_queries = Some(enabled);
        self
    }

    /// Builds the KdTreeConfig instance with validation
    pub fn build(self) -> Result<KdTreeConfig, OxikdError> {
        let defaults = KdTreeConfig::default();
        let config = KdTreeConfig {
            validate_search_bounds: self
                .validate_search_bounds
                .unwrap_or(defaults.validate_search_bounds),
            max_neighbours: self.max_neighbours.or(defaults.max_neighbours),
            log_queries: self.log_queries.unwrap_or(defaults.log_queries),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for KdTreeConfig {
    fn default() -> Self {
        Self {
            validate_search_bounds: true,
            max_neighbours: None,
            log_queries: false,
        }
    }
}

impl KdTreeConfig {
    /// Creates a new KdTreeConfigBuilder for fluent configuration
    pub fn builder() -> KdTreeConfigBuilder {
        KdTreeConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), OxikdError> {
        if self.max_neighbours == Some(0) {
            return Err(OxikdError::Configuration(
                "max_neighbours must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `OxikdError::Configuration` if parsing or validation fails and
    /// `OxikdError::Io` if the file exists but cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self, OxikdError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    OxikdError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;

                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(OxikdError::Io(e)),
        }
    }

    /// Loads configuration from an optional TOML file path.
    ///
    /// `None` and a missing file both give the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `OxikdError::Configuration` if the file exists but cannot be parsed.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, OxikdError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
