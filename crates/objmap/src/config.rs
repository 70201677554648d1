// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapper configuration.
//!
//! Supports both programmatic and file-based configuration.
//!
//! ```toml
//! name = "api-layer"
//! skip_none_values = true
//! strict_fields = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Behaviour switches for a [`Mapper`](crate::Mapper).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Mapper name, prefixed to the mapper's log lines.
    pub name: String,

    /// Leave target fields unset when the copied value is null, so the
    /// target's own default applies.
    pub skip_none_values: bool,

    /// Fail instead of skipping when a spec field has no source attribute.
    pub strict_fields: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            name: "objmap".to_string(),
            skip_none_values: false,
            strict_fields: false,
        }
    }
}

impl MapperConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("mapper name is empty".into()));
        }
        Ok(())
    }

    /// Set mapper name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable null skipping.
    pub fn skip_none_values(mut self, enabled: bool) -> Self {
        self.skip_none_values = enabled;
        self
    }

    /// Enable or disable strict field checking.
    pub fn strict_fields(mut self, enabled: bool) -> Self {
        self.strict_fields = enabled;
        self
    }
}
