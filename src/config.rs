//! Configuration for document rendering

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Error while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for writing JSON and XML documents
///
/// Every key is optional in TOML; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistConfig {
    /// Indent nested structures; compact single-line output otherwise
    pub pretty: bool,

    /// Number of spaces per nesting level when `pretty` is set
    pub indent: usize,

    /// Emit `<?xml version="1.0" encoding="utf-8"?>` before the XML root
    pub xml_declaration: bool,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
            xml_declaration: true,
        }
    }
}

impl PersistConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> PersistConfigBuilder {
        PersistConfigBuilder::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&content)
    }
}

/// Builder for PersistConfig
#[derive(Debug, Default)]
pub struct PersistConfigBuilder {
    config: PersistConfig,
}

impl PersistConfigBuilder {
    /// Enable or disable pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Set the indent width in spaces
    pub fn indent(mut self, indent: usize) -> Self {
        self.config.indent = indent;
        self
    }

    /// Enable or disable the XML declaration
    pub fn xml_declaration(mut self, declaration: bool) -> Self {
        self.config.xml_declaration = declaration;
        self
    }

    /// Build the configuration
    pub fn build(self) -> PersistConfig {
        self.config
    }
}
