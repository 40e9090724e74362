//! Error type for CLI commands

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::import::ImportError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Cannot determine document format of {0}; expected a .json or .xml file")]
    UnknownFormat(PathBuf),
    #[error("Failed to load {0}: {1}")]
    Import(PathBuf, #[source] ImportError),
    #[error("Failed to write {0}: {1}")]
    Export(PathBuf, #[source] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
