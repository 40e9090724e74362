//! Convert command implementation

use super::{format_of, storage_for};
use crate::cli::error::CliError;
use crate::config::PersistConfig;
use crate::model::{SystemLoader, SystemSaver};
use crate::models::PetSystem;
use std::path::Path;

/// Handle the convert command
///
/// Loads `input` and writes it to `output`, each in the format named by its
/// extension. Settings from `config_path` apply first; `compact` then turns
/// pretty printing off.
pub fn handle_convert(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    compact: bool,
) -> Result<PetSystem, CliError> {
    let input_format = format_of(input)?;
    let output_format = format_of(output)?;

    let mut config = match config_path {
        Some(path) => PersistConfig::from_file(path)?,
        None => PersistConfig::default(),
    };
    if compact {
        config.pretty = false;
    }

    let (input_storage, input_name) = storage_for(input)?;
    let mut system = PetSystem::new();
    SystemLoader::new(input_storage)
        .load(&input_name, input_format, &mut system)
        .map_err(|e| CliError::Import(input.to_path_buf(), e))?;

    let (output_storage, output_name) = storage_for(output)?;
    SystemSaver::with_config(output_storage, config)
        .save(&system, &output_name, output_format)
        .map_err(|e| CliError::Export(output.to_path_buf(), e))?;

    println!(
        "Converted {} ({}) to {} ({})",
        input.display(),
        input_format,
        output.display(),
        output_format
    );
    Ok(system)
}
