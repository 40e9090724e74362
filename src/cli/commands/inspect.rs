//! Inspect command implementation

use super::{format_of, storage_for};
use crate::cli::error::CliError;
use crate::cli::output::format_summary;
use crate::model::SystemLoader;
use crate::models::PetSystem;
use std::path::Path;

/// Handle the inspect command
pub fn handle_inspect(input: &Path) -> Result<(), CliError> {
    let format = format_of(input)?;
    let (storage, name) = storage_for(input)?;

    let mut system = PetSystem::new();
    SystemLoader::new(storage)
        .load(&name, format, &mut system)
        .map_err(|e| CliError::Import(input.to_path_buf(), e))?;

    print!("{}", format_summary(&system));
    Ok(())
}
