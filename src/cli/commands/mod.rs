//! CLI command implementations

pub mod convert;
pub mod inspect;

use crate::cli::error::CliError;
use crate::document::DocumentFormat;
use crate::storage::FileSystemStorageBackend;
use std::path::{Path, PathBuf};

/// Split a user-supplied path into a storage backend rooted at its parent
/// directory and the file name within it.
fn storage_for(path: &Path) -> Result<(FileSystemStorageBackend, String), CliError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::InvalidArgument(format!("Not a file path: {}", path.display())))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((FileSystemStorageBackend::new(parent), file_name.to_string()))
}

fn format_of(path: &Path) -> Result<DocumentFormat, CliError> {
    DocumentFormat::from_path(path).ok_or_else(|| CliError::UnknownFormat(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_for_bare_file_name() {
        let (storage, name) = storage_for(Path::new("pets.json")).unwrap();
        assert_eq!(storage.base_path(), Path::new("."));
        assert_eq!(name, "pets.json");
    }

    #[test]
    fn test_storage_for_nested_path() {
        let (storage, name) = storage_for(Path::new("data/2024/pets.xml")).unwrap();
        assert_eq!(storage.base_path(), Path::new("data/2024"));
        assert_eq!(name, "pets.xml");
    }

    #[test]
    fn test_format_of_rejects_unknown_extension() {
        assert!(matches!(
            format_of(Path::new("pets.yaml")),
            Err(CliError::UnknownFormat(_))
        ));
        assert_eq!(format_of(Path::new("pets.xml")).unwrap(), DocumentFormat::Xml);
    }
}
