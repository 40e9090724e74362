//! File system storage backend
//!
//! Implements StorageBackend for native file system operations.
//!
//! ## Security
//!
//! Relative paths containing ".." components are rejected, and resolved
//! paths are verified to remain within the base directory, including when
//! an intermediate directory is a symlink.

use super::{StorageBackend, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// File system storage backend
#[derive(Debug, Clone)]
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
}

impl FileSystemStorageBackend {
    /// Create a new file system storage backend
    ///
    /// # Arguments
    ///
    /// * `base_path` - Base directory path for all file operations
    ///
    /// # Example
    ///
    /// ```rust
    /// use pet_system_sdk::storage::FileSystemStorageBackend;
    ///
    /// let backend = FileSystemStorageBackend::new("/var/lib/pets");
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a path relative to the base path with security checks.
    ///
    /// Only the relative part is checked for `..` components. The resolved
    /// path, or for a file that does not exist yet its nearest existing
    /// ancestor, must canonicalize to somewhere inside the base directory.
    fn resolve_path(&self, path: &str) -> Result<PathBuf, StorageError> {
        let normalized = Path::new(path.trim_start_matches('/'));

        if normalized
            .components()
            .any(|component| matches!(component, Component::ParentDir))
        {
            warn!(path, "Rejected path with traversal component");
            return Err(StorageError::PermissionDenied(
                "Path traversal (..) not allowed".to_string(),
            ));
        }

        let full = self.base_path.join(normalized);
        let base_canonical = canonicalize_existing(&self.base_path);

        if full.exists() {
            let canonical = full
                .canonicalize()
                .map_err(|e| StorageError::IoError(format!("Failed to resolve path: {}", e)))?;
            self.ensure_contained(path, &canonical, &base_canonical)?;
            return Ok(canonical);
        }

        // Directories still to be created land under the nearest existing one.
        if let Some(ancestor) = full.parent() {
            let ancestor_canonical = canonicalize_existing(ancestor);
            self.ensure_contained(path, &ancestor_canonical, &base_canonical)?;
        }

        Ok(full)
    }

    fn ensure_contained(
        &self,
        path: &str,
        resolved: &Path,
        base_canonical: &Path,
    ) -> Result<(), StorageError> {
        if resolved.starts_with(base_canonical) {
            return Ok(());
        }
        warn!(path, "Rejected path escaping the base directory");
        Err(StorageError::PermissionDenied(
            "Path escapes base directory".to_string(),
        ))
    }
}

/// Canonicalize the longest existing prefix of `path` and append the rest.
fn canonicalize_existing(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        let existing = if ancestor.as_os_str().is_empty() {
            Path::new(".")
        } else {
            ancestor
        };
        if let (Ok(canonical), Ok(rest)) = (existing.canonicalize(), path.strip_prefix(ancestor)) {
            return canonical.join(rest);
        }
    }
    path.to_path_buf()
}

impl StorageBackend for FileSystemStorageBackend {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let full_path = self.resolve_path(path)?;

        fs::read(&full_path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::FileNotFound(path.to_string())
            } else {
                StorageError::IoError(format!("Failed to read file {}: {}", path, e))
            }
        })
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve_path(path)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::IoError(format!("Failed to create directory for {}: {}", path, e))
            })?;
        }

        fs::write(&full_path, content)
            .map_err(|e| StorageError::IoError(format!("Failed to write file {}: {}", path, e)))
    }

    fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.resolve_path(path)?;

        match fs::metadata(&full_path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to check file existence {}: {}",
                path, e
            ))),
        }
    }

    fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        let full_path = self.resolve_path(path)?;

        fs::remove_file(&full_path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::FileNotFound(path.to_string())
            } else {
                StorageError::IoError(format!("Failed to delete file {}: {}", path, e))
            }
        })
    }
}
