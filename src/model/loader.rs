//! System loading functionality
//!
//! Reads document text from a storage backend and deserializes it into an
//! existing `PetSystem`. The target is only replaced once the whole document
//! has been read and linked.

use crate::document::DocumentFormat;
use crate::import::{ImportError, deserialize_from_str};
use crate::models::PetSystem;
use crate::storage::StorageBackend;
use tracing::info;

/// System loader that uses a storage backend
pub struct SystemLoader<B: StorageBackend> {
    storage: B,
}

impl<B: StorageBackend> SystemLoader<B> {
    /// Create a new system loader with the given storage backend
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    /// Load `path` in `format` into `target`.
    ///
    /// On error `target` keeps its previous contents.
    pub fn load(
        &self,
        path: &str,
        format: DocumentFormat,
        target: &mut PetSystem,
    ) -> Result<(), ImportError> {
        let bytes = self.storage.read_file(path)?;
        let content = String::from_utf8(bytes).map_err(|e| {
            ImportError::MalformedDocument(format!("{} is not valid UTF-8: {}", path, e))
        })?;

        deserialize_from_str(&content, format, target)?;

        info!(
            path,
            %format,
            owners = target.owners.len(),
            pets = target.pets.len(),
            vets = target.vets.len(),
            shelters = target.shelters.len(),
            shops = target.shops.len(),
            "Loaded pet system"
        );
        Ok(())
    }

    pub fn load_from_json(&self, path: &str, target: &mut PetSystem) -> Result<(), ImportError> {
        self.load(path, DocumentFormat::Json, target)
    }

    pub fn load_from_xml(&self, path: &str, target: &mut PetSystem) -> Result<(), ImportError> {
        self.load(path, DocumentFormat::Xml, target)
    }

    /// Load `path`, picking the format from its extension.
    pub fn load_auto(&self, path: &str, target: &mut PetSystem) -> Result<(), ImportError> {
        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            ImportError::MalformedDocument(format!(
                "cannot infer document format from path {}",
                path
            ))
        })?;
        self.load(path, format, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;
    use crate::storage::{MemoryStorageBackend, StorageError};

    const OWNER_ONLY: &str = r#"{"owners":[{"id":1,"name":"A","phone":"x","pets":[]}],
        "vets":[],"shelters":[],"shops":[],"pets":[]}"#;

    #[test]
    fn test_load_auto_json() {
        let storage = MemoryStorageBackend::new();
        storage.write_file("data/pets.JSON", OWNER_ONLY.as_bytes()).unwrap();

        let mut system = PetSystem::new();
        SystemLoader::new(&storage)
            .load_auto("data/pets.JSON", &mut system)
            .unwrap();
        assert_eq!(system.owners, vec![Owner::new(1, "A", "x")]);
    }

    #[test]
    fn test_load_auto_unknown_extension() {
        let storage = MemoryStorageBackend::new();
        storage.write_file("pets.yaml", OWNER_ONLY.as_bytes()).unwrap();

        let result = SystemLoader::new(&storage).load_auto("pets.yaml", &mut PetSystem::new());
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let storage = MemoryStorageBackend::new();
        let result = SystemLoader::new(&storage).load_from_xml("none.xml", &mut PetSystem::new());
        assert!(matches!(
            result,
            Err(ImportError::Storage(StorageError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_invalid_utf8_keeps_target() {
        let storage = MemoryStorageBackend::new();
        storage.write_file("pets.json", &[0xff, 0xfe, 0x00]).unwrap();

        let mut system = PetSystem::new();
        system.owners.push(Owner::new(7, "Kept", "+1"));
        let before = system.clone();

        let result = SystemLoader::new(&storage).load_from_json("pets.json", &mut system);
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
        assert_eq!(system, before);
    }
}
