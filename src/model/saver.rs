//! System saving functionality
//!
//! Serializes a `PetSystem` to a document and writes its text to a storage
//! backend.

use crate::config::PersistConfig;
use crate::document::DocumentFormat;
use crate::export::{ExportError, serialize_to_document};
use crate::models::PetSystem;
use crate::storage::StorageBackend;
use tracing::info;

/// System saver that uses a storage backend
pub struct SystemSaver<B: StorageBackend> {
    storage: B,
    config: PersistConfig,
}

impl<B: StorageBackend> SystemSaver<B> {
    /// Create a new saver with the default rendering configuration
    pub fn new(storage: B) -> Self {
        Self::with_config(storage, PersistConfig::default())
    }

    pub fn with_config(storage: B, config: PersistConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &PersistConfig {
        &self.config
    }

    /// Save `system` to `path` in `format`, replacing any existing file.
    pub fn save(
        &self,
        system: &PetSystem,
        path: &str,
        format: DocumentFormat,
    ) -> Result<(), ExportError> {
        let document = serialize_to_document(system, format)?;
        let content = document.render(&self.config)?;
        self.storage.write_file(path, content.as_bytes())?;

        info!(
            path,
            %format,
            owners = system.owners.len(),
            pets = system.pets.len(),
            bytes = content.len(),
            "Saved pet system"
        );
        Ok(())
    }

    pub fn save_to_json(&self, system: &PetSystem, path: &str) -> Result<(), ExportError> {
        self.save(system, path, DocumentFormat::Json)
    }

    pub fn save_to_xml(&self, system: &PetSystem, path: &str) -> Result<(), ExportError> {
        self.save(system, path, DocumentFormat::Xml)
    }
}
