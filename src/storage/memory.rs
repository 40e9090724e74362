//! In-memory storage backend
//!
//! Keeps files in a map keyed by normalized path. Not shareable across
//! threads.

use super::{StorageBackend, StorageError};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    files: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths of all stored files, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    fn key(path: &str) -> String {
        path.trim_start_matches('/').to_string()
    }
}

impl StorageBackend for MemoryStorageBackend {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .borrow()
            .get(&Self::key(path))
            .cloned()
            .ok_or_else(|| StorageError::FileNotFound(path.to_string()))
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        self.files
            .borrow_mut()
            .insert(Self::key(path), content.to_vec());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.files.borrow().contains_key(&Self::key(path)))
    }

    fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        self.files
            .borrow_mut()
            .remove(&Self::key(path))
            .map(|_| ())
            .ok_or_else(|| StorageError::FileNotFound(path.to_string()))
    }
}
