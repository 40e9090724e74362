//! Pet System SDK - pet management domain model with JSON and XML persistence
//!
//! Provides:
//! - Entity model (owners, pets with their variants, vets, shelters, shops)
//! - Serialization of a whole `PetSystem` to a JSON or XML document tree
//! - Deserialization back into an equivalent system, resolving id references
//! - Storage backends and a saver/loader pair on top of them
//!
//! ```rust
//! use pet_system_sdk::{DocumentFormat, Owner, Pet, PetSystem};
//! use pet_system_sdk::{deserialize_from_document, serialize_to_document};
//!
//! let mut system = PetSystem::new();
//! let owner = Owner::new(1, "A", "x");
//! let dog = Pet::dog(1, "B", "Lab", 3, &owner, true).unwrap();
//! system.owners.push(owner);
//! system.pets.push(dog);
//!
//! let document = serialize_to_document(&system, DocumentFormat::Json).unwrap();
//! let mut restored = PetSystem::new();
//! deserialize_from_document(&document, &mut restored).unwrap();
//! assert_eq!(restored.pets[0].age, 3);
//! ```

pub mod config;
pub mod document;
pub mod export;
pub mod import;
pub mod model;
pub mod models;
pub mod storage;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use config::{ConfigError, PersistConfig};
pub use document::{Document, DocumentFormat, XmlElement};
pub use export::{ExportError, JsonExporter, XmlExporter, serialize_to_document};
pub use import::{
    ImportError, JsonImporter, XmlImporter, deserialize_from_document, deserialize_from_str,
};
pub use model::{SystemLoader, SystemSaver};
pub use storage::{FileSystemStorageBackend, MemoryStorageBackend, StorageBackend, StorageError};
pub use validation::PetValidationError;

// Re-export models
pub use models::{
    EntityId, HealthRecord, Owner, Pet, PetKind, PetShelter, PetShop, PetSystem, Vaccination, Vet,
};
