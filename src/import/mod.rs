//! Import functionality
//!
//! Rebuilds a `PetSystem` from a [`Document`]. Each format has a reader that
//! turns its tree into plain records; a shared linker then resolves the
//! identifier references in dependency order (owners, pets, then vets,
//! shelters and shops) and constructs the entities.
//!
//! Reference resolution is deliberately asymmetric:
//! - a pet whose `owner_id` matches no loaded owner fails the whole load
//!   with [`ImportError::MissingReference`]
//! - a vet, shelter or shop entry naming an unknown pet id is dropped

pub mod json;
pub mod linker;
pub mod xml;

use crate::document::{Document, DocumentFormat};
use crate::models::{EntityId, PetSystem};
use crate::storage::StorageError;
use crate::validation::PetValidationError;
use tracing::debug;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Missing reference: pet {pet_id} refers to unknown owner {owner_id}")]
    MissingReference {
        pet_id: EntityId,
        owner_id: EntityId,
    },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Invalid pet in document: {0}")]
    InvalidPet(#[from] PetValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Replace the five collections of `target` with the contents of `document`.
///
/// The whole document is read and linked before `target` is touched, so on
/// error `target` keeps its previous contents.
pub fn deserialize_from_document(
    document: &Document,
    target: &mut PetSystem,
) -> Result<(), ImportError> {
    let records = match document {
        Document::Json(value) => JsonImporter::new().read(value)?,
        Document::Xml(root) => XmlImporter::new().read(root)?,
    };
    let loaded = linker::link(records)?;

    debug!(
        format = %document.format(),
        owners = loaded.owners.len(),
        pets = loaded.pets.len(),
        vets = loaded.vets.len(),
        shelters = loaded.shelters.len(),
        shops = loaded.shops.len(),
        "Document deserialized"
    );

    target.owners = loaded.owners;
    target.pets = loaded.pets;
    target.vets = loaded.vets;
    target.shelters = loaded.shelters;
    target.shops = loaded.shops;
    Ok(())
}

/// Parse `content` in `format` and deserialize it into `target`.
pub fn deserialize_from_str(
    content: &str,
    format: DocumentFormat,
    target: &mut PetSystem,
) -> Result<(), ImportError> {
    let document = Document::parse(content, format)?;
    deserialize_from_document(&document, target)
}

// Re-export for convenience
pub use json::JsonImporter;
pub use xml::XmlImporter;
