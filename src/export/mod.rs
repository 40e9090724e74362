//! Export functionality
//!
//! Converts a `PetSystem` into a [`Document`] tree:
//! - JSON: one object with `owners`, `vets`, `shelters`, `shops`, `pets` arrays
//! - XML: a `pet_system` root with one section element per collection
//!
//! Links between entities are written as the target's integer id. Exporting
//! never inspects whether those ids resolve.

pub mod json;
pub mod xml;

use crate::document::{Document, DocumentFormat};
use crate::models::PetSystem;
use crate::storage::StorageError;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Build the document tree for `system` in the requested format.
pub fn serialize_to_document(
    system: &PetSystem,
    format: DocumentFormat,
) -> Result<Document, ExportError> {
    match format {
        DocumentFormat::Json => JsonExporter::new().export(system).map(Document::Json),
        DocumentFormat::Xml => Ok(Document::Xml(XmlExporter::new().export(system))),
    }
}

// Re-export for convenience
pub use json::JsonExporter;
pub use xml::XmlExporter;
