//! Models module for the SDK
//!
//! Defines the pet-management domain entities and the `PetSystem` aggregate
//! that owns them. Entities refer to each other by identifier; the system's
//! flat collections are the single owner of every entity.

pub mod facility;
pub mod health;
pub mod owner;
pub mod pet;
pub mod system;
pub mod vet;

pub use facility::{PetShelter, PetShop};
pub use health::{HealthRecord, Vaccination};
pub use owner::Owner;
pub use pet::{Pet, PetKind};
pub use system::PetSystem;
pub use vet::Vet;

/// Identifier shared by every entity kind.
///
/// Uniqueness within a collection is assumed, not enforced.
pub type EntityId = i64;
