//! Vet model for the SDK

use super::EntityId;
use super::pet::Pet;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vet {
    pub id: EntityId,
    pub name: String,
    pub specialization: String,
    /// A pet may be assigned to several vets at once.
    pub assigned_pets: Vec<EntityId>,
}

impl Vet {
    pub fn new(id: EntityId, name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialization: specialization.into(),
            assigned_pets: Vec::new(),
        }
    }

    pub fn assign_pet(&mut self, pet: &Pet) {
        self.assigned_pets.push(pet.id);
        debug!(vet = self.id, pet = pet.id, "Pet '{}' assigned to vet '{}'", pet.name, self.name);
    }

    pub fn remove_pet(&mut self, pet_id: EntityId) {
        self.assigned_pets.retain(|id| *id != pet_id);
        debug!(vet = self.id, pet = pet_id, "Pet unassigned from vet '{}'", self.name);
    }
}
