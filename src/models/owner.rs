//! Owner model for the SDK

use super::EntityId;
use super::pet::Pet;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    /// Ids of the pets this owner holds. The pets themselves live in
    /// `PetSystem::pets`.
    #[serde(default)]
    pub pets: Vec<EntityId>,
}

impl Owner {
    pub fn new(id: EntityId, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            pets: Vec::new(),
        }
    }

    pub fn add_pet(&mut self, pet: &Pet) {
        self.pets.push(pet.id);
        debug!(
            owner = self.id,
            pet = pet.id,
            "Pet '{}' added to owner '{}'",
            pet.name,
            self.name
        );
    }

    /// Drop every reference to `pet_id`. The pet stays in the system.
    pub fn remove_pet(&mut self, pet_id: EntityId) {
        self.pets.retain(|id| *id != pet_id);
        debug!(owner = self.id, pet = pet_id, "Pet removed from owner '{}'", self.name);
    }

    pub fn has_pet(&self, pet_id: EntityId) -> bool {
        self.pets.contains(&pet_id)
    }
}
