//! Shelter and shop models for the SDK
//!
//! Both hold references to pets that stay in `PetSystem::pets`; releasing or
//! selling a pet only removes the reference.

use super::EntityId;
use super::pet::Pet;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetShelter {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub pets: Vec<EntityId>,
}

impl PetShelter {
    pub fn new(id: EntityId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            pets: Vec::new(),
        }
    }

    pub fn admit_pet(&mut self, pet: &Pet) {
        self.pets.push(pet.id);
        debug!(shelter = self.id, pet = pet.id, "Pet '{}' admitted to '{}'", pet.name, self.name);
    }

    /// Release the first housed pet with `pet_id`. Returns `false` if none was
    /// found.
    pub fn release_pet(&mut self, pet_id: EntityId) -> bool {
        match self.pets.iter().position(|id| *id == pet_id) {
            Some(index) => {
                self.pets.remove(index);
                debug!(shelter = self.id, pet = pet_id, "Pet released from '{}'", self.name);
                true
            }
            None => {
                debug!(shelter = self.id, pet = pet_id, "Pet not found in '{}'", self.name);
                false
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetShop {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub pets: Vec<EntityId>,
}

impl PetShop {
    pub fn new(id: EntityId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            pets: Vec::new(),
        }
    }

    pub fn add_pet_to_sale(&mut self, pet: &Pet) {
        self.pets.push(pet.id);
        debug!(shop = self.id, pet = pet.id, "Pet '{}' listed in '{}'", pet.name, self.name);
    }

    /// Sell the first listed pet with `pet_id`. Returns `false` if none was
    /// found.
    pub fn sell_pet(&mut self, pet_id: EntityId) -> bool {
        match self.pets.iter().position(|id| *id == pet_id) {
            Some(index) => {
                self.pets.remove(index);
                debug!(shop = self.id, pet = pet_id, "Pet sold from '{}'", self.name);
                true
            }
            None => {
                debug!(shop = self.id, pet = pet_id, "Pet not found in '{}'", self.name);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;

    #[test]
    fn test_release_only_first_match() {
        let owner = Owner::new(1, "Ivanov", "+7");
        let cat = Pet::cat(2, "Murka", "Siamese", 2, &owner, true).unwrap();
        let mut shelter = PetShelter::new(1, "Cats and Dogs", "1 Shelter St");

        shelter.admit_pet(&cat);
        shelter.admit_pet(&cat);
        assert!(shelter.release_pet(2));
        assert_eq!(shelter.pets, vec![2]);
        assert!(shelter.release_pet(2));
        assert!(!shelter.release_pet(2));
    }

    #[test]
    fn test_sell_unknown_pet() {
        let mut shop = PetShop::new(1, "ZooWorld", "10 Zoo St");
        assert!(!shop.sell_pet(99));
    }
}
