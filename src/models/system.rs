//! PetSystem aggregate for the SDK

use super::EntityId;
use super::facility::{PetShelter, PetShop};
use super::owner::Owner;
use super::pet::Pet;
use super::vet::Vet;

/// Root aggregate holding flat collections of every entity kind.
///
/// Every pet referenced anywhere is expected to also be present in `pets`.
/// Identifier uniqueness is the caller's responsibility; lookups return the
/// first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetSystem {
    pub owners: Vec<Owner>,
    pub pets: Vec<Pet>,
    pub vets: Vec<Vet>,
    pub shelters: Vec<PetShelter>,
    pub shops: Vec<PetShop>,
}

impl PetSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self, id: EntityId) -> Option<&Owner> {
        self.owners.iter().find(|o| o.id == id)
    }

    pub fn owner_mut(&mut self, id: EntityId) -> Option<&mut Owner> {
        self.owners.iter_mut().find(|o| o.id == id)
    }

    pub fn pet(&self, id: EntityId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn pet_mut(&mut self, id: EntityId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.id == id)
    }

    pub fn owner_of(&self, pet: &Pet) -> Option<&Owner> {
        self.owner(pet.owner_id)
    }

    /// One-line description of a pet and its owner, `None` for an unknown id.
    ///
    /// An owner missing from `owners` is shown as `?`.
    pub fn pet_info(&self, id: EntityId) -> Option<String> {
        let pet = self.pet(id)?;
        let owner = self.owner_of(pet).map_or("?", |owner| owner.name.as_str());
        Some(format!(
            "Pet ID: {}, Name: {}, Species: {}, Breed: {}, Age: {}, Owner: {}",
            pet.id, pet.name, pet.species, pet.breed, pet.age, owner
        ))
    }

    /// Total number of top-level entities across the five collections.
    pub fn len(&self) -> usize {
        self.owners.len()
            + self.pets.len()
            + self.vets.len()
            + self.shelters.len()
            + self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.owners.clear();
        self.pets.clear();
        self.vets.clear();
        self.shelters.clear();
        self.shops.clear();
    }
}
