//! Reference linker
//!
//! Format readers produce [`SystemRecords`]; [`link`] turns them into a
//! `PetSystem`. Lookup tables are filled in a fixed order so every reference
//! only ever points backwards: owners first, then pets, then the collections
//! that refer to pets.

use super::ImportError;
use crate::models::{
    EntityId, HealthRecord, Owner, Pet, PetKind, PetShelter, PetShop, PetSystem, Vaccination, Vet,
};
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Everything a format reader extracts from a document, before linking.
#[derive(Debug, Default)]
pub struct SystemRecords {
    /// Owners as read. Their `pets` lists are rebuilt from pet links.
    pub owners: Vec<Owner>,
    pub pets: Vec<PetRecord>,
    /// Vets, shelters and shops with their raw pet id lists.
    pub vets: Vec<Vet>,
    pub shelters: Vec<PetShelter>,
    pub shops: Vec<PetShop>,
}

/// A pet as read from a document, owner still unresolved.
#[derive(Debug, Clone)]
pub struct PetRecord {
    pub id: EntityId,
    pub name: String,
    /// Only consulted for generic pets; variants fix their own species.
    pub species: Option<String>,
    pub breed: String,
    pub age: i64,
    pub owner_id: EntityId,
    pub created_at: NaiveDateTime,
    pub kind: PetKind,
    pub health_records: Vec<HealthRecord>,
    pub vaccinations: Vec<Vaccination>,
}

impl PetRecord {
    /// Build the pet through the validating constructors.
    fn into_pet(self, owner: &Owner) -> Result<Pet, ImportError> {
        let mut pet = match self.kind {
            PetKind::Generic => {
                let species = self.species.ok_or_else(|| {
                    ImportError::MalformedDocument(format!(
                        "pet {}: missing 'species' for a pet without a type",
                        self.id
                    ))
                })?;
                Pet::new(self.id, self.name, species, self.breed, self.age, owner)?
            }
            kind => Pet::with_kind(self.id, self.name, self.breed, self.age, owner, kind)?,
        }
        .with_created_at(self.created_at);

        pet.health_records = self.health_records;
        pet.vaccinations = self.vaccinations;
        Ok(pet)
    }
}

/// Resolve references and build a fresh system.
pub fn link(records: SystemRecords) -> Result<PetSystem, ImportError> {
    let mut owners = records.owners;
    let mut owner_index: HashMap<EntityId, usize> = HashMap::new();
    for (index, owner) in owners.iter_mut().enumerate() {
        owner.pets.clear();
        owner_index.insert(owner.id, index);
    }

    let mut pets = Vec::with_capacity(records.pets.len());
    let mut pet_ids: HashSet<EntityId> = HashSet::new();
    for record in records.pets {
        let index = *owner_index
            .get(&record.owner_id)
            .ok_or(ImportError::MissingReference {
                pet_id: record.id,
                owner_id: record.owner_id,
            })?;

        let owner = &mut owners[index];
        let pet = record.into_pet(owner)?;
        owner.pets.push(pet.id);
        pet_ids.insert(pet.id);
        pets.push(pet);
    }

    let mut vets = records.vets;
    for vet in &mut vets {
        retain_known(&mut vet.assigned_pets, &pet_ids, "vet", vet.id);
    }
    let mut shelters = records.shelters;
    for shelter in &mut shelters {
        retain_known(&mut shelter.pets, &pet_ids, "shelter", shelter.id);
    }
    let mut shops = records.shops;
    for shop in &mut shops {
        retain_known(&mut shop.pets, &pet_ids, "shop", shop.id);
    }

    Ok(PetSystem {
        owners,
        pets,
        vets,
        shelters,
        shops,
    })
}

fn retain_known(
    ids: &mut Vec<EntityId>,
    known: &HashSet<EntityId>,
    holder: &str,
    holder_id: EntityId,
) {
    ids.retain(|id| {
        let found = known.contains(id);
        if !found {
            debug!(holder, holder_id, pet = *id, "Skipping unresolved pet reference");
        }
        found
    });
}
