//! JSON exporter
//!
//! Owners, vets, shelters, shops, health records and vaccinations are written
//! through their own serde derives. Pets go through [`PetEntry`], which swaps
//! the `PetKind` for the flat `type` discriminant plus variant flag.

use super::ExportError;
use crate::document::format_timestamp;
use crate::models::{
    EntityId, HealthRecord, Owner, Pet, PetKind, PetShelter, PetShop, PetSystem, Vaccination, Vet,
};
use serde::Serialize;

#[derive(Serialize)]
struct SystemEntry<'a> {
    owners: &'a [Owner],
    vets: &'a [Vet],
    shelters: &'a [PetShelter],
    shops: &'a [PetShop],
    pets: Vec<PetEntry<'a>>,
}

#[derive(Serialize)]
struct PetEntry<'a> {
    id: EntityId,
    name: &'a str,
    species: &'a str,
    breed: &'a str,
    age: i64,
    created_at: String,
    health_records: &'a [HealthRecord],
    vaccinations: &'a [Vaccination],
    owner_id: EntityId,
    #[serde(flatten)]
    kind: Option<KindEntry>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KindEntry {
    Dog { trained: bool },
    Cat { is_indoor: bool },
    Bird { can_fly: bool },
}

impl KindEntry {
    fn from_kind(kind: PetKind) -> Option<Self> {
        match kind {
            PetKind::Generic => None,
            PetKind::Dog { trained } => Some(KindEntry::Dog { trained }),
            PetKind::Cat { is_indoor } => Some(KindEntry::Cat { is_indoor }),
            PetKind::Bird { can_fly } => Some(KindEntry::Bird { can_fly }),
        }
    }
}

impl<'a> From<&'a Pet> for PetEntry<'a> {
    fn from(pet: &'a Pet) -> Self {
        Self {
            id: pet.id,
            name: &pet.name,
            species: &pet.species,
            breed: &pet.breed,
            age: pet.age,
            created_at: format_timestamp(&pet.created_at),
            health_records: &pet.health_records,
            vaccinations: &pet.vaccinations,
            owner_id: pet.owner_id,
            kind: KindEntry::from_kind(pet.kind),
        }
    }
}

/// Exporter producing the JSON document tree
#[derive(Debug, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, system: &PetSystem) -> Result<serde_json::Value, ExportError> {
        let entry = SystemEntry {
            owners: &system.owners,
            vets: &system.vets,
            shelters: &system.shelters,
            shops: &system.shops,
            pets: system.pets.iter().map(PetEntry::from).collect(),
        };

        serde_json::to_value(&entry)
            .map_err(|e| ExportError::Serialization(format!("Failed to build JSON tree: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn sample() -> PetSystem {
        let mut system = PetSystem::new();
        let mut owner = Owner::new(1, "A", "x");
        let created = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let dog = Pet::dog(1, "B", "Lab", 3, &owner, true)
            .unwrap()
            .with_created_at(created);
        let fish = Pet::new(2, "Nemo", "Fish", "Clown", 1, &owner)
            .unwrap()
            .with_created_at(created);
        owner.add_pet(&dog);
        owner.add_pet(&fish);
        system.owners.push(owner);
        system.pets.extend([dog, fish]);
        system
    }

    #[test]
    fn test_top_level_keys_in_order() {
        let value = JsonExporter::new().export(&sample()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["owners", "vets", "shelters", "shops", "pets"]);
    }

    #[test]
    fn test_dog_entry() {
        let value = JsonExporter::new().export(&sample()).unwrap();
        assert_eq!(
            value["pets"][0],
            json!({
                "id": 1,
                "name": "B",
                "species": "Dog",
                "breed": "Lab",
                "age": 3,
                "created_at": "2024-01-10T09:00:00",
                "health_records": [],
                "vaccinations": [],
                "owner_id": 1,
                "type": "dog",
                "trained": true
            })
        );
    }

    #[test]
    fn test_generic_pet_has_no_discriminant() {
        let value = JsonExporter::new().export(&sample()).unwrap();
        let fish = value["pets"][1].as_object().unwrap();
        assert_eq!(fish["species"], "Fish");
        assert!(!fish.contains_key("type"));
        assert!(!fish.contains_key("trained"));
    }

    #[test]
    fn test_owner_references_are_ids() {
        let value = JsonExporter::new().export(&sample()).unwrap();
        assert_eq!(
            value["owners"][0],
            json!({ "id": 1, "name": "A", "phone": "x", "pets": [1, 2] })
        );
    }

    #[test]
    fn test_dangling_references_are_written_as_is() {
        let mut system = sample();
        let mut vet = Vet::new(1, "Petrov", "Therapist");
        vet.assigned_pets.push(404);
        system.vets.push(vet);
        system.pets[0].owner_id = 77;

        let value = JsonExporter::new().export(&system).unwrap();
        assert_eq!(value["vets"][0]["assigned_pets"], json!([404]));
        assert_eq!(value["pets"][0]["owner_id"], 77);
    }
}
