//! Pet model for the SDK
//!
//! A pet is a single record type whose variant-specific data lives in
//! [`PetKind`]. Every constructor runs the field checks from
//! [`crate::validation::pets`], so a `Pet` built through this API always has a
//! non-negative age and a non-empty name and species.

use super::EntityId;
use super::health::{HealthRecord, Vaccination};
use super::owner::Owner;
use crate::validation::pets::{PetValidationError, validate_age, validate_pet_fields};
use chrono::{Local, NaiveDateTime};
use tracing::debug;

pub const DOG_SPECIES: &str = "Dog";
pub const CAT_SPECIES: &str = "Cat";
pub const BIRD_SPECIES: &str = "Bird";

/// Variant of a pet, carried explicitly as the `type` discriminant in
/// serialized documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetKind {
    /// Base entity with caller-supplied species. Serialized without `type`.
    #[default]
    Generic,
    Dog {
        trained: bool,
    },
    Cat {
        is_indoor: bool,
    },
    Bird {
        can_fly: bool,
    },
}

impl PetKind {
    /// Discriminant written to documents, `None` for generic pets.
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            PetKind::Generic => None,
            PetKind::Dog { .. } => Some("dog"),
            PetKind::Cat { .. } => Some("cat"),
            PetKind::Bird { .. } => Some("bird"),
        }
    }

    /// Name and value of the variant-specific flag.
    pub fn flag(&self) -> Option<(&'static str, bool)> {
        match *self {
            PetKind::Generic => None,
            PetKind::Dog { trained } => Some(("trained", trained)),
            PetKind::Cat { is_indoor } => Some(("is_indoor", is_indoor)),
            PetKind::Bird { can_fly } => Some(("can_fly", can_fly)),
        }
    }

    /// Species implied by the variant. Generic pets carry their own.
    pub fn fixed_species(&self) -> Option<&'static str> {
        match self {
            PetKind::Generic => None,
            PetKind::Dog { .. } => Some(DOG_SPECIES),
            PetKind::Cat { .. } => Some(CAT_SPECIES),
            PetKind::Bird { .. } => Some(BIRD_SPECIES),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: EntityId,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: i64,
    /// Id of the one owner this pet belongs to.
    pub owner_id: EntityId,
    pub created_at: NaiveDateTime,
    pub health_records: Vec<HealthRecord>,
    pub vaccinations: Vec<Vaccination>,
    pub kind: PetKind,
}

impl Pet {
    /// Create a generic pet.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        species: impl Into<String>,
        breed: impl Into<String>,
        age: i64,
        owner: &Owner,
    ) -> Result<Self, PetValidationError> {
        Self::build(id, name.into(), species.into(), breed.into(), age, owner.id, PetKind::Generic)
    }

    pub fn dog(
        id: EntityId,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i64,
        owner: &Owner,
        trained: bool,
    ) -> Result<Self, PetValidationError> {
        Self::with_kind(id, name, breed, age, owner, PetKind::Dog { trained })
    }

    pub fn cat(
        id: EntityId,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i64,
        owner: &Owner,
        is_indoor: bool,
    ) -> Result<Self, PetValidationError> {
        Self::with_kind(id, name, breed, age, owner, PetKind::Cat { is_indoor })
    }

    pub fn bird(
        id: EntityId,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i64,
        owner: &Owner,
        can_fly: bool,
    ) -> Result<Self, PetValidationError> {
        Self::with_kind(id, name, breed, age, owner, PetKind::Bird { can_fly })
    }

    /// Create a pet of a non-generic variant; the species follows the variant.
    ///
    /// For [`PetKind::Generic`] the species is left empty and construction
    /// fails, use [`Pet::new`] instead.
    pub fn with_kind(
        id: EntityId,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: i64,
        owner: &Owner,
        kind: PetKind,
    ) -> Result<Self, PetValidationError> {
        let species = kind.fixed_species().unwrap_or_default().to_string();
        Self::build(id, name.into(), species, breed.into(), age, owner.id, kind)
    }

    fn build(
        id: EntityId,
        name: String,
        species: String,
        breed: String,
        age: i64,
        owner_id: EntityId,
        kind: PetKind,
    ) -> Result<Self, PetValidationError> {
        validate_pet_fields(&name, &species, age)?;
        Ok(Self {
            id,
            name,
            species,
            breed,
            age,
            owner_id,
            created_at: Local::now().naive_local(),
            health_records: Vec::new(),
            vaccinations: Vec::new(),
            kind,
        })
    }

    /// Replace the construction timestamp, used when restoring persisted pets.
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn add_health_record(&mut self, record: HealthRecord) {
        debug!(pet = self.id, record = record.id, "Health record added for '{}'", self.name);
        self.health_records.push(record);
    }

    pub fn add_vaccination(&mut self, vaccination: Vaccination) {
        debug!(
            pet = self.id,
            vaccination = vaccination.id,
            "Vaccination '{}' added for '{}'",
            vaccination.name,
            self.name
        );
        self.vaccinations.push(vaccination);
    }

    /// Update name and/or age. An empty name is ignored; a negative age is
    /// rejected and leaves the pet unchanged.
    pub fn update_info(
        &mut self,
        name: Option<&str>,
        age: Option<i64>,
    ) -> Result<(), PetValidationError> {
        if let Some(age) = age {
            validate_age(age)?;
            self.age = age;
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.name = name.to_string();
        }
        debug!(pet = self.id, "Info for '{}' updated", self.name);
        Ok(())
    }

    /// Mark a dog as trained. Returns `false` for any other variant.
    pub fn train(&mut self) -> bool {
        match &mut self.kind {
            PetKind::Dog { trained } => {
                *trained = true;
                debug!(pet = self.id, "'{}' is trained", self.name);
                true
            }
            _ => false,
        }
    }

    /// Set the indoor flag of a cat. Returns `false` for any other variant.
    pub fn set_indoor(&mut self, indoor: bool) -> bool {
        match &mut self.kind {
            PetKind::Cat { is_indoor } => {
                *is_indoor = indoor;
                debug!(pet = self.id, indoor, "Indoor status of '{}' changed", self.name);
                true
            }
            _ => false,
        }
    }

    /// Whether this pet is a bird able to fly.
    pub fn fly(&self) -> bool {
        let flies = matches!(self.kind, PetKind::Bird { can_fly: true });
        debug!(pet = self.id, flies, "'{}' attempts to fly", self.name);
        flies
    }
}
