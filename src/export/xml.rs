//! XML exporter
//!
//! Layout:
//!
//! ```text
//! pet_system
//! ├── owners/owner[id,name,phone]/pets/pet_id
//! ├── pets/pet[id,name,species,breed,age,created_at,owner_id,type?,flag?]
//! │   ├── health_records/record[id,date,description,vet_name]
//! │   └── vaccinations/vaccination[id,name,date,next_due]
//! ├── vets/vet[id,name,specialization]/assigned_pets/pet_id
//! ├── shelters/shelter[id,name,address]/pets/pet_id
//! └── shops/shop[id,name,address]/pets/pet_id
//! ```

use crate::document::xml::{FALSE_TEXT, TRUE_TEXT};
use crate::document::{XmlElement, format_date, format_timestamp};
use crate::models::{
    EntityId, HealthRecord, Owner, Pet, PetShelter, PetShop, PetSystem, Vaccination, Vet,
};

pub const ROOT_ELEMENT: &str = "pet_system";

/// Exporter producing the XML element tree
#[derive(Debug, Default)]
pub struct XmlExporter;

impl XmlExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, system: &PetSystem) -> XmlElement {
        XmlElement::new(ROOT_ELEMENT)
            .with_child(section("owners", system.owners.iter().map(owner_element)))
            .with_child(section("pets", system.pets.iter().map(pet_element)))
            .with_child(section("vets", system.vets.iter().map(vet_element)))
            .with_child(section("shelters", system.shelters.iter().map(shelter_element)))
            .with_child(section("shops", system.shops.iter().map(shop_element)))
    }
}

fn section(name: &str, items: impl Iterator<Item = XmlElement>) -> XmlElement {
    let mut element = XmlElement::new(name);
    element.children.extend(items);
    element
}

fn id_list(name: &str, ids: &[EntityId]) -> XmlElement {
    section(
        name,
        ids.iter()
            .map(|id| XmlElement::new("pet_id").with_text(id.to_string())),
    )
}

fn bool_text(value: bool) -> &'static str {
    if value { TRUE_TEXT } else { FALSE_TEXT }
}

fn owner_element(owner: &Owner) -> XmlElement {
    XmlElement::new("owner")
        .with_attribute("id", owner.id.to_string())
        .with_attribute("name", owner.name.as_str())
        .with_attribute("phone", owner.phone.as_str())
        .with_child(id_list("pets", &owner.pets))
}

fn pet_element(pet: &Pet) -> XmlElement {
    let mut element = XmlElement::new("pet")
        .with_attribute("id", pet.id.to_string())
        .with_attribute("name", pet.name.as_str())
        .with_attribute("species", pet.species.as_str())
        .with_attribute("breed", pet.breed.as_str())
        .with_attribute("age", pet.age.to_string())
        .with_attribute("created_at", format_timestamp(&pet.created_at))
        .with_attribute("owner_id", pet.owner_id.to_string());

    if let (Some(tag), Some((flag, value))) = (pet.kind.type_tag(), pet.kind.flag()) {
        element.set_attribute("type", tag);
        element.set_attribute(flag, bool_text(value));
    }

    element
        .with_child(section(
            "health_records",
            pet.health_records.iter().map(record_element),
        ))
        .with_child(section(
            "vaccinations",
            pet.vaccinations.iter().map(vaccination_element),
        ))
}

fn record_element(record: &HealthRecord) -> XmlElement {
    XmlElement::new("record")
        .with_attribute("id", record.id.to_string())
        .with_attribute("date", format_date(&record.date))
        .with_attribute("description", record.description.as_str())
        .with_attribute("vet_name", record.vet_name.as_str())
}

fn vaccination_element(vaccination: &Vaccination) -> XmlElement {
    XmlElement::new("vaccination")
        .with_attribute("id", vaccination.id.to_string())
        .with_attribute("name", vaccination.name.as_str())
        .with_attribute("date", format_date(&vaccination.date))
        .with_attribute("next_due", format_date(&vaccination.next_due))
}

fn vet_element(vet: &Vet) -> XmlElement {
    XmlElement::new("vet")
        .with_attribute("id", vet.id.to_string())
        .with_attribute("name", vet.name.as_str())
        .with_attribute("specialization", vet.specialization.as_str())
        .with_child(id_list("assigned_pets", &vet.assigned_pets))
}

fn shelter_element(shelter: &PetShelter) -> XmlElement {
    XmlElement::new("shelter")
        .with_attribute("id", shelter.id.to_string())
        .with_attribute("name", shelter.name.as_str())
        .with_attribute("address", shelter.address.as_str())
        .with_child(id_list("pets", &shelter.pets))
}

fn shop_element(shop: &PetShop) -> XmlElement {
    XmlElement::new("shop")
        .with_attribute("id", shop.id.to_string())
        .with_attribute("name", shop.name.as_str())
        .with_attribute("address", shop.address.as_str())
        .with_child(id_list("pets", &shop.pets))
}
