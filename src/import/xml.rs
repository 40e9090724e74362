//! XML importer
//!
//! Reads the `pet_system` element tree into [`SystemRecords`]. Every section
//! and every nested list element is required. Scalar fields are attributes;
//! a missing one is a malformed document. Variant flags are true only when
//! the attribute reads exactly `True`.

use super::ImportError;
use super::linker::{PetRecord, SystemRecords};
use crate::document::xml::TRUE_TEXT;
use crate::document::{XmlElement, parse_date, parse_timestamp};
use crate::export::xml::ROOT_ELEMENT;
use crate::models::{
    EntityId, HealthRecord, Owner, PetKind, PetShelter, PetShop, Vaccination, Vet,
};
use chrono::NaiveDate;

/// Importer reading the XML element tree
#[derive(Debug, Default)]
pub struct XmlImporter;

impl XmlImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, root: &XmlElement) -> Result<SystemRecords, ImportError> {
        if root.name != ROOT_ELEMENT {
            return Err(malformed(format!(
                "expected root element <{}>, found <{}>",
                ROOT_ELEMENT, root.name
            )));
        }

        Ok(SystemRecords {
            owners: read_section(root, "owners", read_owner)?,
            pets: read_section(root, "pets", read_pet)?,
            vets: read_section(root, "vets", read_vet)?,
            shelters: read_section(root, "shelters", read_shelter)?,
            shops: read_section(root, "shops", read_shop)?,
        })
    }
}

fn read_section<T>(
    parent: &XmlElement,
    name: &str,
    read: fn(&XmlElement) -> Result<T, ImportError>,
) -> Result<Vec<T>, ImportError> {
    section(parent, name)?.children.iter().map(read).collect()
}

fn section<'a>(parent: &'a XmlElement, name: &str) -> Result<&'a XmlElement, ImportError> {
    parent.child(name).ok_or_else(|| {
        malformed(format!("<{}> is missing child element <{}>", parent.name, name))
    })
}

fn read_owner(element: &XmlElement) -> Result<Owner, ImportError> {
    Ok(Owner::new(
        int_attr(element, "id")?,
        attr(element, "name")?,
        attr(element, "phone")?,
    ))
}

fn read_pet(element: &XmlElement) -> Result<PetRecord, ImportError> {
    let kind = match element.attribute("type") {
        Some("dog") => PetKind::Dog {
            trained: flag_attr(element, "trained"),
        },
        Some("cat") => PetKind::Cat {
            is_indoor: flag_attr(element, "is_indoor"),
        },
        Some("bird") => PetKind::Bird {
            can_fly: flag_attr(element, "can_fly"),
        },
        _ => PetKind::Generic,
    };

    let created_at = attr(element, "created_at")?;
    let created_at = parse_timestamp(created_at).ok_or_else(|| {
        malformed(format!("<{}> has invalid created_at '{}'", element.name, created_at))
    })?;

    Ok(PetRecord {
        id: int_attr(element, "id")?,
        name: attr(element, "name")?.to_string(),
        species: element.attribute("species").map(str::to_string),
        breed: attr(element, "breed")?.to_string(),
        age: int_attr(element, "age")?,
        owner_id: int_attr(element, "owner_id")?,
        created_at,
        kind,
        health_records: read_section(element, "health_records", read_health_record)?,
        vaccinations: read_section(element, "vaccinations", read_vaccination)?,
    })
}

fn read_health_record(element: &XmlElement) -> Result<HealthRecord, ImportError> {
    Ok(HealthRecord::new(
        int_attr(element, "id")?,
        date_attr(element, "date")?,
        attr(element, "description")?,
        attr(element, "vet_name")?,
    ))
}

fn read_vaccination(element: &XmlElement) -> Result<Vaccination, ImportError> {
    Ok(Vaccination::new(
        int_attr(element, "id")?,
        attr(element, "name")?,
        date_attr(element, "date")?,
        date_attr(element, "next_due")?,
    ))
}

fn read_vet(element: &XmlElement) -> Result<Vet, ImportError> {
    let mut vet = Vet::new(
        int_attr(element, "id")?,
        attr(element, "name")?,
        attr(element, "specialization")?,
    );
    vet.assigned_pets = pet_ids(element, "assigned_pets")?;
    Ok(vet)
}

fn read_shelter(element: &XmlElement) -> Result<PetShelter, ImportError> {
    let mut shelter = PetShelter::new(
        int_attr(element, "id")?,
        attr(element, "name")?,
        attr(element, "address")?,
    );
    shelter.pets = pet_ids(element, "pets")?;
    Ok(shelter)
}

fn read_shop(element: &XmlElement) -> Result<PetShop, ImportError> {
    let mut shop = PetShop::new(
        int_attr(element, "id")?,
        attr(element, "name")?,
        attr(element, "address")?,
    );
    shop.pets = pet_ids(element, "pets")?;
    Ok(shop)
}

/// Integer text of every child of the `name` list element.
fn pet_ids(element: &XmlElement, name: &str) -> Result<Vec<EntityId>, ImportError> {
    section(element, name)?
        .children
        .iter()
        .map(|child| {
            child
                .text()
                .and_then(|text| text.parse::<EntityId>().ok())
                .ok_or_else(|| {
                    malformed(format!(
                        "<{}> in <{}> must contain an integer id",
                        child.name, name
                    ))
                })
        })
        .collect()
}

fn attr<'a>(element: &'a XmlElement, key: &str) -> Result<&'a str, ImportError> {
    element.attribute(key).ok_or_else(|| {
        malformed(format!("<{}> is missing attribute '{}'", element.name, key))
    })
}

fn int_attr(element: &XmlElement, key: &str) -> Result<i64, ImportError> {
    let value = attr(element, key)?;
    value.trim().parse().map_err(|_| {
        malformed(format!(
            "<{}> attribute '{}' is not an integer: '{}'",
            element.name, key, value
        ))
    })
}

fn date_attr(element: &XmlElement, key: &str) -> Result<NaiveDate, ImportError> {
    let value = attr(element, key)?;
    parse_date(value).ok_or_else(|| {
        malformed(format!(
            "<{}> attribute '{}' is not a date: '{}'",
            element.name, key, value
        ))
    })
}

fn flag_attr(element: &XmlElement, key: &str) -> bool {
    element.attribute(key) == Some(TRUE_TEXT)
}

fn malformed(message: String) -> ImportError {
    ImportError::MalformedDocument(message)
}
