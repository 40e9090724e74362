//! JSON importer
//!
//! Reads the JSON document tree into [`SystemRecords`]. All five top-level
//! arrays are required. Pet variant flags fall back to the variant's usual
//! value when absent: `trained` false, `is_indoor` and `can_fly` true.

use super::ImportError;
use super::linker::{PetRecord, SystemRecords};
use crate::document::parse_timestamp;
use crate::models::{HealthRecord, Owner, PetKind, PetShelter, PetShop, Vaccination, Vet};
use serde::Deserialize;
use serde_json::{Map, Value};

type Object = Map<String, Value>;

/// Importer reading the JSON document tree
#[derive(Debug, Default)]
pub struct JsonImporter;

impl JsonImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, document: &Value) -> Result<SystemRecords, ImportError> {
        let root = document
            .as_object()
            .ok_or_else(|| malformed("JSON document root must be an object".to_string()))?;

        Ok(SystemRecords {
            owners: read_entities::<Owner>(root, "owners", "owner")?,
            pets: array(root, "pets", "document")?
                .iter()
                .map(read_pet)
                .collect::<Result<_, _>>()?,
            vets: read_entities::<Vet>(root, "vets", "vet")?,
            shelters: read_entities::<PetShelter>(root, "shelters", "shelter")?,
            shops: read_entities::<PetShop>(root, "shops", "shop")?,
        })
    }
}

/// Read an array of entities whose JSON shape matches their serde derive.
fn read_entities<'a, T: Deserialize<'a>>(
    root: &'a Object,
    key: &str,
    entity: &str,
) -> Result<Vec<T>, ImportError> {
    array(root, key, "document")?
        .iter()
        .map(|value| {
            T::deserialize(value).map_err(|e| malformed(format!("invalid {}: {}", entity, e)))
        })
        .collect()
}

fn read_pet(value: &Value) -> Result<PetRecord, ImportError> {
    let obj = value
        .as_object()
        .ok_or_else(|| malformed("pet entry must be an object".to_string()))?;
    let id = int_field(obj, "id", "pet")?;
    let context = format!("pet {}", id);

    let kind = match obj.get("type").and_then(Value::as_str) {
        Some("dog") => PetKind::Dog {
            trained: bool_field(obj, "trained", false, &context)?,
        },
        Some("cat") => PetKind::Cat {
            is_indoor: bool_field(obj, "is_indoor", true, &context)?,
        },
        Some("bird") => PetKind::Bird {
            can_fly: bool_field(obj, "can_fly", true, &context)?,
        },
        _ => PetKind::Generic,
    };

    let created_at = str_field(obj, "created_at", &context)?;
    let created_at = parse_timestamp(created_at).ok_or_else(|| {
        malformed(format!("{}: invalid 'created_at' timestamp '{}'", context, created_at))
    })?;

    let species = match obj.get("species") {
        None | Some(Value::Null) => None,
        Some(_) => Some(str_field(obj, "species", &context)?.to_string()),
    };

    Ok(PetRecord {
        id,
        name: str_field(obj, "name", &context)?.to_string(),
        species,
        breed: str_field(obj, "breed", &context)?.to_string(),
        age: int_field(obj, "age", &context)?,
        owner_id: int_field(obj, "owner_id", &context)?,
        created_at,
        kind,
        health_records: nested::<HealthRecord>(obj, "health_records", &context)?,
        vaccinations: nested::<Vaccination>(obj, "vaccinations", &context)?,
    })
}

fn nested<'a, T: Deserialize<'a>>(
    obj: &'a Object,
    key: &str,
    context: &str,
) -> Result<Vec<T>, ImportError> {
    array(obj, key, context)?
        .iter()
        .map(|value| {
            T::deserialize(value)
                .map_err(|e| malformed(format!("{}: invalid entry in '{}': {}", context, key, e)))
        })
        .collect()
}

fn array<'a>(obj: &'a Object, key: &str, context: &str) -> Result<&'a Vec<Value>, ImportError> {
    obj.get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(format!("{}: missing or non-array '{}'", context, key)))
}

fn str_field<'a>(obj: &'a Object, key: &str, context: &str) -> Result<&'a str, ImportError> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| malformed(format!("{}: missing or non-string '{}'", context, key)))
}

fn int_field(obj: &Object, key: &str, context: &str) -> Result<i64, ImportError> {
    obj.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| malformed(format!("{}: missing or non-integer '{}'", context, key)))
}

fn bool_field(obj: &Object, key: &str, default: bool, context: &str) -> Result<bool, ImportError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(malformed(format!("{}: non-boolean '{}'", context, key))),
    }
}

fn malformed(message: String) -> ImportError {
    ImportError::MalformedDocument(message)
}
