//! Import module tests

use pet_system_sdk::{
    DocumentFormat, ImportError, Owner, PetKind, PetSystem, PetValidationError,
    deserialize_from_str,
};
use serde_json::json;

fn json_document(pets: serde_json::Value, vets: serde_json::Value) -> String {
    json!({
        "owners": [{ "id": 1, "name": "A", "phone": "x", "pets": [1] }],
        "vets": vets,
        "shelters": [],
        "shops": [],
        "pets": pets
    })
    .to_string()
}

fn dog(id: i64, owner_id: i64, age: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "B",
        "species": "Dog",
        "breed": "Lab",
        "age": age,
        "created_at": "2024-01-10T09:00:00.250",
        "health_records": [],
        "vaccinations": [],
        "owner_id": owner_id,
        "type": "dog",
        "trained": true
    })
}

fn populated() -> PetSystem {
    let mut system = PetSystem::new();
    system.owners.push(Owner::new(42, "Existing", "+1"));
    system
}

mod reference_tests {
    use super::*;

    #[test]
    fn test_unknown_owner_fails_and_keeps_target() {
        let content = json_document(json!([dog(1, 1, 3), dog(2, 7, 4)]), json!([]));
        let mut system = populated();
        let before = system.clone();

        let err = deserialize_from_str(&content, DocumentFormat::Json, &mut system).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingReference {
                pet_id: 2,
                owner_id: 7
            }
        ));
        assert_eq!(system, before);
    }

    #[test]
    fn test_unknown_owner_in_xml_keeps_target() {
        let content = r#"<pet_system>
  <owners><owner id="1" name="A" phone="x"><pets/></owner></owners>
  <pets>
    <pet id="1" name="B" species="Dog" breed="Lab" age="3"
         created_at="2024-01-10T09:00:00" owner_id="7" type="dog" trained="True">
      <health_records/>
      <vaccinations/>
    </pet>
  </pets>
  <vets/>
  <shelters/>
  <shops/>
</pet_system>"#;
        let mut system = populated();
        let before = system.clone();

        let err = deserialize_from_str(content, DocumentFormat::Xml, &mut system).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingReference {
                pet_id: 1,
                owner_id: 7
            }
        ));
        assert_eq!(system, before);
    }

    #[test]
    fn test_unknown_vet_pet_is_dropped() {
        let vets = json!([
            { "id": 1, "name": "P", "specialization": "S", "assigned_pets": [1, 99] }
        ]);
        let content = json_document(json!([dog(1, 1, 3)]), vets);
        let mut system = populated();

        deserialize_from_str(&content, DocumentFormat::Json, &mut system).unwrap();
        assert_eq!(system.vets[0].assigned_pets, vec![1]);
        assert_eq!(system.owners.len(), 1);
        assert_eq!(system.owners[0].id, 1);
    }

    #[test]
    fn test_owner_pet_list_comes_from_pets() {
        let content = json!({
            "owners": [{ "id": 1, "name": "A", "phone": "x", "pets": [5, 6] }],
            "vets": [], "shelters": [], "shops": [],
            "pets": [dog(1, 1, 3)]
        })
        .to_string();
        let mut system = PetSystem::new();

        deserialize_from_str(&content, DocumentFormat::Json, &mut system).unwrap();
        assert_eq!(system.owners[0].pets, vec![1]);
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_negative_age_rejected() {
        let content = json_document(json!([dog(1, 1, -1)]), json!([]));
        let result = deserialize_from_str(&content, DocumentFormat::Json, &mut PetSystem::new());
        assert!(matches!(
            result,
            Err(ImportError::InvalidPet(PetValidationError::InvalidAge(-1)))
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut pet = dog(1, 1, 0);
        pet["name"] = json!("");
        let content = json_document(json!([pet]), json!([]));
        let result = deserialize_from_str(&content, DocumentFormat::Json, &mut PetSystem::new());
        assert!(matches!(
            result,
            Err(ImportError::InvalidPet(PetValidationError::InvalidField(_)))
        ));
    }

    #[test]
    fn test_fractional_timestamp_kept() {
        let content = json_document(json!([dog(1, 1, 0)]), json!([]));
        let mut system = PetSystem::new();
        deserialize_from_str(&content, DocumentFormat::Json, &mut system).unwrap();
        assert_eq!(
            system.pets[0].created_at.to_string(),
            "2024-01-10 09:00:00.250"
        );
    }
}

mod generic_pet_tests {
    use super::*;

    #[test]
    fn test_json_generic_without_species() {
        let mut pet = dog(1, 1, 2);
        let obj = pet.as_object_mut().unwrap();
        obj.remove("type");
        obj.remove("trained");
        obj.remove("species");
        let content = json_document(json!([pet]), json!([]));

        let result = deserialize_from_str(&content, DocumentFormat::Json, &mut PetSystem::new());
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
    }

    #[test]
    fn test_xml_generic_without_species() {
        let content = r#"<?xml version="1.0" encoding="utf-8"?>
<pet_system>
  <owners><owner id="1" name="A" phone="x"><pets/></owner></owners>
  <pets>
    <pet id="1" name="Hammy" breed="Syrian" age="1" created_at="2024-01-10T09:00:00" owner_id="1">
      <health_records/>
      <vaccinations/>
    </pet>
  </pets>
  <vets/>
  <shelters/>
  <shops/>
</pet_system>"#;
        let result = deserialize_from_str(content, DocumentFormat::Xml, &mut PetSystem::new());
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));

        let with_species =
            content.replace(r#"breed="Syrian""#, r#"species="Hamster" breed="Syrian""#);
        let mut system = PetSystem::new();
        deserialize_from_str(&with_species, DocumentFormat::Xml, &mut system).unwrap();
        assert_eq!(system.pets[0].kind, PetKind::Generic);
        assert_eq!(system.pets[0].species, "Hamster");
        assert_eq!(system.owners[0].pets, vec![1]);
    }

    #[test]
    fn test_malformed_text() {
        for (content, format) in [
            ("{\"owners\": [", DocumentFormat::Json),
            ("<pet_system><owners>", DocumentFormat::Xml),
        ] {
            let result = deserialize_from_str(content, format, &mut PetSystem::new());
            assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
        }
    }
}
