//! Storage backend tests through the saver and loader

use pet_system_sdk::{
    FileSystemStorageBackend, ImportError, MemoryStorageBackend, Owner, PersistConfig, Pet,
    PetSystem, StorageBackend, StorageError, SystemLoader, SystemSaver,
};
use tempfile::TempDir;

fn sample_system() -> PetSystem {
    let mut owner = Owner::new(1, "Ivanov", "+7");
    let cat = Pet::cat(1, "Murka", "Siamese", 2, &owner, true).unwrap();
    owner.add_pet(&cat);
    PetSystem {
        owners: vec![owner],
        pets: vec![cat],
        ..PetSystem::default()
    }
}

mod filesystem_tests {
    use super::*;

    #[test]
    fn test_save_and_load_both_formats() {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorageBackend::new(temp.path());
        let saver = SystemSaver::new(&storage);
        let loader = SystemLoader::new(&storage);
        let system = sample_system();

        saver.save_to_json(&system, "snapshots/pets.json").unwrap();
        saver.save_to_xml(&system, "snapshots/pets.xml").unwrap();
        assert!(temp.path().join("snapshots/pets.xml").is_file());

        for path in ["snapshots/pets.json", "snapshots/pets.xml"] {
            let mut restored = PetSystem::new();
            loader.load_auto(path, &mut restored).unwrap();
            assert_eq!(restored, system);
        }
    }

    #[test]
    fn test_traversal_rejected() {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorageBackend::new(temp.path());

        let result = SystemSaver::new(&storage).save_to_json(&sample_system(), "../escape.json");
        assert!(result.is_err());
        assert!(!temp.path().parent().unwrap().join("escape.json").exists());

        let result =
            SystemLoader::new(&storage).load_from_json("../escape.json", &mut PetSystem::new());
        assert!(matches!(
            result,
            Err(ImportError::Storage(StorageError::PermissionDenied(_)))
        ));
    }

    #[test]
    fn test_delete_and_exists() {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorageBackend::new(temp.path());

        assert!(!storage.file_exists("pets.json").unwrap());
        SystemSaver::new(&storage)
            .save_to_json(&sample_system(), "pets.json")
            .unwrap();
        assert!(storage.file_exists("pets.json").unwrap());

        storage.delete_file("pets.json").unwrap();
        assert!(!storage.file_exists("pets.json").unwrap());
        assert!(matches!(
            storage.delete_file("pets.json"),
            Err(StorageError::FileNotFound(_))
        ));
    }
}

mod memory_tests {
    use super::*;

    #[test]
    fn test_compact_round_trip() {
        let storage = MemoryStorageBackend::new();
        let system = sample_system();
        let config = PersistConfig::builder().pretty(false).build();
        SystemSaver::with_config(&storage, config)
            .save_to_xml(&system, "pets.xml")
            .unwrap();

        let text = String::from_utf8(storage.read_file("pets.xml").unwrap()).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.contains(r#"type="cat" is_indoor="True""#));

        let mut restored = PetSystem::new();
        SystemLoader::new(&storage)
            .load_from_xml("pets.xml", &mut restored)
            .unwrap();
        assert_eq!(restored, system);
    }

    #[test]
    fn test_failed_load_keeps_target() {
        let storage = MemoryStorageBackend::new();
        storage
            .write_file("pets.xml", b"<pet_system><owners/></pet_system>")
            .unwrap();

        let mut system = sample_system();
        let before = system.clone();
        let result = SystemLoader::new(&storage).load_from_xml("pets.xml", &mut system);
        assert!(matches!(result, Err(ImportError::MalformedDocument(_))));
        assert_eq!(system, before);
    }
}
