//! Output formatting for CLI

use crate::models::{PetKind, PetSystem};

/// Entity counts followed by one line per pet.
pub fn format_summary(system: &PetSystem) -> String {
    let mut output = String::new();

    output.push_str(&format!("Owners:   {}\n", system.owners.len()));
    output.push_str(&format!("Pets:     {}\n", system.pets.len()));
    output.push_str(&format!("Vets:     {}\n", system.vets.len()));
    output.push_str(&format!("Shelters: {}\n", system.shelters.len()));
    output.push_str(&format!("Shops:    {}\n", system.shops.len()));

    if system.pets.is_empty() {
        return output;
    }

    output.push_str("\nPets:\n");
    for pet in &system.pets {
        if let Some(info) = system.pet_info(pet.id) {
            output.push_str(&format!("  {}", info));
        }
        match pet.kind {
            PetKind::Generic => {}
            PetKind::Dog { trained } => output.push_str(&format!(", trained: {}", trained)),
            PetKind::Cat { is_indoor } => output.push_str(&format!(", indoor: {}", is_indoor)),
            PetKind::Bird { can_fly } => output.push_str(&format!(", can fly: {}", can_fly)),
        }
        output.push('\n');
    }

    output
}
