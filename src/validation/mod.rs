//! Validation functionality
//!
//! Provides the field checks applied when a pet is constructed:
//! - age must not be negative
//! - name and species must not be empty

pub mod pets;

pub use pets::{PetValidationError, validate_age, validate_pet_fields};
