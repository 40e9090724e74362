//! Pet field validation
//!
//! Every `Pet` constructor runs these checks, including the ones the
//! deserializer uses, so a loaded document cannot produce a pet that could
//! not have been built directly.

/// Error raised when a pet is built with invalid fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetValidationError {
    #[error("Invalid age: {0} (age cannot be negative)")]
    InvalidAge(i64),
    #[error("Invalid field: {0} must not be empty")]
    InvalidField(String),
}

pub fn validate_age(age: i64) -> Result<(), PetValidationError> {
    if age < 0 {
        return Err(PetValidationError::InvalidAge(age));
    }
    Ok(())
}

/// Check the fields every pet must satisfy. Age is checked first.
pub fn validate_pet_fields(name: &str, species: &str, age: i64) -> Result<(), PetValidationError> {
    validate_age(age)?;
    if name.is_empty() {
        return Err(PetValidationError::InvalidField("name".to_string()));
    }
    if species.is_empty() {
        return Err(PetValidationError::InvalidField("species".to_string()));
    }
    Ok(())
}
