//! Health record and vaccination models for the SDK

use super::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Entry in a pet's medical history. `vet_name` is free text, not a link to
/// a [`super::Vet`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthRecord {
    pub id: EntityId,
    pub date: NaiveDate,
    pub description: String,
    pub vet_name: String,
}

impl HealthRecord {
    pub fn new(
        id: EntityId,
        date: NaiveDate,
        description: impl Into<String>,
        vet_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            vet_name: vet_name.into(),
        }
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        debug!(record = self.id, "Description updated: {}", self.description);
    }
}

/// A vaccination and the date the next dose is due.
///
/// `next_due` is expected to be on or after `date` but this is not checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vaccination {
    pub id: EntityId,
    pub name: String,
    pub date: NaiveDate,
    pub next_due: NaiveDate,
}

impl Vaccination {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        date: NaiveDate,
        next_due: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            next_due,
        }
    }

    pub fn update_due_date(&mut self, next_due: NaiveDate) {
        self.next_due = next_due;
        debug!(vaccination = self.id, %next_due, "Next due date of '{}' updated", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vaccination_serializes_dates_as_iso() {
        let vac = Vaccination::new(
            1,
            "Rabies",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        let value = serde_json::to_value(&vac).unwrap();
        assert_eq!(value["date"], "2024-01-15");
        assert_eq!(value["next_due"], "2025-01-15");
    }

    #[test]
    fn test_due_date_before_date_is_accepted() {
        let mut vac = Vaccination::new(
            1,
            "Rabies",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        vac.update_due_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(vac.next_due < vac.date);
    }

    #[test]
    fn test_update_description() {
        let mut record = HealthRecord::new(
            1,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            "Checkup",
            "Dr. Petrov",
        );
        record.update_description("Annual checkup");
        assert_eq!(record.description, "Annual checkup");
    }
}
