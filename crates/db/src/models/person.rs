//! Person models and DTOs.
//!
//! Covers the `persons` row, the create / full-replace / partial-patch
//! request payloads and the typed list filter.

use persons_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `persons` table.
///
/// Demographic fields are `None` when enrichment failed or was never run,
/// and are left out of the JSON encoding in that case.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /persons`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePerson {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "surname must not be empty"))]
    pub surname: String,
    pub patronymic: Option<String>,
}

/// Body of `PUT /persons/{id}`: every column is replaced.
///
/// Optional fields left out of the body are written as NULL. An `id` in the
/// body is ignored in favour of the path parameter.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePerson {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "surname must not be empty"))]
    pub surname: String,
    pub patronymic: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

/// Body of `PATCH /persons/{id}`: only the fields present are written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatchPerson {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "surname must not be empty"))]
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

impl PatchPerson {
    /// `true` when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.patronymic.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.nationality.is_none()
    }
}

/// Fully-populated insert payload: the create request plus whatever
/// enrichment produced.
#[derive(Debug, Clone, Default)]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Optional predicates for listing persons. `None` fields are not filtered.
///
/// `name` and `surname` match case-insensitive substrings; the rest match
/// exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_is_detected() {
        assert!(PatchPerson::default().is_empty());
    }

    #[test]
    fn patch_with_any_field_is_not_empty() {
        let patch = PatchPerson {
            age: Some(30),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn create_rejects_blank_name() {
        let input = CreatePerson {
            name: String::new(),
            surname: "Ushakov".to_string(),
            patronymic: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn patch_rejects_blank_surname_only_when_present() {
        let absent = PatchPerson {
            age: Some(40),
            ..Default::default()
        };
        assert!(absent.validate().is_ok());

        let blank = PatchPerson {
            surname: Some(String::new()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let person = Person {
            id: 7,
            name: "Dmitriy".to_string(),
            surname: "Ushakov".to_string(),
            patronymic: None,
            age: Some(42),
            gender: None,
            nationality: Some("RU".to_string()),
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["age"], 42);
        assert!(json.get("patronymic").is_none());
        assert!(json.get("gender").is_none());
    }
}
