//! Department form input.

use super::{require_text, try_parse_id, FormValidator, ValidationError};
use crate::model::department::Department;

/// Raw department form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentForm {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl DepartmentForm {
    /// Populates form fields from an entity; a transient entity yields an
    /// empty id field.
    pub fn from_entity(department: &Department) -> Self {
        Self {
            id: Some(department.id.map(|id| id.to_string()).unwrap_or_default()),
            name: Some(department.name.clone()),
        }
    }
}

/// Validates department input.
///
/// Name length is not checked here; the store rejects names over 30 chars.
pub fn validate_department(form: &DepartmentForm) -> Result<Department, ValidationError> {
    let mut errors = ValidationError::new();

    let id = try_parse_id(form.id.as_deref());
    let name = require_text(&mut errors, "name", form.name.as_deref());

    errors.into_result(Department {
        id,
        name: name.unwrap_or_default().to_string(),
    })
}

impl FormValidator for DepartmentForm {
    type Entity = Department;

    fn validate(&self) -> Result<Department, ValidationError> {
        validate_department(self)
    }
}
