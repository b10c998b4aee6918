//! Form input validation.
//!
//! # Responsibility
//! - Turn raw form strings into entities, or into one aggregated error that
//!   names every invalid field.
//!
//! # Invariants
//! - Validators evaluate every field rule before returning.
//! - Ordinary invalid input never panics and never touches storage.
//! - Unparsable identity text means "new record", not an error.

use crate::model::entity::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_form;
pub mod seller_form;

pub use department_form::{validate_department, DepartmentForm};
pub use seller_form::{validate_seller, SellerForm};

pub const MSG_REQUIRED: &str = "Field can't be empty";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";
pub const MSG_INVALID_DATE: &str = "Invalid date";
pub const MSG_INVALID_NUMBER: &str = "Invalid number";

/// Aggregated field errors from one validation attempt.
///
/// Keys are unique; insertion order is kept for deterministic display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<(String, String)>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a field error. Re-adding a field replaces its message in place.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.errors.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = message,
            None => self.errors.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    /// `Ok(value)` when no error was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("validation failed")?;
        for (index, (field, message)) in self.errors.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{field}: {message}")?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Raw form that can be validated into an entity.
pub trait FormValidator {
    type Entity;

    fn validate(&self) -> Result<Self::Entity, ValidationError>;
}

/// Parses identity text; anything unparsable becomes "no identity".
pub fn try_parse_id(value: Option<&str>) -> Option<EntityId> {
    value.and_then(|text| text.trim().parse::<EntityId>().ok())
}

/// Returns the raw text when it has non-whitespace content, recording
/// [`MSG_REQUIRED`] for `field` otherwise.
pub(crate) fn require_text<'a>(
    errors: &mut ValidationError,
    field: &str,
    value: Option<&'a str>,
) -> Option<&'a str> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.add_error(field, MSG_REQUIRED);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{try_parse_id, ValidationError};

    #[test]
    fn add_error_keeps_insertion_order_and_unique_keys() {
        let mut errors = ValidationError::new();
        errors.add_error("name", "first");
        errors.add_error("email", "second");
        errors.add_error("name", "replaced");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "email"]);
        assert_eq!(errors.get("name"), Some("replaced"));
    }

    #[test]
    fn display_lists_every_field() {
        let mut errors = ValidationError::new();
        errors.add_error("name", "Field can't be empty");
        errors.add_error("email", "Invalid email");

        assert_eq!(
            errors.to_string(),
            "validation failed: name: Field can't be empty; email: Invalid email"
        );
    }

    #[test]
    fn into_result_is_ok_only_when_empty() {
        assert_eq!(ValidationError::new().into_result(7), Ok(7));

        let mut errors = ValidationError::new();
        errors.add_error("name", "x");
        assert!(errors.into_result(7).is_err());
    }

    #[test]
    fn unparsable_id_is_treated_as_absent() {
        assert_eq!(try_parse_id(Some("42")), Some(42));
        assert_eq!(try_parse_id(Some(" 7 ")), Some(7));
        assert_eq!(try_parse_id(Some("")), None);
        assert_eq!(try_parse_id(Some("null")), None);
        assert_eq!(try_parse_id(Some("4x")), None);
        assert_eq!(try_parse_id(None), None);
    }
}
