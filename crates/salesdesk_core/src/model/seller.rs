//! Seller (sales agent) entity.
//!
//! # Invariants
//! - `department`, when set, must reference a persisted department; the store
//!   rejects dangling references as integrity violations.
//! - The seller owns only the department reference; a reloaded seller carries
//!   the department's current stored name.
//! - `birth_date` is a calendar date without time zone.

use super::department::Department;
use super::entity::{Entity, EntityId, EntityKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display/input format for birth dates (`dd/MM/yyyy`).
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub base_salary: f64,
    pub department: Option<Department>,
}

impl Seller {
    /// Creates a transient seller with no birth date, salary or department.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Identity of the referenced department, if any.
    pub fn department_id(&self) -> Option<EntityId> {
        self.department.as_ref().and_then(|department| department.id)
    }

    /// Birth date rendered as `dd/MM/yyyy`, empty when unknown.
    pub fn birth_date_display(&self) -> String {
        self.birth_date
            .map(|date| date.format(BIRTH_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Base salary rendered with two decimals and `.` separator.
    pub fn base_salary_display(&self) -> String {
        format!("{:.2}", self.base_salary)
    }
}

impl Entity for Seller {
    const KIND: EntityKind = EntityKind::Seller;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
