//! Seller form input.
//!
//! Every field is checked even after an earlier one failed, so the caller can
//! render all messages at once.

use super::{
    require_text, try_parse_id, FormValidator, ValidationError, MSG_INVALID_DATE,
    MSG_INVALID_EMAIL, MSG_INVALID_NUMBER,
};
use crate::model::department::Department;
use crate::model::seller::{Seller, BIRTH_DATE_FORMAT};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Raw seller form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// `dd/MM/yyyy`.
    pub birth_date: Option<String>,
    pub base_salary: Option<String>,
    /// Selected from the department list, not typed.
    pub department: Option<Department>,
}

impl SellerForm {
    /// Populates form fields from an entity.
    pub fn from_entity(seller: &Seller) -> Self {
        Self {
            id: Some(seller.id.map(|id| id.to_string()).unwrap_or_default()),
            name: Some(seller.name.clone()),
            email: Some(seller.email.clone()),
            birth_date: Some(seller.birth_date_display()),
            base_salary: Some(seller.base_salary_display()),
            department: seller.department.clone(),
        }
    }
}

pub fn validate_seller(form: &SellerForm) -> Result<Seller, ValidationError> {
    let mut errors = ValidationError::new();

    let id = try_parse_id(form.id.as_deref());
    let name = require_text(&mut errors, "name", form.name.as_deref());

    let email = require_text(&mut errors, "email", form.email.as_deref());
    if let Some(text) = email {
        if !EMAIL_RE.is_match(text.trim()) {
            errors.add_error("email", MSG_INVALID_EMAIL);
        }
    }

    let birth_date = require_text(&mut errors, "birth_date", form.birth_date.as_deref())
        .and_then(|text| match parse_birth_date(text) {
            Some(date) => Some(date),
            None => {
                errors.add_error("birth_date", MSG_INVALID_DATE);
                None
            }
        });

    let base_salary = require_text(&mut errors, "base_salary", form.base_salary.as_deref())
        .and_then(|text| match parse_salary(text) {
            Some(value) => Some(value),
            None => {
                errors.add_error("base_salary", MSG_INVALID_NUMBER);
                None
            }
        });

    errors.into_result(Seller {
        id,
        name: name.unwrap_or_default().to_string(),
        email: email.unwrap_or_default().trim().to_string(),
        birth_date,
        base_salary: base_salary.unwrap_or_default(),
        department: form.department.clone(),
    })
}

impl FormValidator for SellerForm {
    type Entity = Seller;

    fn validate(&self) -> Result<Seller, ValidationError> {
        validate_seller(self)
    }
}

fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Accepts `.` or `,` as decimal separator; rejects NaN and infinities.
fn parse_salary(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{parse_birth_date, parse_salary};
    use chrono::NaiveDate;

    #[test]
    fn parse_birth_date_uses_day_month_year() {
        assert_eq!(
            parse_birth_date("25/12/1990"),
            NaiveDate::from_ymd_opt(1990, 12, 25)
        );
        assert_eq!(parse_birth_date("1990-12-25"), None);
        assert_eq!(parse_birth_date("31/02/1990"), None);
    }

    #[test]
    fn parse_salary_accepts_both_separators() {
        assert_eq!(parse_salary("3000.50"), Some(3000.5));
        assert_eq!(parse_salary(" 3000,50 "), Some(3000.5));
        assert_eq!(parse_salary("abc"), None);
        assert_eq!(parse_salary("inf"), None);
    }
}
