//! Request validation for the employee creation form.
//!
//! The input is the raw field map, not a deserialized struct, so that a
//! request missing several required fields reports **all** of them in one
//! failure instead of stopping at the first. Present-but-invalid values
//! (bad enum label, malformed date, `@`-less email) carry the specific
//! message for that field.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use thiserror::Error;

use crewbase_core::{Department, EmployeeStatus, Position, parse_date};

use crate::models::NewEmployee;

/// Fields that must be present and non-empty on creation.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "first_name",
    "position",
    "department",
    "phone_number",
    "email",
];

/// A request rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Every required field absent from the input, order-independent.
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A present value that failed its field's check.
    #[error("{0}")]
    InvalidValue(String),
}

/// Look up a field, treating whitespace-only values as absent.
fn field<'a>(fields: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Validate a raw creation form into a [`NewEmployee`] command.
///
/// `register_time` is stamped by the caller (current UTC time at the
/// request boundary) so this function stays pure.
///
/// # Errors
///
/// Returns [`ValidationFailure::MissingFields`] naming every absent
/// required field, or [`ValidationFailure::InvalidValue`] for the first
/// present-but-invalid value.
pub fn validate_create_employee(
    fields: &HashMap<String, String>,
    register_time: NaiveDateTime,
) -> Result<NewEmployee, ValidationFailure> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|name| field(fields, name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationFailure::MissingFields(missing));
    }

    // The missing check above guarantees the required fields resolve.
    let first_name = field(fields, "first_name").unwrap_or_default().to_string();
    let phone_number = field(fields, "phone_number").unwrap_or_default().to_string();
    let email = field(fields, "email").unwrap_or_default().to_string();
    if !email.contains('@') {
        return Err(ValidationFailure::InvalidValue(
            "Invalid email address".to_string(),
        ));
    }

    let position = Position::parse_request(field(fields, "position").unwrap_or_default())
        .map_err(|e| ValidationFailure::InvalidValue(e.to_string()))?;
    let department = Department::parse_request(field(fields, "department").unwrap_or_default())
        .map_err(|e| ValidationFailure::InvalidValue(e.to_string()))?;

    let birth_date = match field(fields, "birth_date") {
        None => None,
        Some(raw) => Some(parse_date(raw).map_err(|_| {
            ValidationFailure::InvalidValue(
                "Invalid birth date format. Expected YYYY-MM-DD.".to_string(),
            )
        })?),
    };

    Ok(NewEmployee {
        first_name,
        surname: field(fields, "surname").unwrap_or_default().to_string(),
        position,
        department,
        phone_number,
        email,
        birth_date,
        status: EmployeeStatus::Active,
        description: field(fields, "description").unwrap_or_default().to_string(),
        register_time,
    })
}
