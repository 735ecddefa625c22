//! Employee domain types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crewbase_core::{
    ABSENT_DATE, Department, EmployeeId, EmployeeStatus, Position, format_date, format_datetime,
};

use super::ShapeError;

/// A validated create-employee command, ready to insert.
///
/// Produced by the request validator; `status` is always forced to active
/// and `register_time` is stamped by the server, never taken from input.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub surname: String,
    pub position: Position,
    pub department: Department,
    pub phone_number: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub status: EmployeeStatus,
    pub description: String,
    pub register_time: NaiveDateTime,
}

/// An employee row as stored: integer codes, native temporal values.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub first_name: String,
    pub surname: String,
    pub position: i16,
    pub department: i16,
    pub phone_number: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub status: i16,
    pub description: String,
    pub register_time: NaiveDateTime,
}

/// An employee as surfaced to clients: labels and formatted strings.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub surname: String,
    pub position: String,
    pub department: String,
    pub phone_number: String,
    pub email: String,
    pub birth_date: String,
    pub status: String,
    pub description: String,
    pub register_time: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = ShapeError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            first_name: row.first_name,
            surname: row.surname,
            position: Position::from_code(row.position)?.response_label().to_string(),
            department: Department::from_code(row.department)?
                .response_label()
                .to_string(),
            phone_number: row.phone_number,
            email: row.email,
            birth_date: row
                .birth_date
                .map_or_else(|| ABSENT_DATE.to_string(), format_date),
            status: EmployeeStatus::from_code(row.status)?
                .response_label()
                .to_string(),
            description: row.description,
            register_time: format_datetime(row.register_time),
        })
    }
}
