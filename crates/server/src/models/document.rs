//! Document approval domain types.
//!
//! Documents are read-only through the API surface; only the listing path
//! touches them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crewbase_core::{DocumentId, DocumentStatus, EmployeeId, format_date, format_datetime};

use super::ShapeError;

/// A document approval row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: DocumentId,
    pub issuer: EmployeeId,
    pub assignee: EmployeeId,
    pub status: i16,
    pub dayoff_start_date: NaiveDate,
    pub dayoff_end_date: NaiveDate,
    pub reason: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A document approval as surfaced to clients.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub issuer: EmployeeId,
    pub assignee: EmployeeId,
    pub status: String,
    pub dayoff_start_date: String,
    pub dayoff_end_date: String,
    pub reason: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<DocumentRow> for Document {
    type Error = ShapeError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            issuer: row.issuer,
            assignee: row.assignee,
            status: DocumentStatus::from_code(row.status)?
                .response_label()
                .to_string(),
            dayoff_start_date: format_date(row.dayoff_start_date),
            dayoff_end_date: format_date(row.dayoff_end_date),
            reason: row.reason,
            created_at: format_datetime(row.created_at),
            updated_at: format_datetime(row.updated_at),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_row() -> DocumentRow {
        let day = NaiveDate::from_ymd_opt(2025, 7, 21).unwrap();
        DocumentRow {
            id: DocumentId::new(4),
            issuer: EmployeeId::new(2),
            assignee: EmployeeId::new(3),
            status: 0,
            dayoff_start_date: day,
            dayoff_end_date: NaiveDate::from_ymd_opt(2025, 7, 25).unwrap(),
            reason: "summer vacation".to_string(),
            created_at: day.and_hms_opt(10, 0, 0).unwrap(),
            updated_at: day.and_hms_opt(10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_shape_document() {
        let document = Document::try_from(sample_row()).unwrap();
        assert_eq!(document.status, "Pending");
        assert_eq!(document.dayoff_start_date, "2025-07-21");
        assert_eq!(document.dayoff_end_date, "2025-07-25");
        assert_eq!(document.created_at, "2025-07-21 10:00:00");
    }

    #[test]
    fn test_shape_rejects_corrupt_status() {
        let mut row = sample_row();
        row.status = 5;
        assert!(Document::try_from(row).is_err());
    }
}
