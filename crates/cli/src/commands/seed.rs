//! Seed command: sample employees and document approvals.
//!
//! `--reset` clears existing records first. Employees are removed through
//! the repository's point delete; documents with a single bulk statement,
//! since the API surface treats them as read-only.

use chrono::{NaiveDate, Utc};

use crewbase_core::{Department, DocumentStatus, EmployeeId, EmployeeStatus, Position};
use crewbase_server::config::ServerConfig;
use crewbase_server::db::{self, EmployeeRepository};
use crewbase_server::models::NewEmployee;

const SAMPLE_EMPLOYEES: &[(&str, &str, Position, Department, &str, &str)] = &[
    (
        "Alice",
        "Kim",
        Position::Director,
        Department::Hr,
        "010-1111-0001",
        "alice.kim@example.com",
    ),
    (
        "Ben",
        "Park",
        Position::Manager,
        Department::It,
        "010-1111-0002",
        "ben.park@example.com",
    ),
    (
        "Chloe",
        "Lee",
        Position::Employee,
        Department::It,
        "010-1111-0003",
        "chloe.lee@example.com",
    ),
    (
        "Dan",
        "Choi",
        Position::Employee,
        Department::Sales,
        "010-1111-0004",
        "dan.choi@example.com",
    ),
];

/// Seed the active profile's database.
///
/// # Errors
///
/// Returns an error if configuration loading, the connection, or any
/// statement fails.
pub async fn run(reset: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load()?;
    let pool = db::create_pool(&config.db).await?;
    let employees = EmployeeRepository::new(&pool);

    if reset {
        tracing::info!("Clearing existing records");
        let existing = employees.list(0, i64::MAX).await?;
        for row in existing {
            employees.delete(row.id).await?;
        }
        sqlx::query("DELETE FROM document_approval").execute(&pool).await?;
    }

    let mut ids: Vec<EmployeeId> = Vec::with_capacity(SAMPLE_EMPLOYEES.len());
    for (first_name, surname, position, department, phone, email) in SAMPLE_EMPLOYEES {
        let id = employees
            .create(&NewEmployee {
                first_name: (*first_name).to_string(),
                surname: (*surname).to_string(),
                position: *position,
                department: *department,
                phone_number: (*phone).to_string(),
                email: (*email).to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
                status: EmployeeStatus::Active,
                description: String::new(),
                register_time: Utc::now().naive_utc(),
            })
            .await?;
        tracing::info!(employee_id = %id, first_name, "Seeded employee");
        ids.push(id);
    }

    if let (Some(issuer), Some(assignee)) = (ids.first(), ids.get(1)) {
        seed_document(
            &pool,
            *issuer,
            *assignee,
            DocumentStatus::Pending,
            "2025-09-01",
            "2025-09-05",
            "summer vacation",
        )
        .await?;
        seed_document(
            &pool,
            *assignee,
            *issuer,
            DocumentStatus::Approved,
            "2025-07-14",
            "2025-07-18",
            "family trip",
        )
        .await?;
    }

    tracing::info!("Seeding complete");
    Ok(())
}

async fn seed_document(
    pool: &sqlx::PgPool,
    issuer: EmployeeId,
    assignee: EmployeeId,
    status: DocumentStatus,
    start: &str,
    end: &str,
    reason: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = crewbase_core::parse_date(start)?;
    let end = crewbase_core::parse_date(end)?;
    let now = Utc::now().naive_utc();

    sqlx::query(
        "INSERT INTO document_approval \
         (issuer, assignee, status, dayoff_start_date, dayoff_end_date, reason, \
          created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(issuer)
    .bind(assignee)
    .bind(status.code())
    .bind(start)
    .bind(end)
    .bind(reason)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}
