//! Employee record operations.
//!
//! Each method is one unit of work: acquire a connection, run one bound
//! statement, let the guard hand the connection back. No business logic
//! lives here beyond building the right parameterized statement; every
//! value is bound, never interpolated into the statement text.
//!
//! The point updates (`inactivate`, `promote`, `transfer`) do not verify
//! that the target id exists; updating an unknown id is a silent no-op.

use sqlx::PgPool;

use crewbase_core::{Department, EmployeeId, Position};

use super::RepositoryError;
use crate::models::{EmployeeRow, NewEmployee};

/// Repository for employee database operations.
pub struct EmployeeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EmployeeRepository<'a> {
    /// Create a new employee repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new employee and return the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, employee: &NewEmployee) -> Result<EmployeeId, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO employee_list \
             (first_name, surname, position, department, phone_number, email, \
              birth_date, status, description, register_time) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING id",
        )
        .bind(&employee.first_name)
        .bind(&employee.surname)
        .bind(employee.position.code())
        .bind(employee.department.code())
        .bind(&employee.phone_number)
        .bind(&employee.email)
        .bind(employee.birth_date)
        .bind(employee.status.code())
        .bind(&employee.description)
        .bind(employee.register_time)
        .fetch_one(&mut *conn)
        .await?;

        Ok(EmployeeId::new(id))
    }

    /// Point lookup by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: EmployeeId) -> Result<Option<EmployeeRow>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, first_name, surname, position, department, phone_number, \
                    email, birth_date, status, description, register_time \
             FROM employee_list WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row)
    }

    /// Unordered scan filtered by position code.
    ///
    /// Out-of-range codes are passed through to the filter and simply match
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_position(
        &self,
        position_code: i16,
    ) -> Result<Vec<EmployeeRow>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, first_name, surname, position, department, phone_number, \
                    email, birth_date, status, description, register_time \
             FROM employee_list WHERE position = $1",
        )
        .bind(position_code)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }

    /// Unordered scan filtered by department code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_department(
        &self,
        department_code: i16,
    ) -> Result<Vec<EmployeeRow>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, first_name, surname, position, department, phone_number, \
                    email, birth_date, status, description, register_time \
             FROM employee_list WHERE department = $1",
        )
        .bind(department_code)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }

    /// Windowed scan in the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<EmployeeRow>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, first_name, surname, position, department, phone_number, \
                    email, birth_date, status, description, register_time \
             FROM employee_list OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }

    /// Set an employee's status to inactive.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn inactivate(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("UPDATE employee_list SET status = 0 WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Change an employee's position.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn promote(
        &self,
        id: EmployeeId,
        position: Position,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("UPDATE employee_list SET position = $1 WHERE id = $2")
            .bind(position.code())
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Move an employee to another department.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn transfer(
        &self,
        id: EmployeeId,
        department: Department,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("UPDATE employee_list SET department = $1 WHERE id = $2")
            .bind(department.code())
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Point delete by id. Not routed through the HTTP surface; used by the
    /// CLI seed reset and by tests.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("DELETE FROM employee_list WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
