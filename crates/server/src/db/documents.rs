//! Document approval record operations.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::DocumentRow;

/// Repository for document approval database operations.
pub struct DocumentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DocumentRepository<'a> {
    /// Create a new document repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
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
    ) -> Result<Vec<DocumentRow>, RepositoryError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, issuer, assignee, status, dayoff_start_date, dayoff_end_date, \
                    reason, created_at, updated_at \
             FROM document_approval OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows)
    }
}
