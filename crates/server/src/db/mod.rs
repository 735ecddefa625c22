//! Database access: connection pool lifecycle and record operations.
//!
//! # Pool discipline
//!
//! Every repository method is one unit of work: it acquires exactly one
//! connection from the pool, runs exactly one statement on it, and the
//! connection guard returns the connection on every exit path - success,
//! query failure, or panic unwind. Statements run under auto-commit; there
//! are no multi-statement transactions.
//!
//! Acquisition blocks until a connection frees up. There is deliberately no
//! practical per-request acquire timeout; under sustained load with all
//! connections busy, requests queue rather than fail fast. Known exhaustion
//! risk, kept as-is.
//!
//! # Migrations
//!
//! Migrations live in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p crewbase-cli -- migrate
//! ```

pub mod documents;
pub mod employees;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;

pub use documents::DocumentRepository;
pub use employees::EmployeeRepository;

use crate::config::DbConfig;

/// How many times startup tries to reach the database before giving up.
const CONNECT_ATTEMPTS: u32 = 5;

/// Fixed delay between startup connection attempts.
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Upper bound sqlx requires on acquisition; effectively "block until free".
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3600);

/// Errors that can occur during repository operations.
///
/// Failures never escape a unit of work as a panic; they surface here so the
/// handler can tell "the operation failed" apart from "the operation
/// legitimately returned nothing".
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Build connection options from the discrete settings.
fn connect_options(db: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&db.host)
        .port(db.port)
        .username(&db.user)
        .password(db.password.expose_secret())
        .database(&db.database)
}

/// Create a `PostgreSQL` connection pool and verify it with a ping.
///
/// # Errors
///
/// Returns `sqlx::Error` if the pool cannot be created or the ping fails.
pub async fn create_pool(db: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .min_connections(db.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(connect_options(db))
        .await?;

    // One round trip so a wrong host/credential fails here, not on the
    // first request.
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

/// Create the pool, retrying a fixed number of times with a fixed delay.
///
/// Exhausting the retries is fatal to the process: the caller logs and
/// exits, since the service cannot function without its store.
///
/// # Errors
///
/// Returns the final `sqlx::Error` after all attempts fail.
pub async fn create_pool_with_retry(db: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;
    loop {
        match create_pool(db).await {
            Ok(pool) => {
                tracing::info!(
                    host = %db.host,
                    port = db.port,
                    database = %db.database,
                    "Database connection pool created"
                );
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(
                    attempt,
                    max_attempts = CONNECT_ATTEMPTS,
                    error = %e,
                    "Database connection failed, retrying in {}s",
                    CONNECT_RETRY_DELAY.as_secs()
                );
                tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
