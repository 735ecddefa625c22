//! Database migration command.
//!
//! Applies the migrations embedded from `crates/server/migrations/`.
//! Migrations run here, on demand, never automatically at server startup.

use crewbase_server::config::ServerConfig;
use crewbase_server::db;

/// Run all pending migrations against the active profile's database.
///
/// # Errors
///
/// Returns an error if configuration loading, the connection, or a
/// migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load()?;

    tracing::info!(
        environment = config.environment.as_str(),
        database = %config.db.database,
        "Connecting to database"
    );
    let pool = db::create_pool(&config.db).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
