//! Integration tests for Crewbase.
//!
//! # Running Tests
//!
//! ```bash
//! # Point the suite at a test database and start the server
//! export APP_ENV_TYPE=test
//! cargo run -p crewbase-cli -- migrate
//! cargo run -p crewbase-server &
//!
//! # Run the suite (tests are #[ignore]-gated)
//! cargo test -p crewbase-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `tests/api.rs` - End-to-end HTTP scenarios against a running server
//! - `tests/pool.rs` - Connection pool acquire/release invariants

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CREWBASE_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// A plain HTTP client for the API.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
