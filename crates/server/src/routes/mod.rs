//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                              - Liveness check
//! GET  /health/ready                        - Readiness check (pings the database)
//!
//! # Manage
//! POST /manage/create                       - Create employee (form-encoded)
//! POST /manage/inactivate/{id}              - Set status inactive
//! POST /manage/position/{id}/{new_position} - Change position by label
//! POST /manage/department/{id}/{new_dept}   - Change department by label
//!
//! # Search
//! GET  /search/id/{id}                      - Point lookup (200 / 404)
//! GET  /search/position/{code}              - List by position code
//! GET  /search/department/{code}            - List by department code
//!
//! # Data
//! GET  /data/employee/{offset}              - Paginated list, page size 10
//! GET  /data/documents/{offset}             - Paginated list with show-next flag
//! ```

pub mod data;
pub mod manage;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the employee management routes router.
pub fn manage_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(manage::create))
        .route("/inactivate/{id}", post(manage::inactivate))
        .route("/position/{id}/{new_position}", post(manage::change_position))
        .route(
            "/department/{id}/{new_department}",
            post(manage::change_department),
        )
}

/// Create the search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/id/{id}", get(search::by_id))
        .route("/position/{code}", get(search::by_position))
        .route("/department/{code}", get(search::by_department))
}

/// Create the data listing routes router.
pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/employee/{offset}", get(data::employees))
        .route("/documents/{offset}", get(data::documents))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/manage", manage_routes())
        .nest("/search", search_routes())
        .nest("/data", data_routes())
}
