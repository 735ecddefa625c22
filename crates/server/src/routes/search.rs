//! Employee search route handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;

use crewbase_core::EmployeeId;

use crate::db::EmployeeRepository;
use crate::envelope;
use crate::error::ApiError;
use crate::models::{Employee, EmployeeRow};
use crate::state::AppState;

/// Shape a batch of rows, failing on the first corrupt record.
fn shape_all(rows: Vec<EmployeeRow>) -> Result<Vec<Employee>, ApiError> {
    rows.into_iter()
        .map(|row| Employee::try_from(row).map_err(ApiError::from))
        .collect()
}

/// Point lookup by employee id.
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let row = EmployeeRepository::new(state.pool())
        .get(EmployeeId::new(id))
        .await?
        .ok_or(ApiError::NotFound)?;

    let employee = Employee::try_from(row)?;
    Ok(envelope::success(StatusCode::OK, employee))
}

/// List employees holding the given position code.
///
/// Codes outside the vocabulary match nothing and return an empty list;
/// only write paths validate labels.
pub async fn by_position(
    State(state): State<AppState>,
    Path(code): Path<i16>,
) -> Result<Response, ApiError> {
    let rows = EmployeeRepository::new(state.pool())
        .list_by_position(code)
        .await?;

    let employees = shape_all(rows)?;
    Ok(envelope::success(
        StatusCode::OK,
        json!({ "employees": employees }),
    ))
}

/// List employees in the given department code.
pub async fn by_department(
    State(state): State<AppState>,
    Path(code): Path<i16>,
) -> Result<Response, ApiError> {
    let rows = EmployeeRepository::new(state.pool())
        .list_by_department(code)
        .await?;

    let employees = shape_all(rows)?;
    Ok(envelope::success(
        StatusCode::OK,
        json!({ "employees": employees }),
    ))
}
