//! Employee management route handlers.

use std::collections::HashMap;

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use chrono::Utc;
use serde_json::json;

use crewbase_core::{Department, EmployeeId, Position};

use crate::db::EmployeeRepository;
use crate::envelope;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validate;

/// Create a new employee from form-encoded fields.
///
/// Registration time is stamped server-side and status is forced to active;
/// neither can be supplied by the client.
pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let employee = validate::validate_create_employee(&fields, Utc::now().naive_utc())?;

    let id = EmployeeRepository::new(state.pool()).create(&employee).await?;
    tracing::info!(employee_id = %id, "Employee created");

    Ok(envelope::success(
        StatusCode::CREATED,
        json!({ "employee_id": id, "message": "Employee created successfully" }),
    ))
}

/// Set an employee's status to inactive.
///
/// An unknown id is a silent no-op; the storage layer cannot tell it apart
/// from an update that matched a row.
pub async fn inactivate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let id = EmployeeId::new(id);
    EmployeeRepository::new(state.pool()).inactivate(id).await?;
    tracing::info!(employee_id = %id, "Employee inactivated");

    Ok(envelope::success(
        StatusCode::OK,
        json!({ "employee_id": id, "status": "inactive" }),
    ))
}

/// Change an employee's position.
///
/// The path segment takes the write vocabulary (`employee`/`manager`/
/// `admin`) or a bare code; an unknown label is rejected before any update
/// runs.
pub async fn change_position(
    State(state): State<AppState>,
    Path((id, new_position)): Path<(i32, String)>,
) -> Result<Response, ApiError> {
    let position =
        Position::parse_request(&new_position).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let id = EmployeeId::new(id);
    EmployeeRepository::new(state.pool()).promote(id, position).await?;
    tracing::info!(employee_id = %id, position = %position, "Employee position changed");

    Ok(envelope::success(
        StatusCode::OK,
        json!({ "employee_id": id, "position": position.response_label() }),
    ))
}

/// Move an employee to another department.
pub async fn change_department(
    State(state): State<AppState>,
    Path((id, new_department)): Path<(i32, String)>,
) -> Result<Response, ApiError> {
    let department = Department::parse_request(&new_department)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let id = EmployeeId::new(id);
    EmployeeRepository::new(state.pool())
        .transfer(id, department)
        .await?;
    tracing::info!(employee_id = %id, department = %department, "Employee department changed");

    Ok(envelope::success(
        StatusCode::OK,
        json!({ "employee_id": id, "department": department.response_label() }),
    ))
}
