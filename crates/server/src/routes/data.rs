//! Paginated listing route handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;

use crate::db::{DocumentRepository, EmployeeRepository};
use crate::envelope;
use crate::error::ApiError;
use crate::models::{Document, Employee};
use crate::state::AppState;

/// Fixed page size for both listings.
const PAGE_SIZE: i64 = 10;

/// List employees, ten per page, from the given offset.
pub async fn employees(
    State(state): State<AppState>,
    Path(offset): Path<i64>,
) -> Result<Response, ApiError> {
    let rows = EmployeeRepository::new(state.pool())
        .list(offset, PAGE_SIZE)
        .await?;

    let employees = rows
        .into_iter()
        .map(|row| Employee::try_from(row).map_err(ApiError::from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(envelope::success(StatusCode::OK, employees))
}

/// List document approvals, ten per page, with a show-next-page flag.
///
/// The flag is a full-page heuristic: a page shorter than the limit is the
/// last one. A total row count that is an exact multiple of the page size
/// yields one trailing empty page.
pub async fn documents(
    State(state): State<AppState>,
    Path(offset): Path<i64>,
) -> Result<Response, ApiError> {
    let rows = DocumentRepository::new(state.pool())
        .list(offset, PAGE_SIZE)
        .await?;

    let documents = rows
        .into_iter()
        .map(|row| Document::try_from(row).map_err(ApiError::from))
        .collect::<Result<Vec<_>, _>>()?;

    let show_next_button = documents.len() as i64 == PAGE_SIZE;
    Ok(envelope::success(
        StatusCode::OK,
        json!({
            "documents": documents,
            "offset": offset,
            "show_next_button": show_next_button,
        }),
    ))
}
