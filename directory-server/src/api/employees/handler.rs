//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::response::StatusResponse;

use crate::core::ServerState;
use crate::utils::{AppResult, JsonBody};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.store.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
///
/// A missing record is answered with `200 null`, not 404.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Employee>>> {
    let employee = state.store.find_by_id(&id).await?;
    if employee.is_none() {
        tracing::debug!(id = %id, "Employee not found");
    }
    Ok(Json(employee))
}

/// Create a new employee
///
/// The store assigns the id; whatever the caller sent in `id` is dropped.
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    if let Some(supplied) = payload.supplied_id() {
        tracing::warn!(id = %supplied, "Ignoring caller-supplied id on create");
    }

    let employee = state.store.insert(payload.into_new()).await?;
    tracing::info!(id = %employee.id, "Employee created");

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Merge the submitted fields into an employee
///
/// The body is forwarded as-is: keys that were not sent stay untouched.
/// The answer is the same whether or not a record matched.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<EmployeeUpdate>,
) -> AppResult<Json<StatusResponse>> {
    let keys = patch.keys();
    let matched = state.store.update_by_id(&id, patch).await?;
    tracing::info!(id = %id, ?keys, matched, "Employee updated");

    Ok(Json(StatusResponse::updated()))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let matched = state.store.delete_by_id(&id).await?;
    tracing::info!(id = %id, matched, "Employee deleted");

    Ok(Json(StatusResponse::deleted()))
}
