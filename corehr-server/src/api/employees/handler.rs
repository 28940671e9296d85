//! Employee API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{Employee, EmployeeCreate, EmployeeStatus, EmployeeUpdate};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.list()?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .find_by_id(id)?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// The caller's own employee record, matched by email
///
/// No silent fallback to another record: a user without a matching
/// employee entry gets 404.
pub async fn profile(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.find_by_email(&user.email)?.ok_or_else(|| {
        AppError::not_found(format!("No employee record for '{}'", user.email))
    })?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    payload.validate()?;
    let employee = state.employees.create(payload)?;
    tracing::info!(employee_id = %employee.id, email = %employee.email, "Employee created");
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    payload.validate()?;
    let employee = state.employees.update(id, payload)?;
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    state.employees.delete(id)?;
    tracing::info!(employee_id = %id, "Employee deleted");
    Ok(Json(true))
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: EmployeeStatus,
}

/// Change an employee's lifecycle status
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusRequest>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.set_status(id, payload.status)?;
    tracing::info!(
        employee_id = %id,
        status = %employee.status.as_str(),
        "Employee status changed"
    );
    Ok(Json(employee))
}
