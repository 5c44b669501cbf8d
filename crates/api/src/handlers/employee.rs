use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError,
    models::employee::{CreateEmployeeRequest, EmployeeResponse, Role},
};
use garagebook_db::models::DbEmployee;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_employee(
    State(state): State<Arc<ApiState>>,
    Path(garage_id): Path<Uuid>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    if !payload.email.contains('@') {
        return Err(AppError(BookingError::Validation(
            "email address is not valid".to_string(),
        )));
    }

    garagebook_db::repositories::garage::get_garage_by_id(&state.db_pool, garage_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Garage with ID {} not found", garage_id)))?;

    let employee = garagebook_db::repositories::employee::create_employee(
        &state.db_pool,
        &payload.name,
        &payload.surname,
        &payload.email,
        Role::Mechanic,
        Some(garage_id),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok((StatusCode::CREATED, Json(employee_response(employee))))
}

#[axum::debug_handler]
pub async fn get_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = garagebook_db::repositories::employee::get_employee_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Employee with ID {} not found", id)))?;

    // Owners are not bookable staff; they stay hidden from the public
    // employee lookup.
    if employee.role == Role::Owner.as_str() {
        return Err(AppError(BookingError::NotFound(format!(
            "Employee with ID {} not found",
            id
        ))));
    }

    Ok(Json(employee_response(employee)))
}

#[axum::debug_handler]
pub async fn list_employees(
    State(state): State<Arc<ApiState>>,
    Path(garage_id): Path<Uuid>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    garagebook_db::repositories::garage::get_garage_by_id(&state.db_pool, garage_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Garage with ID {} not found", garage_id)))?;

    let employees = garagebook_db::repositories::employee::list_employees_by_garage_id(
        &state.db_pool,
        garage_id,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(employees.into_iter().map(employee_response).collect()))
}

fn employee_response(employee: DbEmployee) -> EmployeeResponse {
    EmployeeResponse {
        id: employee.id,
        name: employee.name,
        surname: employee.surname,
    }
}
