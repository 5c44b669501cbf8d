use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError,
    models::{
        employee::Role,
        garage::{CreateGarageRequest, GarageResponse},
    },
};
use garagebook_db::models::DbGarage;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_garage(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateGarageRequest>,
) -> Result<(StatusCode, Json<GarageResponse>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "garage name must not be empty".to_string(),
        )));
    }
    if !payload.owner.email.contains('@') {
        return Err(AppError(BookingError::Validation(
            "owner email address is not valid".to_string(),
        )));
    }

    // The owner record is created first; the garage then points back at it.
    // The owner carries no garage_id of their own, ownership is resolved
    // through the garage row.
    let owner = garagebook_db::repositories::employee::create_employee(
        &state.db_pool,
        &payload.owner.name,
        &payload.owner.surname,
        &payload.owner.email,
        Role::Owner,
        None,
    )
    .await
    .map_err(BookingError::Database)?;

    let garage = garagebook_db::repositories::garage::create_garage(
        &state.db_pool,
        &payload.name,
        &payload.city,
        &payload.street,
        &payload.number,
        &payload.postal_code,
        &payload.phone_number,
        owner.id,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok((StatusCode::CREATED, Json(garage_response(garage))))
}

#[axum::debug_handler]
pub async fn get_garage(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GarageResponse>, AppError> {
    let garage = garagebook_db::repositories::garage::get_garage_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Garage with ID {} not found", id)))?;

    Ok(Json(garage_response(garage)))
}

pub(crate) fn garage_response(garage: DbGarage) -> GarageResponse {
    GarageResponse {
        id: garage.id,
        name: garage.name,
        city: garage.city,
        street: garage.street,
        number: garage.number,
        postal_code: garage.postal_code,
        phone_number: garage.phone_number,
    }
}
