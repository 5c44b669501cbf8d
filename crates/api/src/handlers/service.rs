use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError,
    models::service::{CreateServiceRequest, ServiceResponse},
};
use garagebook_db::models::DbService;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Path(garage_id): Path<Uuid>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), AppError> {
    if payload.time_hours < 1 {
        return Err(AppError(BookingError::Validation(
            "service duration must be at least one hour".to_string(),
        )));
    }
    if payload.price < 0 {
        return Err(AppError(BookingError::Validation(
            "service price must not be negative".to_string(),
        )));
    }

    garagebook_db::repositories::garage::get_garage_by_id(&state.db_pool, garage_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Garage with ID {} not found", garage_id)))?;

    let service = garagebook_db::repositories::service::create_service(
        &state.db_pool,
        garage_id,
        &payload.name,
        payload.time_hours,
        payload.price,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok((StatusCode::CREATED, Json(service_response(service))))
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
    Path(garage_id): Path<Uuid>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    garagebook_db::repositories::garage::get_garage_by_id(&state.db_pool, garage_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Garage with ID {} not found", garage_id)))?;

    let services =
        garagebook_db::repositories::service::list_services_by_garage_id(&state.db_pool, garage_id)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(services.into_iter().map(service_response).collect()))
}

#[axum::debug_handler]
pub async fn get_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceResponse>, AppError> {
    let service = garagebook_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    if service.is_deleted {
        return Err(AppError(BookingError::ServiceUnavailable(service.name)));
    }

    Ok(Json(service_response(service)))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    garagebook_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    garagebook_db::repositories::service::delete_service(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    Ok(StatusCode::OK)
}

fn service_response(service: DbService) -> ServiceResponse {
    ServiceResponse {
        id: service.id,
        name: service.name,
        time_hours: service.time_hours,
        price: service.price,
    }
}
