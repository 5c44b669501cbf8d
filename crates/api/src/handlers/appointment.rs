//! # Appointment Handlers
//!
//! Booking and availability. Both handlers derive the day's candidate
//! windows from the same pure generator, so the slot a client saw in the
//! availability listing is exactly the slot the booking handler will accept.
//!
//! Booking is check-then-act against the database: the overlap check runs on
//! a fresh read of the employee's appointments immediately before the
//! insert, and the appointments table's exclusion constraint turns the
//! remaining race between two concurrent requests into an insert failure
//! that surfaces as a slot conflict.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError,
    models::{
        appointment::{AppointmentResponse, AvailableSlotsResponse, CreateAppointmentRequest},
        service::ServiceResponse,
        time_slot::TimeSlot,
    },
    scheduling::{calendar, overlap, slots},
};
use garagebook_db::models::{DbAppointment, DbService};

use crate::{middleware::error_handling::AppError, ApiState};

/// SQLSTATE raised by the appointments exclusion constraint when a
/// concurrent booking won the window first.
const EXCLUSION_VIOLATION: &str = "23P01";

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let requested = TimeSlot {
        start_time: payload.start_time,
        end_time: payload.end_time,
    };
    if requested.end_time <= requested.start_time {
        return Err(AppError(BookingError::Validation(
            "end_time must be after start_time".to_string(),
        )));
    }

    // Referenced records must exist before any scheduling computation runs.
    garagebook_db::repositories::customer::get_customer_by_id(&state.db_pool, payload.customer_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Customer with ID {} not found", payload.customer_id))
        })?;

    garagebook_db::repositories::employee::get_employee_by_id(&state.db_pool, payload.employee_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Employee with ID {} not found", payload.employee_id))
        })?;

    let service = fetch_bookable_service(&state, payload.service_id).await?;

    // The requested window must exactly equal one of the windows generated
    // for this service and date. Weekends offer nothing.
    let date = payload.start_time.date_naive();
    if calendar::is_weekend(date) {
        return Err(AppError(BookingError::SlotNotOffered));
    }
    let offered = slots::generate_slots(date, i64::from(service.time_hours));
    if !slots::is_offered(&requested, &offered) {
        return Err(AppError(BookingError::SlotNotOffered));
    }

    // Overlap check against a fresh read of the employee's bookings.
    let existing = garagebook_db::repositories::appointment::list_appointments_by_employee_id(
        &state.db_pool,
        payload.employee_id,
    )
    .await
    .map_err(BookingError::Database)?;
    let existing_slots: Vec<TimeSlot> = existing.iter().map(appointment_slot).collect();
    if !overlap::is_bookable(&requested, &existing_slots) {
        return Err(AppError(BookingError::SlotConflict));
    }

    let db_appointment = garagebook_db::repositories::appointment::create_appointment(
        &state.db_pool,
        payload.start_time,
        payload.end_time,
        payload.service_id,
        payload.employee_id,
        payload.customer_id,
        payload.car_model_id,
    )
    .await
    .map_err(map_insert_error)?;

    let response = appointment_response(&db_appointment, &service, None, None);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Query parameters for the availability listing.
#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    pub service_id: Uuid,
    pub employee_id: Uuid,
    /// Calendar date to list slots for, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let service = fetch_bookable_service(&state, query.service_id).await?;

    garagebook_db::repositories::employee::get_employee_by_id(&state.db_pool, query.employee_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Employee with ID {} not found", query.employee_id))
        })?;

    // Nothing is offered on non-business days.
    if calendar::is_weekend(query.date) {
        return Ok(Json(AvailableSlotsResponse { slots: Vec::new() }));
    }

    let existing = garagebook_db::repositories::appointment::list_appointments_by_employee_id(
        &state.db_pool,
        query.employee_id,
    )
    .await
    .map_err(BookingError::Database)?;
    let existing_slots: Vec<TimeSlot> = existing.iter().map(appointment_slot).collect();

    let available = slots::generate_slots(query.date, i64::from(service.time_hours))
        .into_iter()
        .filter(|candidate| overlap::is_bookable(candidate, &existing_slots))
        .collect();

    Ok(Json(AvailableSlotsResponse { slots: available }))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    garagebook_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    garagebook_db::repositories::appointment::delete_appointment(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    Ok(StatusCode::OK)
}

/// Fetches a service and rejects logically deleted ones, which must not be
/// bookable even when the slot arithmetic would succeed.
async fn fetch_bookable_service(state: &ApiState, service_id: Uuid) -> Result<DbService, AppError> {
    let service = garagebook_db::repositories::service::get_service_by_id(&state.db_pool, service_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Service with ID {} not found", service_id))
        })?;

    if service.is_deleted {
        return Err(AppError(BookingError::ServiceUnavailable(service.name)));
    }

    Ok(service)
}

pub(crate) fn appointment_slot(appointment: &DbAppointment) -> TimeSlot {
    TimeSlot {
        start_time: appointment.start_time,
        end_time: appointment.end_time,
    }
}

pub(crate) fn appointment_response(
    appointment: &DbAppointment,
    service: &DbService,
    employee: Option<garagebook_core::models::employee::EmployeeResponse>,
    garage: Option<garagebook_core::models::garage::GarageResponse>,
) -> AppointmentResponse {
    AppointmentResponse {
        id: appointment.id,
        start_time: appointment.start_time,
        end_time: appointment.end_time,
        service: ServiceResponse {
            id: service.id,
            name: service.name.clone(),
            time_hours: service.time_hours,
            price: service.price,
        },
        employee,
        garage,
        rating: appointment.rating,
        comment: appointment.comment.clone(),
    }
}

/// Translates an insert failure: an exclusion violation means a concurrent
/// booking took the window between our check and our insert.
fn map_insert_error(error: eyre::Report) -> BookingError {
    let lost_race = error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db_error| db_error.code())
        .is_some_and(|code| code == EXCLUSION_VIOLATION);

    if lost_race {
        BookingError::SlotConflict
    } else {
        BookingError::Database(error)
    }
}
