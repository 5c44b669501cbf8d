//! # Daily Schedule Handler
//!
//! Renders one employee's view of a calendar day. What the employee sees is
//! decided by their role: an owner gets the garage-wide schedule with the
//! assigned mechanic on every entry, a mechanic only their own bookings.
//! Multi-day appointments are clamped to the day's working hours for
//! display; the stored records are untouched.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError,
    models::{
        appointment::AppointmentResponse,
        employee::{EmployeeResponse, Role},
        service::ServiceResponse,
    },
    scheduling::clamp,
};
use garagebook_db::models::DbAppointment;

use crate::{handlers::appointment::appointment_slot, middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    /// Calendar date to render, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

#[axum::debug_handler]
pub async fn get_employee_schedule(
    State(state): State<Arc<ApiState>>,
    Path(employee_id): Path<Uuid>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let employee =
        garagebook_db::repositories::employee::get_employee_by_id(&state.db_pool, employee_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Employee with ID {} not found", employee_id))
            })?;

    let role = Role::parse(&employee.role).ok_or_else(|| {
        BookingError::Internal(format!("unknown employee role: {}", employee.role).into())
    })?;

    let appointments = match role {
        Role::Owner => {
            let garage = garagebook_db::repositories::garage::get_garage_by_owner_id(
                &state.db_pool,
                employee.id,
            )
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Garage owned by {} not found", employee.id))
            })?;

            garagebook_db::repositories::appointment::list_appointments_by_garage_on_date(
                &state.db_pool,
                garage.id,
                query.date,
            )
            .await
            .map_err(BookingError::Database)?
        }
        Role::Mechanic => {
            garagebook_db::repositories::appointment::list_appointments_by_employee_on_date(
                &state.db_pool,
                employee.id,
                query.date,
            )
            .await
            .map_err(BookingError::Database)?
        }
    };

    // Only the garage-wide view names the mechanic per entry.
    let include_employee = role == Role::Owner;

    let mut entries = Vec::with_capacity(appointments.len());
    for appointment in &appointments {
        entries.push(schedule_entry(&state, appointment, query.date, include_employee).await?);
    }

    Ok(Json(entries))
}

async fn schedule_entry(
    state: &ApiState,
    appointment: &DbAppointment,
    date: NaiveDate,
    include_employee: bool,
) -> Result<AppointmentResponse, AppError> {
    let service =
        garagebook_db::repositories::service::get_service_by_id(&state.db_pool, appointment.service_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!(
                    "Service with ID {} not found",
                    appointment.service_id
                ))
            })?;

    let employee = if include_employee {
        garagebook_db::repositories::employee::get_employee_by_id(
            &state.db_pool,
            appointment.employee_id,
        )
        .await
        .map_err(BookingError::Database)?
        .map(|employee| EmployeeResponse {
            id: employee.id,
            name: employee.name,
            surname: employee.surname,
        })
    } else {
        None
    };

    let display = clamp::clamp_to_day(&appointment_slot(appointment), date);

    Ok(AppointmentResponse {
        id: appointment.id,
        start_time: display.start_time,
        end_time: display.end_time,
        service: ServiceResponse {
            id: service.id,
            name: service.name,
            time_hours: service.time_hours,
            price: service.price,
        },
        employee,
        garage: None,
        rating: appointment.rating,
        comment: appointment.comment.clone(),
    })
}
