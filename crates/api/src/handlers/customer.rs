//! # Customer Handlers
//!
//! Registration plus the customer-facing appointment list. The list is
//! partitioned into upcoming / in-progress / completed at render time;
//! nothing temporal is persisted, so the buckets are always relative to the
//! moment of the request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError,
    models::{
        appointment::CustomerAppointmentsResponse,
        customer::{CreateCustomerRequest, CustomerResponse},
        employee::EmployeeResponse,
        garage::GarageResponse,
    },
    scheduling::classify,
};

use crate::{
    handlers::appointment::appointment_response, middleware::error_handling::AppError, ApiState,
};

#[axum::debug_handler]
pub async fn create_customer(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    if !payload.email.contains('@') {
        return Err(AppError(BookingError::Validation(
            "email address is not valid".to_string(),
        )));
    }

    let customer =
        garagebook_db::repositories::customer::create_customer(&state.db_pool, &payload.email)
            .await
            .map_err(BookingError::Database)?;

    let response = CustomerResponse {
        id: customer.id,
        email: customer.email,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn get_customer_appointments(
    State(state): State<Arc<ApiState>>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<CustomerAppointmentsResponse>, AppError> {
    garagebook_db::repositories::customer::get_customer_by_id(&state.db_pool, customer_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Customer with ID {} not found", customer_id))
        })?;

    let appointments = garagebook_db::repositories::appointment::list_appointments_by_customer_id(
        &state.db_pool,
        customer_id,
    )
    .await
    .map_err(BookingError::Database)?;

    let mut responses = Vec::with_capacity(appointments.len());
    for appointment in &appointments {
        let service = garagebook_db::repositories::service::get_service_by_id(
            &state.db_pool,
            appointment.service_id,
        )
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Service with ID {} not found", appointment.service_id))
        })?;

        let employee = garagebook_db::repositories::employee::get_employee_by_id(
            &state.db_pool,
            appointment.employee_id,
        )
        .await
        .map_err(BookingError::Database)?;

        let garage = match employee.as_ref().and_then(|e| e.garage_id) {
            Some(garage_id) => {
                garagebook_db::repositories::garage::get_garage_by_id(&state.db_pool, garage_id)
                    .await
                    .map_err(BookingError::Database)?
            }
            None => None,
        };

        let employee = employee.map(|employee| EmployeeResponse {
            id: employee.id,
            name: employee.name,
            surname: employee.surname,
        });
        let garage = garage.map(|garage| GarageResponse {
            id: garage.id,
            name: garage.name,
            city: garage.city,
            street: garage.street,
            number: garage.number,
            postal_code: garage.postal_code,
            phone_number: garage.phone_number,
        });

        responses.push(appointment_response(appointment, &service, employee, garage));
    }

    Ok(Json(classify::classify(responses, Utc::now())))
}
