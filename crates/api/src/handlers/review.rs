//! # Review Handlers
//!
//! A completed appointment may receive a rating/comment pair and lose it
//! again; the two fields always move together. Re-reviewing overwrites the
//! previous pair, no history is kept.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use garagebook_core::{
    errors::BookingError, models::appointment::CreateReviewRequest, scheduling::review,
};
use garagebook_db::models::DbAppointment;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_review(
    State(state): State<Arc<ApiState>>,
    Path(appointment_id): Path<Uuid>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<StatusCode, AppError> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError(BookingError::Validation(
            "rating must be between 1 and 5".to_string(),
        )));
    }

    let appointment = fetch_reviewable(&state, appointment_id, payload.customer_id).await?;

    garagebook_db::repositories::appointment::update_review(
        &state.db_pool,
        appointment.id,
        Some(payload.rating),
        Some(payload.comment.as_str()),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(StatusCode::CREATED)
}

#[derive(Debug, Deserialize)]
pub struct DeleteReviewQuery {
    pub customer_id: Uuid,
}

#[axum::debug_handler]
pub async fn delete_review(
    State(state): State<Arc<ApiState>>,
    Path(appointment_id): Path<Uuid>,
    Query(query): Query<DeleteReviewQuery>,
) -> Result<StatusCode, AppError> {
    let appointment = fetch_reviewable(&state, appointment_id, query.customer_id).await?;

    garagebook_db::repositories::appointment::update_review(&state.db_pool, appointment.id, None, None)
        .await
        .map_err(BookingError::Database)?;

    Ok(StatusCode::OK)
}

/// Both review operations share the same gates: the appointment must exist,
/// belong to the requesting customer, and have concluded.
async fn fetch_reviewable(
    state: &ApiState,
    appointment_id: Uuid,
    customer_id: Uuid,
) -> Result<DbAppointment, AppError> {
    let appointment = garagebook_db::repositories::appointment::get_appointment_by_id(
        &state.db_pool,
        appointment_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!("Appointment with ID {} not found", appointment_id))
    })?;

    if appointment.customer_id != customer_id {
        return Err(AppError(BookingError::Validation(format!(
            "customer {} does not own appointment {}",
            customer_id, appointment_id
        ))));
    }

    if !review::can_review(appointment.end_time, Utc::now()) {
        return Err(AppError(BookingError::Validation(
            "the appointment is not over yet".to_string(),
        )));
    }

    Ok(appointment)
}
