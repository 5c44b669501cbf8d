use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/appointments", post(handlers::appointment::create_appointment))
        .route(
            "/api/appointments/available",
            get(handlers::appointment::get_available_slots),
        )
        .route(
            "/api/appointments/:id",
            delete(handlers::appointment::delete_appointment),
        )
        .route(
            "/api/appointments/:id/review",
            post(handlers::review::create_review).delete(handlers::review::delete_review),
        )
}
