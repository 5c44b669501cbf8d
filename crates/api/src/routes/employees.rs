use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/employees/:id", get(handlers::employee::get_employee))
        .route(
            "/api/employees/:id/appointments",
            get(handlers::schedule::get_employee_schedule),
        )
}
