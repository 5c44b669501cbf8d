use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/garages", post(handlers::garage::create_garage))
        .route("/api/garages/:id", get(handlers::garage::get_garage))
        .route(
            "/api/garages/:id/services",
            post(handlers::service::create_service).get(handlers::service::list_services),
        )
        .route(
            "/api/services/:id",
            get(handlers::service::get_service).delete(handlers::service::delete_service),
        )
        .route(
            "/api/garages/:id/employees",
            post(handlers::employee::create_employee).get(handlers::employee::list_employees),
        )
}
