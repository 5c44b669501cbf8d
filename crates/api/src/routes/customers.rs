use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/customers", post(handlers::customer::create_customer))
        .route(
            "/api/customers/:id/appointments",
            get(handlers::customer::get_customer_appointments),
        )
}
