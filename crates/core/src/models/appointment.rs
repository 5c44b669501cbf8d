use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    employee::EmployeeResponse, garage::GarageResponse, service::ServiceResponse,
    time_slot::TimeSlot,
};

/// Booking request. The requested window must exactly equal one of the slots
/// generated for the service and date; near-misses are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub service_id: Uuid,
    pub employee_id: Uuid,
    pub customer_id: Uuid,
    pub car_model_id: Uuid,
}

/// An appointment as rendered to clients. `employee` and `garage` are filled
/// depending on the view (garage-wide schedules carry the employee, customer
/// listings carry both); `rating`/`comment` appear only once a review exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub service: ServiceResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garage: Option<GarageResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A customer's appointments partitioned relative to the moment the list is
/// rendered. Never persisted; recomputed on every read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerAppointmentsResponse {
    pub upcoming: Vec<AppointmentResponse>,
    pub in_progress: Vec<AppointmentResponse>,
    pub completed: Vec<AppointmentResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub customer_id: Uuid,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub slots: Vec<TimeSlot>,
}
