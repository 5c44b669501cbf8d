//! Temporal bucketing of a customer's appointments.

use chrono::{DateTime, Utc};

use crate::models::appointment::{AppointmentResponse, CustomerAppointmentsResponse};

/// Partitions appointments into upcoming / in-progress / completed relative
/// to `now`, preserving input order within each bucket.
///
/// The buckets are total: `start_time > now` is upcoming, `end_time <= now`
/// is completed, and everything else (`start_time <= now < end_time`,
/// including an appointment starting at exactly `now`) is in progress. An
/// appointment ending at exactly `now` counts as completed, which keeps this
/// partition consistent with the review gate.
pub fn classify(
    appointments: Vec<AppointmentResponse>,
    now: DateTime<Utc>,
) -> CustomerAppointmentsResponse {
    let mut result = CustomerAppointmentsResponse::default();

    for appointment in appointments {
        if appointment.start_time > now {
            result.upcoming.push(appointment);
        } else if appointment.end_time <= now {
            result.completed.push(appointment);
        } else {
            result.in_progress.push(appointment);
        }
    }

    result
}
