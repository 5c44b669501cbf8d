use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candidate or booked interval. Endpoints sit on whole hours by
/// convention; `end_time > start_time` always holds for generated slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
