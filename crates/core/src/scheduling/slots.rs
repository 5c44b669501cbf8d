//! Candidate slot generation.

use chrono::{Duration, NaiveDate, Timelike};

use crate::models::time_slot::TimeSlot;
use crate::scheduling::calendar::{self, CLOSING_HOUR, OPENING_HOUR};

/// Produces the ordered sequence of candidate appointment windows for a
/// service of `duration_hours` whole hours, starting from `date`.
///
/// Starts walk the business day hourly from 08:00 up to and including the
/// closing hour, so every call yields exactly
/// `CLOSING_HOUR - OPENING_HOUR + 2` slots (nine for the eight-hour day).
/// Each slot's end is found by draining the duration one hour at a time;
/// whenever the cursor lands on the closing hour the remaining hours carry
/// over to the next business day's opening, with Friday jumping to Monday.
/// The final slot starts exactly at closing time and always spans into the
/// next business day.
///
/// The generator never consults persisted data and never inspects the
/// weekday of `date` itself; callers gate non-business dates.
pub fn generate_slots(date: NaiveDate, duration_hours: i64) -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity((CLOSING_HOUR - OPENING_HOUR + 2) as usize);
    let mut start = calendar::opening_instant(date);

    while start.hour() <= CLOSING_HOUR {
        let mut end = start;
        let mut remaining = duration_hours;

        while remaining > 0 {
            if end.hour() == CLOSING_HOUR {
                end = calendar::next_business_opening(end);
            }
            end = end + Duration::hours(1);
            remaining -= 1;
        }

        slots.push(TimeSlot {
            start_time: start,
            end_time: end,
        });

        start = start + Duration::hours(1);
    }

    slots
}

/// Exact-equality membership test used to validate booking requests: the
/// candidate must equal one generated slot on both endpoints, not merely be
/// contained by one.
pub fn is_offered(candidate: &TimeSlot, offered: &[TimeSlot]) -> bool {
    offered.iter().any(|slot| slot == candidate)
}
