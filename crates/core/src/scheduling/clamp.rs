//! Display-only truncation of multi-day intervals to one calendar day.

use chrono::NaiveDate;

use crate::models::time_slot::TimeSlot;
use crate::scheduling::calendar;

/// Derives the window to show when an appointment is viewed in the context
/// of one particular day. An interval that began on an earlier day displays
/// from the day's opening hour; one that ends on a later day displays until
/// the day's closing hour. The stored appointment is never mutated.
pub fn clamp_to_day(slot: &TimeSlot, date: NaiveDate) -> TimeSlot {
    let mut display = *slot;

    if display.start_time.date_naive() != date {
        display.start_time = calendar::opening_instant(date);
    }
    if display.end_time.date_naive() != date {
        display.end_time = calendar::closing_instant(date);
    }

    display
}
