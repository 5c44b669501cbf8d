//! Non-overlap enforcement for an employee's bookings.

use crate::models::time_slot::TimeSlot;

/// Two intervals conflict when the existing appointment starts mid-candidate,
/// ends mid-candidate, or fully contains the candidate. Touching endpoints
/// (one interval ending exactly where the other starts) do not conflict.
pub fn overlaps(candidate: &TimeSlot, existing: &TimeSlot) -> bool {
    let starts_inside = existing.start_time > candidate.start_time
        && existing.start_time < candidate.end_time;
    let ends_inside =
        existing.end_time > candidate.start_time && existing.end_time < candidate.end_time;
    let covers = existing.start_time <= candidate.start_time
        && existing.end_time >= candidate.end_time;

    starts_inside || ends_inside || covers
}

/// True only if no existing appointment for the employee conflicts with the
/// candidate window. Callers must re-run this against freshly read persisted
/// state immediately before inserting; the storage layer's exclusion
/// constraint closes the remaining check-then-act race.
pub fn is_bookable(candidate: &TimeSlot, existing: &[TimeSlot]) -> bool {
    !existing.iter().any(|slot| overlaps(candidate, slot))
}
