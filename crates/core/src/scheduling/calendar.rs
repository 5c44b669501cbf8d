//! Fixed business calendar: 08:00-16:00, Monday through Friday. These are
//! compile-time constants, not configuration.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};

/// Opening hour of every business day.
pub const OPENING_HOUR: u32 = 8;

/// Closing hour of every business day. Also the last hour at which a slot
/// may start; such a slot necessarily spans into the next business day.
pub const CLOSING_HOUR: u32 = 16;

pub fn opening_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(OPENING_HOUR, 0, 0)
        .expect("opening hour is a valid time of day")
        .and_utc()
}

pub fn closing_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(CLOSING_HOUR, 0, 0)
        .expect("closing hour is a valid time of day")
        .and_utc()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Given a timestamp sitting exactly at the closing hour, returns the opening
/// instant of the next business day: Friday jumps three days to Monday,
/// every other weekday jumps one. This is the only weekend-skip rule; it is
/// applied while advancing through a multi-day slot, never to decide whether
/// the initial date itself is bookable.
pub fn next_business_opening(t: DateTime<Utc>) -> DateTime<Utc> {
    let days = if t.weekday() == Weekday::Fri { 3 } else { 1 };
    opening_instant(
        t.date_naive()
            .checked_add_days(Days::new(days))
            .expect("date arithmetic stays in range"),
    )
}
