//! Calendar-day utilities

use chrono::{Local, NaiveDate};

/// Current calendar day in the host's local time zone
///
/// Journal days follow the writer's wall clock, not UTC.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
