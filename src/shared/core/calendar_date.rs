// Calendar dates are stored as the instant of UTC midnight built from the
// local (year, month, day) the user picked. Reading one back must use the
// UTC fields of that instant, never the reader's local fields.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::shared::core::primitives::EpochMillis;

pub fn to_stored_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn to_stored_millis(date: NaiveDate) -> EpochMillis {
    to_stored_instant(date).timestamp_millis()
}

/// Recovers the calendar day from a stored instant, whatever offset the
/// instant is currently expressed in.
pub fn from_stored_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&Utc).date_naive()
}

pub fn from_stored_millis(millis: EpochMillis) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|instant| instant.date_naive())
}

pub fn same_calendar_day(left: EpochMillis, right: EpochMillis) -> bool {
    match (from_stored_millis(left), from_stored_millis(right)) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}
