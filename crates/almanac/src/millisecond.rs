//! Millisecond-granularity helpers.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

use crate::error::{AlmanacError, Result};
use crate::util::rebuild;

/// Shift `date` by a number of milliseconds.
pub fn add_milliseconds<Tz: TimeZone>(date: &DateTime<Tz>, amount: i64) -> DateTime<Tz> {
    date.clone() + Duration::milliseconds(amount)
}

/// Whole milliseconds between two instants, `a - b`.
pub fn difference_in_milliseconds<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> i64 {
    a.timestamp_millis() - b.timestamp_millis()
}

/// The millisecond-of-second field, 0 through 999.
pub fn millisecond<Tz: TimeZone>(date: &DateTime<Tz>) -> u32 {
    date.timestamp_subsec_millis()
}

/// Replace the millisecond field, discarding any finer nanosecond component.
///
/// # Errors
///
/// Returns [`AlmanacError::OutOfRange`] when `amount` exceeds 999; the input
/// is left unchanged.
pub fn set_millisecond<Tz: TimeZone>(date: &DateTime<Tz>, amount: u32) -> Result<DateTime<Tz>> {
    if amount > 999 {
        return Err(AlmanacError::OutOfRange {
            field: "millisecond",
            value: i64::from(amount),
            min: 0,
            max: 999,
        });
    }
    Ok(rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        amount * 1_000_000,
    ))
}
