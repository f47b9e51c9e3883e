//! Second-granularity helpers.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

use crate::clock::Clock;
use crate::error::{AlmanacError, Result};
use crate::util::{rebuild, span_seconds};

/// Shift `date` by a number of seconds.
pub fn add_seconds<Tz: TimeZone>(date: &DateTime<Tz>, amount: i64) -> DateTime<Tz> {
    date.clone() + Duration::seconds(amount)
}

/// Fractional seconds between two instants, `a - b`.
pub fn difference_in_seconds<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> f64 {
    span_seconds(a.clone() - b.clone())
}

/// First instant of the second containing `date`.
pub fn start_of_second<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        0,
    )
}

/// Last instant of the second containing `date`, at nanosecond resolution.
pub fn end_of_second<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        999_999_999,
    )
}

/// True when both instants fall within the same clock second.
pub fn is_same_second<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    a.year() == b.year()
        && a.month() == b.month()
        && a.day() == b.day()
        && a.hour() == b.hour()
        && a.minute() == b.minute()
        && a.second() == b.second()
}

/// True when `date` falls within the current second according to `clock`.
pub fn is_this_second<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_second(date, &clock.now())
}

/// Replace the seconds field.
///
/// # Errors
///
/// Returns [`AlmanacError::OutOfRange`] when `seconds` exceeds 59; the input
/// is left unchanged.
pub fn set_second<Tz: TimeZone>(date: &DateTime<Tz>, seconds: u32) -> Result<DateTime<Tz>> {
    if seconds > 59 {
        return Err(AlmanacError::OutOfRange {
            field: "second",
            value: i64::from(seconds),
            min: 0,
            max: 59,
        });
    }
    Ok(rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        date.hour(),
        date.minute(),
        seconds,
        date.nanosecond(),
    ))
}
