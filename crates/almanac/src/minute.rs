//! Minute-granularity helpers.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

use crate::clock::Clock;
use crate::error::{AlmanacError, Result};
use crate::util::{rebuild, span_seconds};

/// Shift `date` by a number of minutes.
pub fn add_minutes<Tz: TimeZone>(date: &DateTime<Tz>, amount: i64) -> DateTime<Tz> {
    date.clone() + Duration::minutes(amount)
}

/// Fractional minutes between two instants, `a - b`.
pub fn difference_in_minutes<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> f64 {
    span_seconds(a.clone() - b.clone()) / 60.0
}

/// First instant of the minute containing `date`.
pub fn start_of_minute<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        date.hour(),
        date.minute(),
        0,
        0,
    )
}

/// Last instant of the minute containing `date`, at nanosecond resolution.
pub fn end_of_minute<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        date.hour(),
        date.minute(),
        59,
        999_999_999,
    )
}

/// True when both instants fall within the same clock minute.
pub fn is_same_minute<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    a.year() == b.year()
        && a.month() == b.month()
        && a.day() == b.day()
        && a.hour() == b.hour()
        && a.minute() == b.minute()
}

/// True when `date` falls within the current minute according to `clock`.
pub fn is_this_minute<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_minute(date, &clock.now())
}

/// Replace the minutes field.
///
/// # Errors
///
/// Returns [`AlmanacError::OutOfRange`] when `minutes` exceeds 59; the input
/// is left unchanged.
pub fn set_minute<Tz: TimeZone>(date: &DateTime<Tz>, minutes: u32) -> Result<DateTime<Tz>> {
    if minutes > 59 {
        return Err(AlmanacError::OutOfRange {
            field: "minute",
            value: i64::from(minutes),
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
        minutes,
        date.second(),
        date.nanosecond(),
    ))
}
