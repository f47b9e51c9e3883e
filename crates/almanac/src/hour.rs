//! Hour-granularity helpers.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

use crate::clock::Clock;
use crate::error::{AlmanacError, Result};
use crate::util::{rebuild, span_seconds};

/// Shift `date` by a number of hours.
pub fn add_hours<Tz: TimeZone>(date: &DateTime<Tz>, amount: i64) -> DateTime<Tz> {
    date.clone() + Duration::hours(amount)
}

/// Fractional hours between two instants, `a - b`.
pub fn difference_in_hours<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> f64 {
    span_seconds(a.clone() - b.clone()) / 3_600.0
}

/// First instant of the hour containing `date`.
pub fn start_of_hour<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        date.hour(),
        0,
        0,
        0,
    )
}

/// Last instant of the hour containing `date`, at nanosecond resolution.
pub fn end_of_hour<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        date.hour(),
        59,
        59,
        999_999_999,
    )
}

/// True when both instants fall within the same clock hour.
pub fn is_same_hour<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day() && a.hour() == b.hour()
}

/// True when `date` falls within the current hour according to `clock`.
pub fn is_this_hour<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_hour(date, &clock.now())
}

/// Replace the hours field.
///
/// # Errors
///
/// Returns [`AlmanacError::OutOfRange`] when `hours` exceeds 23; the input
/// is left unchanged.
pub fn set_hour<Tz: TimeZone>(date: &DateTime<Tz>, hours: u32) -> Result<DateTime<Tz>> {
    if hours > 23 {
        return Err(AlmanacError::OutOfRange {
            field: "hour",
            value: i64::from(hours),
            min: 0,
            max: 23,
        });
    }
    Ok(rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        hours,
        date.minute(),
        date.second(),
        date.nanosecond(),
    ))
}
