//! Year-granularity helpers.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::clock::Clock;
use crate::util::rebuild;

/// Proleptic Gregorian leap-year rule: divisible by 4, except century years
/// not divisible by 400.
///
/// # Examples
///
/// ```
/// use almanac::is_leap_year;
///
/// assert!(is_leap_year(2016));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Shift `date` by whole calendar years, keeping month, day, and time of
/// day. February 29 shifted into a common year rolls forward to March 1.
pub fn add_years<Tz: TimeZone>(date: &DateTime<Tz>, amount: i32) -> DateTime<Tz> {
    rebuild(
        date,
        date.year() + amount,
        date.month() as i32,
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        date.nanosecond(),
    )
}

/// Replace the year field, keeping month, day, and time of day.
pub fn set_year<Tz: TimeZone>(date: &DateTime<Tz>, year: i32) -> DateTime<Tz> {
    rebuild(
        date,
        year,
        date.month() as i32,
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        date.nanosecond(),
    )
}

/// First instant of the year containing `date`.
pub fn start_of_year<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(date, date.year(), 1, 1, 0, 0, 0, 0)
}

/// Last instant of the year containing `date`, at nanosecond resolution.
pub fn end_of_year<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(date, date.year(), 12, 31, 23, 59, 59, 999_999_999)
}

/// True when both instants fall in the same calendar year.
pub fn is_same_year<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    a.year() == b.year()
}

/// True when `date` falls in the current year according to `clock`.
pub fn is_this_year<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_year(date, &clock.now())
}
