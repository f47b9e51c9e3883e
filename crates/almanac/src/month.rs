//! Month-granularity helpers.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::clock::Clock;
use crate::util::rebuild;
use crate::year::is_leap_year;

/// Number of days in the month containing `date`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use almanac::days_in_month;
///
/// let leap_february = Utc.with_ymd_and_hms(2016, 2, 10, 0, 0, 0).unwrap();
/// assert_eq!(days_in_month(&leap_february), 29);
/// ```
pub fn days_in_month<Tz: TimeZone>(date: &DateTime<Tz>) -> u32 {
    days_in_year_month(date.year(), date.month())
}

pub(crate) fn days_in_year_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Shift `date` by whole calendar months, keeping the time of day.
///
/// The amount decomposes into whole years plus leftover months using
/// truncating division, so negative amounts truncate toward zero. When the
/// day of month does not exist in the target month the date rolls forward
/// (January 31 plus one month lands on March 2 or 3).
pub fn add_months<Tz: TimeZone>(date: &DateTime<Tz>, amount: i32) -> DateTime<Tz> {
    let years = amount / 12;
    let leftover = amount % 12;
    rebuild(
        date,
        date.year() + years,
        date.month() as i32 + leftover,
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        date.nanosecond(),
    )
}

/// First instant of the month containing `date`.
pub fn start_of_month<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(date, date.year(), date.month() as i32, 1, 0, 0, 0, 0)
}

/// Last instant of the month containing `date`, at nanosecond resolution.
pub fn end_of_month<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(
        date,
        date.year(),
        date.month() as i32,
        days_in_month(date),
        23,
        59,
        59,
        999_999_999,
    )
}

/// True when `date` falls on the first day of its month.
pub fn is_first_day_of_month<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    date.day() == 1
}

/// True when `date` falls on the last day of its month.
pub fn is_last_day_of_month<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    date.day() == days_in_month(date)
}

/// True when both instants fall in the same calendar month of the same year.
pub fn is_same_month<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// True when `date` falls in the current month according to `clock`.
pub fn is_this_month<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_month(date, &clock.now())
}
