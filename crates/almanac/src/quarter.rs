//! Quarter-granularity helpers.
//!
//! Quarters split the year into January-March, April-June, July-September,
//! and October-December.

use chrono::{DateTime, Datelike, TimeZone};

use crate::clock::Clock;
use crate::month::{add_months, days_in_year_month};
use crate::util::rebuild;

/// The quarter containing `date`, 1 through 4.
pub fn quarter<Tz: TimeZone>(date: &DateTime<Tz>) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// True when `date` falls in January, February, or March.
pub fn is_first_quarter<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    quarter(date) == 1
}

/// True when `date` falls in April, May, or June.
pub fn is_second_quarter<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    quarter(date) == 2
}

/// True when `date` falls in July, August, or September.
pub fn is_third_quarter<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    quarter(date) == 3
}

/// True when `date` falls in October, November, or December.
pub fn is_fourth_quarter<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    quarter(date) == 4
}

/// First instant of the quarter containing `date`.
pub fn start_of_quarter<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    let first_month = (quarter(date) - 1) * 3 + 1;
    rebuild(date, date.year(), first_month as i32, 1, 0, 0, 0, 0)
}

/// Last instant of the quarter containing `date`, at nanosecond resolution.
///
/// The boundary uses the closing month's actual length, so the second
/// quarter ends on June 30 and the third on September 30.
pub fn end_of_quarter<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    let last_month = quarter(date) * 3;
    let last_day = days_in_year_month(date.year(), last_month);
    rebuild(
        date,
        date.year(),
        last_month as i32,
        last_day,
        23,
        59,
        59,
        999_999_999,
    )
}

/// Shift `date` by whole quarters, three months each.
pub fn add_quarters<Tz: TimeZone>(date: &DateTime<Tz>, amount: i32) -> DateTime<Tz> {
    add_months(date, amount * 3)
}

/// True when both instants fall in the same quarter of the same year.
pub fn is_same_quarter<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    a.year() == b.year() && quarter(a) == quarter(b)
}

/// True when `date` falls in the current quarter according to `clock`.
pub fn is_this_quarter<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_quarter(date, &clock.now())
}
