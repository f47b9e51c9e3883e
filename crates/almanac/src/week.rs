//! Week-granularity helpers and weekday predicates.
//!
//! Weeks close on Sunday: [`end_of_week`] is the end of the upcoming Sunday
//! (the same day when the input already is a Sunday), and [`start_of_week`]
//! is the start of day seven days before that.

use chrono::{DateTime, Datelike, TimeZone, Weekday};

use crate::clock::Clock;
use crate::day::{add_days, difference_in_days, end_of_day, is_same_day, start_of_day};

/// Last instant of the week containing `date`.
pub fn end_of_week<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    let weekday = i64::from(date.weekday().num_days_from_sunday());
    if weekday == 0 {
        return end_of_day(date);
    }
    end_of_day(&add_days(date, 7 - weekday))
}

/// First instant of the week containing `date`, seven days before its end.
pub fn start_of_week<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    start_of_day(&add_days(&end_of_week(date), -7))
}

/// True when both instants close out on the same week-ending day.
pub fn is_same_week<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    is_same_day(&end_of_week(a), &end_of_week(b))
}

/// True when `date` falls in the current week according to `clock`.
pub fn is_this_week<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_week(date, &clock.now())
}

/// Shift `date` by whole weeks.
pub fn add_weeks<Tz: TimeZone>(date: &DateTime<Tz>, amount: i64) -> DateTime<Tz> {
    add_days(date, 7 * amount)
}

/// Whole weeks between two instants, truncated toward zero.
pub fn difference_in_weeks<Tz: TimeZone>(end: &DateTime<Tz>, start: &DateTime<Tz>) -> i64 {
    difference_in_days(end, start) / 7
}

/// True when `date` falls on a Saturday or Sunday.
pub fn is_weekend<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True when `date` falls on a Monday through Friday.
pub fn is_weekday<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    !is_weekend(date)
}
