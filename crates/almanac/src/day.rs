//! Day-granularity helpers: shifting, boundaries, day counting, and the
//! today/tomorrow/yesterday conveniences.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

use crate::clock::Clock;
use crate::error::{AlmanacError, Result};
use crate::month::days_in_month;
use crate::util::rebuild;
use crate::year::days_in_year;

/// Shift `date` by a number of 24-hour days.
pub fn add_days<Tz: TimeZone>(date: &DateTime<Tz>, amount: i64) -> DateTime<Tz> {
    date.clone() + Duration::days(amount)
}

/// First instant of the day containing `date`.
pub fn start_of_day<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(date, date.year(), date.month() as i32, date.day(), 0, 0, 0, 0)
}

/// Last instant of the day containing `date`, at nanosecond resolution.
pub fn end_of_day<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    rebuild(
        date,
        date.year(),
        date.month() as i32,
        date.day(),
        23,
        59,
        59,
        999_999_999,
    )
}

/// Whole calendar days between two instants, `end - start`.
///
/// Walks year by year using each year's actual length, so the count is
/// correct across leap years. Swapping the arguments negates the result.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use almanac::difference_in_days;
///
/// let start = Utc.with_ymd_and_hms(2016, 6, 6, 6, 6, 6).unwrap();
/// let end = Utc.with_ymd_and_hms(2016, 12, 31, 0, 0, 0).unwrap();
/// assert_eq!(difference_in_days(&end, &start), 208);
/// assert_eq!(difference_in_days(&start, &end), -208);
/// ```
pub fn difference_in_days<Tz: TimeZone>(end: &DateTime<Tz>, start: &DateTime<Tz>) -> i64 {
    if end.year() < start.year() {
        return -difference_in_days(start, end);
    }

    let mut days = 0i64;
    let mut year = start.year();
    let mut ordinal = i64::from(start.ordinal());

    // Consume whole years, counting each year's final day.
    while year < end.year() {
        days += i64::from(days_in_year(year)) - ordinal + 1;
        year += 1;
        ordinal = 1;
    }

    days + i64::from(end.ordinal()) - ordinal
}

/// The days lying strictly between `start` and `end`.
///
/// The first element is `start` plus one full day, keeping `start`'s time of
/// day; every following element is the start of the next calendar day. The
/// walk stops before `end`, so an empty or single-day range yields nothing.
///
/// # Errors
///
/// Returns [`AlmanacError::InvalidRange`] when `end` precedes `start`.
pub fn each_day_between<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> Result<Vec<DateTime<Tz>>> {
    if end < start {
        return Err(AlmanacError::InvalidRange);
    }

    let mut days = Vec::new();
    let mut offset = 1i64;
    let mut cursor = add_days(start, offset);
    while cursor < *end {
        days.push(cursor);
        offset += 1;
        cursor = start_of_day(&add_days(start, offset));
    }
    Ok(days)
}

/// True when both instants fall on the same calendar day.
pub fn is_same_day<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Move `date` to the given zero-based day of its year, at the start of day.
///
/// Day 0 is January 1; the upper bound is the year's actual length.
///
/// # Errors
///
/// Returns [`AlmanacError::OutOfRange`] when `day` exceeds the number of
/// days in the year; the input is left unchanged.
pub fn set_day_of_year<Tz: TimeZone>(date: &DateTime<Tz>, day: u32) -> Result<DateTime<Tz>> {
    let len = days_in_year(date.year());
    if day > len {
        return Err(AlmanacError::OutOfRange {
            field: "day of year",
            value: i64::from(day),
            min: 0,
            max: i64::from(len),
        });
    }
    let january_first = rebuild(date, date.year(), 1, 1, 0, 0, 0, 0);
    Ok(add_days(&january_first, i64::from(day)))
}

/// Replace the day-of-month field, keeping the time of day.
///
/// # Errors
///
/// Returns [`AlmanacError::OutOfRange`] when `day` is zero or exceeds the
/// length of the month; the input is left unchanged.
pub fn set_day_of_month<Tz: TimeZone>(date: &DateTime<Tz>, day: u32) -> Result<DateTime<Tz>> {
    let len = days_in_month(date);
    if day < 1 || day > len {
        return Err(AlmanacError::OutOfRange {
            field: "day of month",
            value: i64::from(day),
            min: 1,
            max: i64::from(len),
        });
    }
    Ok(rebuild(
        date,
        date.year(),
        date.month() as i32,
        day,
        date.hour(),
        date.minute(),
        date.second(),
        date.nanosecond(),
    ))
}

/// First instant of the current day.
pub fn start_of_today<C: Clock>(clock: &C) -> DateTime<C::Zone> {
    start_of_day(&clock.now())
}

/// Last instant of the current day.
pub fn end_of_today<C: Clock>(clock: &C) -> DateTime<C::Zone> {
    end_of_day(&clock.now())
}

/// First instant of the next day.
pub fn start_of_tomorrow<C: Clock>(clock: &C) -> DateTime<C::Zone> {
    start_of_day(&add_days(&clock.now(), 1))
}

/// Last instant of the next day.
pub fn end_of_tomorrow<C: Clock>(clock: &C) -> DateTime<C::Zone> {
    end_of_day(&add_days(&clock.now(), 1))
}

/// First instant of the previous day.
pub fn start_of_yesterday<C: Clock>(clock: &C) -> DateTime<C::Zone> {
    start_of_day(&add_days(&clock.now(), -1))
}

/// Last instant of the previous day.
pub fn end_of_yesterday<C: Clock>(clock: &C) -> DateTime<C::Zone> {
    end_of_day(&add_days(&clock.now(), -1))
}

/// True when `date` falls on the current day according to `clock`.
pub fn is_today<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_day(date, &clock.now())
}

/// True when `date` falls on the day after the current day.
pub fn is_tomorrow<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_day(date, &add_days(&clock.now(), 1))
}

/// True when `date` falls on the day before the current day.
pub fn is_yesterday<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    is_same_day(date, &add_days(&clock.now(), -1))
}
