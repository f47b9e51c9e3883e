//! Internal helpers shared across the unit modules.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

use crate::month::days_in_year_month;

/// Rebuild an instant in `date`'s zone from explicit calendar fields.
///
/// `month` may fall outside 1..=12 and `day` may exceed the target month's
/// length; both normalize forward (month 14 of 2016 is February 2017,
/// February 30 of 2017 is March 2). Clock fields must already be in range.
#[allow(clippy::too_many_arguments)]
pub(crate) fn rebuild<Tz: TimeZone>(
    date: &DateTime<Tz>,
    year: i32,
    month: i32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
) -> DateTime<Tz> {
    let mut year = year + (month - 1).div_euclid(12);
    let mut month = ((month - 1).rem_euclid(12) + 1) as u32;
    let mut day = day;

    loop {
        let len = days_in_year_month(year, month);
        if day <= len {
            break;
        }
        day -= len;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .expect("normalized calendar fields form a valid date")
        .and_hms_nano_opt(hour, minute, second, nanosecond)
        .expect("clock fields are validated before rebuilding");

    resolve_local(&date.timezone(), naive)
}

/// Map a naive local datetime back into `tz`.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant;
/// nonexistent local times (DST spring-forward gap) slide forward one hour.
pub(crate) fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => match tz.from_local_datetime(&(naive + Duration::hours(1))) {
            LocalResult::Single(instant) => instant,
            LocalResult::Ambiguous(earlier, _) => earlier,
            LocalResult::None => tz.from_utc_datetime(&naive),
        },
    }
}

/// Fractional seconds in a span, at nanosecond precision.
pub(crate) fn span_seconds(delta: Duration) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0
}

/// Total nanoseconds in a span, widened so multi-century spans cannot
/// overflow.
pub(crate) fn span_nanos(delta: Duration) -> i128 {
    i128::from(delta.num_seconds()) * 1_000_000_000 + i128::from(delta.subsec_nanos())
}
