//! Tests for week boundaries, week arithmetic, and weekday predicates.
//!
//! 2016-06-06 is a Monday and 2017-01-01 is a Sunday.

use almanac::{
    add_weeks, difference_in_weeks, end_of_week, is_same_week, is_this_week, is_weekday,
    is_weekend, start_of_week, FixedClock,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
}

#[test]
fn week_ends_on_the_upcoming_sunday() {
    let monday = utc(2016, 6, 6, 6, 6, 6);
    assert_eq!(
        end_of_week(&monday),
        utc(2016, 6, 12, 23, 59, 59) + Duration::nanoseconds(999_999_999)
    );
}

#[test]
fn week_end_for_a_sunday_is_the_same_day() {
    let sunday = utc(2017, 1, 1, 10, 0, 0);
    assert_eq!(
        end_of_week(&sunday),
        utc(2017, 1, 1, 23, 59, 59) + Duration::nanoseconds(999_999_999)
    );
}

#[test]
fn week_start_is_seven_days_before_the_end() {
    let monday = utc(2016, 6, 6, 6, 6, 6);
    assert_eq!(start_of_week(&monday), utc(2016, 6, 5, 0, 0, 0));
}

#[test]
fn same_week_compares_week_ending_days() {
    assert!(is_same_week(
        &utc(2016, 6, 6, 0, 0, 0),
        &utc(2016, 6, 12, 23, 0, 0)
    ));
    assert!(!is_same_week(
        &utc(2016, 6, 6, 0, 0, 0),
        &utc(2016, 6, 13, 0, 0, 0)
    ));
    // A week may straddle a year boundary.
    assert!(is_same_week(
        &utc(2016, 12, 26, 0, 0, 0),
        &utc(2017, 1, 1, 0, 0, 0)
    ));
}

#[test]
fn this_week_follows_the_clock() {
    let clock = FixedClock::new(utc(2016, 6, 8, 12, 0, 0));

    assert!(is_this_week(&utc(2016, 6, 6, 0, 0, 0), &clock));
    assert!(!is_this_week(&utc(2016, 6, 13, 0, 0, 0), &clock));
}

#[test]
fn week_arithmetic() {
    let date = utc(2016, 6, 6, 6, 6, 6);

    assert_eq!(add_weeks(&date, 2), utc(2016, 6, 20, 6, 6, 6));
    assert_eq!(add_weeks(&date, -1), utc(2016, 5, 30, 6, 6, 6));

    let start = utc(2016, 6, 6, 6, 6, 6);
    let end = utc(2016, 12, 31, 0, 0, 0);
    // 208 days, truncated to whole weeks.
    assert_eq!(difference_in_weeks(&end, &start), 29);
    assert_eq!(difference_in_weeks(&start, &end), -29);
}

#[test]
fn weekend_and_weekday_predicates() {
    assert!(is_weekend(&utc(2016, 6, 4, 0, 0, 0))); // Saturday
    assert!(is_weekend(&utc(2016, 6, 5, 0, 0, 0))); // Sunday
    assert!(!is_weekend(&utc(2016, 6, 6, 0, 0, 0))); // Monday

    assert!(is_weekday(&utc(2016, 6, 10, 0, 0, 0))); // Friday
    assert!(!is_weekday(&utc(2016, 6, 11, 0, 0, 0))); // Saturday
}
