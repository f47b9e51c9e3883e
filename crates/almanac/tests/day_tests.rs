//! Tests for day-granularity helpers: day counting, boundaries, day walks,
//! and the today/tomorrow/yesterday conveniences.

use almanac::{
    add_days, difference_in_days, each_day_between, end_of_day, end_of_today, end_of_tomorrow,
    end_of_yesterday, is_same_day, is_today, is_tomorrow, is_yesterday, set_day_of_month,
    set_day_of_year, start_of_day, start_of_today, start_of_tomorrow, start_of_yesterday,
    AlmanacError, FixedClock,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
}

#[test]
fn day_difference_within_a_leap_year() {
    let start = utc(2016, 6, 6, 6, 6, 6) + Duration::nanoseconds(7);
    let end = utc(2016, 12, 31, 0, 0, 0);

    assert_eq!(difference_in_days(&end, &start), 208);
    assert_eq!(difference_in_days(&start, &end), -208);
}

#[test]
fn day_difference_across_year_boundaries() {
    let start = utc(2016, 6, 6, 6, 6, 6);
    let end = utc(2017, 1, 1, 0, 0, 0);

    // 2016 is a leap year; the walk counts its actual 366-day length.
    assert_eq!(difference_in_days(&end, &start), 209);
    assert_eq!(difference_in_days(&start, &end), -209);
}

#[test]
fn day_difference_over_multiple_years() {
    let start = utc(2015, 1, 1, 1, 0, 0);
    let end = utc(2017, 1, 1, 0, 0, 0);

    // 365 days of 2015 plus 366 days of leap 2016.
    assert_eq!(difference_in_days(&end, &start), 731);
    assert_eq!(difference_in_days(&start, &end), -731);
}

#[test]
fn add_days_shifts_by_whole_days() {
    let date = utc(2016, 12, 30, 6, 6, 6);
    assert_eq!(add_days(&date, 2), utc(2017, 1, 1, 6, 6, 6));
    assert_eq!(add_days(&date, -30), utc(2016, 11, 30, 6, 6, 6));
}

#[test]
fn day_boundaries() {
    let date = utc(2016, 6, 6, 6, 6, 6);

    assert_eq!(start_of_day(&date), utc(2016, 6, 6, 0, 0, 0));
    assert_eq!(
        end_of_day(&date),
        utc(2016, 6, 6, 23, 59, 59) + Duration::nanoseconds(999_999_999)
    );
}

#[test]
fn each_day_between_walks_interior_days() {
    let days = each_day_between(&utc(2017, 1, 1, 0, 0, 0), &utc(2017, 1, 5, 0, 0, 0)).unwrap();
    assert_eq!(
        days,
        vec![
            utc(2017, 1, 2, 0, 0, 0),
            utc(2017, 1, 3, 0, 0, 0),
            utc(2017, 1, 4, 0, 0, 0),
        ]
    );
}

#[test]
fn each_day_between_keeps_the_start_time_on_the_first_step() {
    let days = each_day_between(&utc(2017, 1, 1, 6, 30, 0), &utc(2017, 1, 4, 0, 0, 0)).unwrap();
    // The first element carries the start's time of day; later elements are
    // day starts.
    assert_eq!(
        days,
        vec![utc(2017, 1, 2, 6, 30, 0), utc(2017, 1, 3, 0, 0, 0)]
    );
}

#[test]
fn each_day_between_empty_and_invalid_ranges() {
    let day = utc(2017, 1, 1, 0, 0, 0);

    assert_eq!(each_day_between(&day, &day), Ok(Vec::new()));
    assert_eq!(
        each_day_between(&utc(2017, 1, 2, 0, 0, 0), &day),
        Err(AlmanacError::InvalidRange)
    );
}

#[test]
fn same_day_compares_calendar_fields() {
    assert!(is_same_day(
        &utc(2016, 6, 6, 0, 0, 1),
        &utc(2016, 6, 6, 23, 59, 59)
    ));
    assert!(!is_same_day(
        &utc(2016, 6, 6, 23, 59, 59),
        &utc(2016, 6, 7, 0, 0, 0)
    ));
}

#[test]
fn set_day_of_year_counts_from_january_first() {
    let date = utc(2016, 6, 6, 6, 6, 6);

    assert_eq!(set_day_of_year(&date, 0).unwrap(), utc(2016, 1, 1, 0, 0, 0));
    assert_eq!(set_day_of_year(&date, 31).unwrap(), utc(2016, 2, 1, 0, 0, 0));
    // 2016 is a leap year, so 366 is still accepted.
    assert_eq!(
        set_day_of_year(&date, 366).unwrap(),
        utc(2017, 1, 1, 0, 0, 0)
    );
    assert_eq!(
        set_day_of_year(&date, 367),
        Err(AlmanacError::OutOfRange {
            field: "day of year",
            value: 367,
            min: 0,
            max: 366,
        })
    );

    let common_year = utc(2017, 6, 6, 6, 6, 6);
    assert_eq!(
        set_day_of_year(&common_year, 366),
        Err(AlmanacError::OutOfRange {
            field: "day of year",
            value: 366,
            min: 0,
            max: 365,
        })
    );
}

#[test]
fn set_day_of_month_validates_against_the_month_length() {
    let june = utc(2016, 6, 6, 6, 6, 6);

    assert_eq!(set_day_of_month(&june, 30).unwrap(), utc(2016, 6, 30, 6, 6, 6));
    assert_eq!(
        set_day_of_month(&june, 31),
        Err(AlmanacError::OutOfRange {
            field: "day of month",
            value: 31,
            min: 1,
            max: 30,
        })
    );
    assert_eq!(
        set_day_of_month(&june, 0),
        Err(AlmanacError::OutOfRange {
            field: "day of month",
            value: 0,
            min: 1,
            max: 30,
        })
    );
}

#[test]
fn today_tomorrow_yesterday_follow_the_clock() {
    let clock = FixedClock::new(utc(2026, 8, 6, 15, 30, 0));
    let last_nano = Duration::nanoseconds(999_999_999);

    assert_eq!(start_of_today(&clock), utc(2026, 8, 6, 0, 0, 0));
    assert_eq!(end_of_today(&clock), utc(2026, 8, 6, 23, 59, 59) + last_nano);
    assert_eq!(start_of_tomorrow(&clock), utc(2026, 8, 7, 0, 0, 0));
    assert_eq!(end_of_tomorrow(&clock), utc(2026, 8, 7, 23, 59, 59) + last_nano);
    assert_eq!(start_of_yesterday(&clock), utc(2026, 8, 5, 0, 0, 0));
    assert_eq!(end_of_yesterday(&clock), utc(2026, 8, 5, 23, 59, 59) + last_nano);

    assert!(is_today(&utc(2026, 8, 6, 0, 0, 1), &clock));
    assert!(is_tomorrow(&utc(2026, 8, 7, 23, 0, 0), &clock));
    assert!(is_yesterday(&utc(2026, 8, 5, 12, 0, 0), &clock));
    assert!(!is_today(&utc(2026, 8, 7, 0, 0, 0), &clock));
}
