//! # almanac
//!
//! Calendar arithmetic helpers for [`chrono`] datetimes.
//!
//! almanac is a flat toolbox of small, pure functions over zoned instants:
//! sorting and comparison, range overlap, and a uniform add / difference /
//! start-of / end-of / set family for every granularity from milliseconds up
//! to years. All arithmetic follows the proleptic Gregorian calendar, every
//! function returns a new instant, and the attached time zone travels with
//! each result.
//!
//! Predicates that depend on the current moment (`is_future`, `is_today`,
//! `is_this_hour`, ...) read "now" through the [`Clock`] trait, so tests can
//! pin the clock to a fixed instant instead of racing the system time.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Datelike, TimeZone, Utc};
//! use almanac::{add_months, days_in_month};
//!
//! let date = Utc.with_ymd_and_hms(2016, 6, 6, 6, 6, 6).unwrap();
//! assert_eq!(days_in_month(&date), 30);
//!
//! // 14 months decompose into one year plus two months.
//! let shifted = add_months(&date, 14);
//! assert_eq!((shifted.year(), shifted.month()), (2017, 8));
//! ```
//!
//! ## Modules
//!
//! - [`ordering`] -- sorting, comparison, closest-match, min/max
//! - [`range`] -- overlap predicates and overlap measurement
//! - [`millisecond`], [`second`], [`minute`], [`hour`] -- sub-day helpers
//! - [`day`], [`week`] -- day boundaries, day counting, week boundaries
//! - [`month`], [`quarter`], [`year`] -- calendar-aware month/quarter/year math
//! - [`clock`] -- injectable "now" for the time-dependent predicates
//! - [`error`] -- error types

pub mod clock;
pub mod day;
pub mod error;
pub mod hour;
pub mod millisecond;
pub mod minute;
pub mod month;
pub mod ordering;
pub mod quarter;
pub mod range;
pub mod second;
pub mod week;
pub mod year;

mod util;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::{
    add_days, difference_in_days, each_day_between, end_of_day, end_of_today, end_of_tomorrow,
    end_of_yesterday, is_same_day, is_today, is_tomorrow, is_yesterday, set_day_of_month,
    set_day_of_year, start_of_day, start_of_today, start_of_tomorrow, start_of_yesterday,
};
pub use error::{AlmanacError, Result};
pub use hour::{
    add_hours, difference_in_hours, end_of_hour, is_same_hour, is_this_hour, set_hour,
    start_of_hour,
};
pub use millisecond::{add_milliseconds, difference_in_milliseconds, millisecond, set_millisecond};
pub use minute::{
    add_minutes, difference_in_minutes, end_of_minute, is_same_minute, is_this_minute, set_minute,
    start_of_minute,
};
pub use month::{
    add_months, days_in_month, end_of_month, is_first_day_of_month, is_last_day_of_month,
    is_same_month, is_this_month, start_of_month,
};
pub use ordering::{
    closest_index_to, closest_to, compare, is_future, is_past, max, min, sort, sort_ascending,
    sort_descending, SortOrder,
};
pub use quarter::{
    add_quarters, end_of_quarter, is_first_quarter, is_fourth_quarter, is_same_quarter,
    is_second_quarter, is_third_quarter, is_this_quarter, quarter, start_of_quarter,
};
pub use range::{is_within_range, overlapping_days, ranges_overlap};
pub use second::{
    add_seconds, difference_in_seconds, end_of_second, is_same_second, is_this_second, set_second,
    start_of_second,
};
pub use week::{
    add_weeks, difference_in_weeks, end_of_week, is_same_week, is_this_week, is_weekday,
    is_weekend, start_of_week,
};
pub use year::{
    add_years, end_of_year, is_leap_year, is_same_year, is_this_year, set_year, start_of_year,
};
