//! Range predicates and overlap measurement.
//!
//! Ranges are passed as explicit (start, end) bound pairs. Nothing enforces
//! start < end structurally; each operation checks what it needs.

use chrono::{DateTime, TimeZone};

use crate::day::difference_in_days;
use crate::error::{AlmanacError, Result};

/// True when range B opens before range A closes and both ranges are well
/// formed (start strictly before end).
///
/// The check is asymmetric: range A's start is never tested against range
/// B's end, so the caller chooses which range comes first.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use almanac::ranges_overlap;
///
/// let jan = |d| Utc.with_ymd_and_hms(2017, 1, d, 0, 0, 0).unwrap();
/// let feb_1 = Utc.with_ymd_and_hms(2017, 2, 1, 0, 0, 0).unwrap();
/// assert!(ranges_overlap(&jan(1), &jan(18), &jan(16), &feb_1));
/// assert!(!ranges_overlap(&jan(1), &jan(15), &jan(16), &feb_1));
/// ```
pub fn ranges_overlap<Tz: TimeZone>(
    a_start: &DateTime<Tz>,
    a_end: &DateTime<Tz>,
    b_start: &DateTime<Tz>,
    b_end: &DateTime<Tz>,
) -> bool {
    a_start < a_end && b_start < a_end && b_start < b_end
}

/// Whole days shared by range A and range B.
///
/// # Errors
///
/// Returns [`AlmanacError::RangesDoNotOverlap`] when [`ranges_overlap`] does
/// not hold for the given bounds.
pub fn overlapping_days<Tz: TimeZone>(
    a_start: &DateTime<Tz>,
    a_end: &DateTime<Tz>,
    b_start: &DateTime<Tz>,
    b_end: &DateTime<Tz>,
) -> Result<i64> {
    if !ranges_overlap(a_start, a_end, b_start, b_end) {
        return Err(AlmanacError::RangesDoNotOverlap);
    }
    Ok(-difference_in_days(b_start, a_end))
}

/// True when `date` lies strictly between `start` and `end`.
pub fn is_within_range<Tz: TimeZone>(
    date: &DateTime<Tz>,
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> bool {
    date > start && date < end
}
