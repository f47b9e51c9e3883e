//! Ordering, comparison, and closest-match helpers over instant sequences.

use std::cmp::Ordering;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{AlmanacError, Result};
use crate::util::span_nanos;

/// Direction marker for [`sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Earliest instant first.
    Ascending,
    /// Latest instant first.
    Descending,
}

/// Stable in-place sort of instants by absolute time.
///
/// Equal instants keep their relative input order in either direction.
pub fn sort<Tz: TimeZone>(dates: &mut [DateTime<Tz>], order: SortOrder) {
    match order {
        SortOrder::Ascending => dates.sort_by(|a, b| a.cmp(b)),
        SortOrder::Descending => dates.sort_by(|a, b| b.cmp(a)),
    }
}

/// Sort instants earliest first.
pub fn sort_ascending<Tz: TimeZone>(dates: &mut [DateTime<Tz>]) {
    sort(dates, SortOrder::Ascending);
}

/// Sort instants latest first.
pub fn sort_descending<Tz: TimeZone>(dates: &mut [DateTime<Tz>]) {
    sort(dates, SortOrder::Descending);
}

/// Compare two instants by absolute time.
pub fn compare<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> Ordering {
    a.cmp(b)
}

/// Index of the sequence element closest to `target`.
///
/// Distance is measured in whole milliseconds first; ties fall through to
/// the full nanosecond distance, and remaining ties keep the earliest index.
///
/// # Errors
///
/// Returns [`AlmanacError::EmptyInput`] when `dates` has no elements.
pub fn closest_index_to<Tz: TimeZone>(
    target: &DateTime<Tz>,
    dates: &[DateTime<Tz>],
) -> Result<usize> {
    if dates.is_empty() {
        return Err(AlmanacError::EmptyInput);
    }

    let mut closest = 0;
    let mut best_millis = i64::MAX;
    let mut best_nanos = i128::MAX;

    for (index, date) in dates.iter().enumerate() {
        let delta = target.clone() - date.clone();
        let millis = delta.num_milliseconds().abs();
        let nanos = span_nanos(delta).abs();

        if millis < best_millis || (millis == best_millis && nanos < best_nanos) {
            closest = index;
            best_millis = millis;
            best_nanos = nanos;
        }
    }

    Ok(closest)
}

/// The sequence element closest to `target`.
///
/// # Errors
///
/// Returns [`AlmanacError::EmptyInput`] when `dates` has no elements.
pub fn closest_to<Tz: TimeZone>(
    target: &DateTime<Tz>,
    dates: &[DateTime<Tz>],
) -> Result<DateTime<Tz>> {
    closest_index_to(target, dates).map(|index| dates[index].clone())
}

/// The latest instant in the sequence.
///
/// Only a strictly later element replaces the current best, so the earliest
/// occurrence wins ties.
///
/// # Errors
///
/// Returns [`AlmanacError::EmptyInput`] when `dates` has no elements.
pub fn max<Tz: TimeZone>(dates: &[DateTime<Tz>]) -> Result<DateTime<Tz>> {
    let (first, rest) = dates.split_first().ok_or(AlmanacError::EmptyInput)?;
    let mut latest = first;
    for date in rest {
        if date > latest {
            latest = date;
        }
    }
    Ok(latest.clone())
}

/// The earliest instant in the sequence.
///
/// Only a strictly earlier element replaces the current best, so the
/// earliest occurrence wins ties.
///
/// # Errors
///
/// Returns [`AlmanacError::EmptyInput`] when `dates` has no elements.
pub fn min<Tz: TimeZone>(dates: &[DateTime<Tz>]) -> Result<DateTime<Tz>> {
    let (first, rest) = dates.split_first().ok_or(AlmanacError::EmptyInput)?;
    let mut earliest = first;
    for date in rest {
        if date < earliest {
            earliest = date;
        }
    }
    Ok(earliest.clone())
}

/// True when `date` lies strictly after the current instant.
pub fn is_future<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    date.with_timezone(&Utc) > clock.now().with_timezone(&Utc)
}

/// True when `date` lies strictly before the current instant.
pub fn is_past<Tz: TimeZone, C: Clock>(date: &DateTime<Tz>, clock: &C) -> bool {
    date.with_timezone(&Utc) < clock.now().with_timezone(&Utc)
}
