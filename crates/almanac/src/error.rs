//! Error types for calendar arithmetic operations.

use thiserror::Error;

/// Errors that can occur during calendar arithmetic.
///
/// Every failure is reported synchronously to the caller. No operation
/// retries internally, and the error path never touches the caller's input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlmanacError {
    /// An operation that scans a sequence (min/max/closest-match) received a
    /// sequence with no elements.
    #[error("input sequence contains no instants")]
    EmptyInput,

    /// A `set_*` operation received a value outside the field's legal range.
    /// The instant passed in is left untouched.
    #[error("{field} out of range: {value} is not within {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// An overlap-dependent computation was applied to ranges that do not
    /// overlap.
    #[error("ranges do not overlap")]
    RangesDoNotOverlap,

    /// A range-generating operation received an end bound before its start.
    #[error("range end precedes range start")]
    InvalidRange,
}

/// Convenience alias used throughout almanac.
pub type Result<T> = std::result::Result<T, AlmanacError>;
