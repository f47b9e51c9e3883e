//! Injectable wall-clock time.
//!
//! The now-relative predicates (`is_future`, `is_today`, `is_this_hour`, ...)
//! read the current instant through the [`Clock`] trait rather than the
//! system clock directly, so tests can supply a deterministic "now".

use chrono::{DateTime, Local, TimeZone};

/// A source of the current instant.
pub trait Clock {
    /// The time zone this clock reports instants in.
    type Zone: TimeZone;

    /// The current instant according to this clock.
    fn now(&self) -> DateTime<Self::Zone>;
}

/// The process wall clock, reporting local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Zone = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    instant: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    /// Create a clock that always reports `instant`.
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Zone = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.instant.clone()
    }
}
