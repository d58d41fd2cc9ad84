//! Clock capability for the report pipeline.
//!
//! Day counts and year inference depend on "now". The pipeline never reads
//! the system clock directly; callers pass a [`Clock`] so reports can be
//! reproduced for any reference date.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tablero::env::{Clock, FixedClock};
//!
//! let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap());
//! assert_eq!(clock.today().to_string(), "2025-10-21");
//! ```

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Midnight of the given date.
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
