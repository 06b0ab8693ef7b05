//! Calendar-date source for streak bookkeeping.
//!
//! The progression engine is pure except for one ambient input: which
//! day "today" is. Abstracting it behind a trait keeps streak logic
//! testable with fixed dates.

use chrono::{NaiveDate, Utc};

/// Provides the current calendar date (UTC).
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock — reads the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
