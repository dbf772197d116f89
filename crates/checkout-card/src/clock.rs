//! # Clock
//!
//! Expiry checks compare against "today". The date comes from a [`Clock`]
//! so that the comparison is deterministic under test.

use chrono::{Local, NaiveDate};

/// A source of the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date in the cardholder's calendar.
    fn today(&self) -> NaiveDate;
}

/// The host's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
