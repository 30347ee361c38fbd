//! Clock implementations.

use std::sync::RwLock;

use chrono::{Local, NaiveDate};

use crate::infrastructure::ports::ClockPort;

/// System clock - uses the local calendar date.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Settable clock for tests and demos.
pub struct FixedClock(RwLock<NaiveDate>);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(RwLock::new(today))
    }

    pub fn set(&self, today: NaiveDate) {
        match self.0.write() {
            Ok(mut guard) => *guard = today,
            Err(e) => tracing::error!(error = %e, "Fixed clock lock poisoned"),
        }
    }

    pub fn advance_days(&self, days: i64) {
        let next = self.today() + chrono::Duration::days(days);
        self.set(next);
    }
}

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.0.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let clock = FixedClock::new(start);
        clock.advance_days(8);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 9, 9).unwrap());
    }
}
