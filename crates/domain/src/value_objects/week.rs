//! Curriculum week number.
//!
//! The curriculum covers exactly four weeks. Day 21 onwards reads as week 4;
//! there is no week 5.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekNumber(u8);

impl WeekNumber {
    pub const ONE: WeekNumber = WeekNumber(1);
    pub const TWO: WeekNumber = WeekNumber(2);
    pub const THREE: WeekNumber = WeekNumber(3);
    pub const FOUR: WeekNumber = WeekNumber(4);

    pub const FIRST: WeekNumber = Self::ONE;
    pub const LAST: WeekNumber = Self::FOUR;

    /// Returns `DomainError::Validation` outside `1..=4`.
    pub fn new(week: u8) -> Result<Self, DomainError> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&week) {
            Ok(Self(week))
        } else {
            Err(DomainError::validation(format!(
                "week must be between {} and {}, got {}",
                Self::FIRST.0,
                Self::LAST.0,
                week
            )))
        }
    }

    /// Saturates into `1..=4`.
    pub fn clamped(week: i64) -> Self {
        Self(week.clamp(i64::from(Self::FIRST.0), i64::from(Self::LAST.0)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> [WeekNumber; 4] {
        [Self::ONE, Self::TWO, Self::THREE, Self::FOUR]
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}", self.0)
    }
}

impl TryFrom<u8> for WeekNumber {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekNumber> for u8 {
    fn from(value: WeekNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_one_to_four() {
        for w in 1..=4 {
            assert_eq!(WeekNumber::new(w).unwrap().get(), w);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(
            WeekNumber::new(0),
            Err(DomainError::Validation(_))
        ));
        assert!(WeekNumber::new(5).is_err());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(WeekNumber::clamped(-3), WeekNumber::ONE);
        assert_eq!(WeekNumber::clamped(2), WeekNumber::TWO);
        assert_eq!(WeekNumber::clamped(40), WeekNumber::FOUR);
    }

    #[test]
    fn test_deserialize_validates() {
        assert_eq!(
            serde_json::from_str::<WeekNumber>("3").unwrap(),
            WeekNumber::THREE
        );
        assert!(serde_json::from_str::<WeekNumber>("9").is_err());
    }
}
