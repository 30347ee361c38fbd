//! Arrival state and the week clock
//!
//! The current week is derived from the days elapsed since the arrival date:
//! days 0-6 are week 1, days 7-13 week 2, and everything from day 21 on is
//! week 4. A non-zero week override (debug menu) wins over the date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::WeekNumber;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalState {
    arrival_date: Option<NaiveDate>,
    /// 0 means no override
    week_override: u8,
}

impl ArrivalState {
    /// Rebuild from stored values. Overrides above 4 are capped.
    pub fn from_stored(arrival_date: Option<NaiveDate>, week_override: i64) -> Self {
        let week_override = if week_override > 0 {
            WeekNumber::clamped(week_override).get()
        } else {
            0
        };
        Self {
            arrival_date,
            week_override,
        }
    }

    pub fn arrived(date: NaiveDate) -> Self {
        Self {
            arrival_date: Some(date),
            week_override: 0,
        }
    }

    pub fn arrival_date(&self) -> Option<NaiveDate> {
        self.arrival_date
    }

    pub fn week_override(&self) -> Option<WeekNumber> {
        WeekNumber::new(self.week_override).ok()
    }

    pub fn is_onboarded(&self) -> bool {
        self.arrival_date.is_some()
    }

    /// Whole days since arrival, never negative. Zero before onboarding.
    pub fn days_since_arrival(&self, today: NaiveDate) -> i64 {
        self.arrival_date
            .map(|arrived| (today - arrived).num_days().max(0))
            .unwrap_or(0)
    }

    pub fn current_week(&self, today: NaiveDate) -> WeekNumber {
        if let Some(week) = self.week_override() {
            return week;
        }
        WeekNumber::clamped(self.days_since_arrival(today) / 7 + 1)
    }

    pub fn set_arrival_date(&mut self, date: NaiveDate) {
        self.arrival_date = Some(date);
    }

    pub fn simulate_week(&mut self, week: WeekNumber) {
        self.week_override = week.get();
    }

    pub fn stop_simulating(&mut self) {
        self.week_override = 0;
    }

    /// Raw override as stored: 0 or 1-4.
    pub fn raw_week_override(&self) -> u8 {
        self.week_override
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()
    }

    fn arrived_days_ago(days: i64) -> ArrivalState {
        ArrivalState::arrived(today() - Duration::days(days))
    }

    #[test]
    fn test_week_boundaries() {
        assert_eq!(arrived_days_ago(0).current_week(today()), WeekNumber::ONE);
        assert_eq!(arrived_days_ago(6).current_week(today()), WeekNumber::ONE);
        assert_eq!(arrived_days_ago(7).current_week(today()), WeekNumber::TWO);
        assert_eq!(arrived_days_ago(13).current_week(today()), WeekNumber::TWO);
        assert_eq!(arrived_days_ago(21).current_week(today()), WeekNumber::FOUR);
    }

    #[test]
    fn test_clamped_past_day_28() {
        assert_eq!(arrived_days_ago(30).current_week(today()), WeekNumber::FOUR);
        assert_eq!(arrived_days_ago(400).current_week(today()), WeekNumber::FOUR);
    }

    #[test]
    fn test_future_arrival_reads_as_week_one() {
        let state = ArrivalState::arrived(today() + Duration::days(3));
        assert_eq!(state.days_since_arrival(today()), 0);
        assert_eq!(state.current_week(today()), WeekNumber::ONE);
    }

    #[test]
    fn test_override_wins() {
        let mut state = arrived_days_ago(0);
        state.simulate_week(WeekNumber::THREE);
        assert_eq!(state.current_week(today()), WeekNumber::THREE);
        state.stop_simulating();
        assert_eq!(state.current_week(today()), WeekNumber::ONE);
    }

    #[test]
    fn test_from_stored_caps_override() {
        let state = ArrivalState::from_stored(None, 9);
        assert_eq!(state.week_override(), Some(WeekNumber::FOUR));
        let state = ArrivalState::from_stored(None, -1);
        assert_eq!(state.week_override(), None);
    }

    #[test]
    fn test_not_onboarded_is_week_one() {
        let state = ArrivalState::default();
        assert!(!state.is_onboarded());
        assert_eq!(state.current_week(today()), WeekNumber::ONE);
    }
}
