//! Daily mood check-in: asked at most once per calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::Mood;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCheckIn {
    saved_mood: Mood,
    last_check_in: Option<NaiveDate>,
}

impl MoodCheckIn {
    pub fn new(saved_mood: Mood, last_check_in: Option<NaiveDate>) -> Self {
        Self {
            saved_mood,
            last_check_in,
        }
    }

    pub fn saved_mood(&self) -> Mood {
        self.saved_mood
    }

    pub fn last_check_in(&self) -> Option<NaiveDate> {
        self.last_check_in
    }

    pub fn needs_check_in(&self, today: NaiveDate) -> bool {
        self.last_check_in != Some(today)
    }

    pub fn record(&mut self, mood: Mood, today: NaiveDate) {
        self.saved_mood = mood;
        self.last_check_in = Some(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_in_once_per_day() {
        let monday = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let tuesday = monday.succ_opt().unwrap();

        let mut check_in = MoodCheckIn::default();
        assert!(check_in.needs_check_in(monday));

        check_in.record(Mood::Lonely, monday);
        assert!(!check_in.needs_check_in(monday));
        assert!(check_in.needs_check_in(tuesday));
        assert_eq!(check_in.saved_mood(), Mood::Lonely);
    }
}
