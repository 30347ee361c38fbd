//! Mood check-in store - the daily "how are you feeling?" prompt.

use std::sync::Arc;

use landfall_domain::common::{format_date, parse_date};
use landfall_domain::{Mood, MoodCheckIn};

use crate::infrastructure::ports::{ClockPort, StorageProvider};
use crate::storage_keys;

pub struct MoodCheckInStore {
    storage: Arc<dyn StorageProvider>,
    clock: Arc<dyn ClockPort>,
    state: MoodCheckIn,
}

impl MoodCheckInStore {
    pub fn load(storage: Arc<dyn StorageProvider>, clock: Arc<dyn ClockPort>) -> Self {
        let saved_mood = storage
            .load(storage_keys::SAVED_MOOD)
            .and_then(|raw| raw.parse::<Mood>().ok())
            .unwrap_or_default();
        let last_check_in = storage
            .load(storage_keys::LAST_MOOD_CHECK_IN)
            .and_then(|raw| parse_date(&raw).ok());

        Self {
            storage,
            clock,
            state: MoodCheckIn::new(saved_mood, last_check_in),
        }
    }

    pub fn saved_mood(&self) -> Mood {
        self.state.saved_mood()
    }

    pub fn needs_check_in(&self) -> bool {
        self.state.needs_check_in(self.clock.today())
    }

    pub fn check_in(&mut self, mood: Mood) {
        let today = self.clock.today();
        self.state.record(mood, today);
        self.storage.save(storage_keys::SAVED_MOOD, mood.as_str());
        self.storage
            .save(storage_keys::LAST_MOOD_CHECK_IN, &format_date(today));
        tracing::debug!(mood = %mood, "Mood checked in");
    }

    pub fn reset(&mut self) {
        self.state = MoodCheckIn::default();
        self.storage.remove(storage_keys::SAVED_MOOD);
        self.storage.remove(storage_keys::LAST_MOOD_CHECK_IN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::storage::MemoryStorage;
    use chrono::NaiveDate;

    #[test]
    fn test_asks_once_per_day() {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 9, 3).unwrap()));
        let mut store = MoodCheckInStore::load(storage.clone(), clock.clone());

        assert!(store.needs_check_in());
        assert_eq!(store.saved_mood(), Mood::Ready);

        store.check_in(Mood::Overwhelmed);
        assert!(!store.needs_check_in());

        let reloaded = MoodCheckInStore::load(storage, clock.clone());
        assert_eq!(reloaded.saved_mood(), Mood::Overwhelmed);
        assert!(!reloaded.needs_check_in());

        clock.advance_days(1);
        assert!(reloaded.needs_check_in());
    }

    #[test]
    fn test_unknown_stored_mood_defaults_to_ready() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save("savedMood", "grumpy");
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 9, 3).unwrap()));
        let store = MoodCheckInStore::load(storage, clock);
        assert_eq!(store.saved_mood(), Mood::Ready);
    }
}
