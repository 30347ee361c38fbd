//! Profile store - persists the three onboarding answers.

use std::sync::Arc;

use landfall_domain::UserPreferenceProfile;

use crate::infrastructure::ports::StorageProvider;
use crate::storage_keys;

pub struct ProfileStore {
    storage: Arc<dyn StorageProvider>,
    profile: UserPreferenceProfile,
}

impl ProfileStore {
    pub fn load(storage: Arc<dyn StorageProvider>) -> Self {
        let read = |key: &str| storage.load(key).unwrap_or_default();
        let profile = UserPreferenceProfile::new(
            read(storage_keys::USER_GOAL),
            read(storage_keys::USER_DIET),
            read(storage_keys::USER_STYLE),
        );
        Self { storage, profile }
    }

    pub fn profile(&self) -> &UserPreferenceProfile {
        &self.profile
    }

    pub fn relevant_tags(&self) -> Vec<String> {
        self.profile.relevant_tags()
    }

    pub fn is_complete(&self) -> bool {
        self.profile.is_complete()
    }

    pub fn answer_goal(&mut self, goal: impl Into<String>) {
        self.profile.goal = goal.into();
        self.storage.save(storage_keys::USER_GOAL, &self.profile.goal);
    }

    pub fn answer_diet(&mut self, diet: impl Into<String>) {
        self.profile.diet = diet.into();
        self.storage.save(storage_keys::USER_DIET, &self.profile.diet);
    }

    pub fn answer_style(&mut self, style: impl Into<String>) {
        self.profile.style = style.into();
        self.storage
            .save(storage_keys::USER_STYLE, &self.profile.style);
    }

    pub fn reset(&mut self) {
        self.profile.reset();
        self.storage.remove(storage_keys::USER_GOAL);
        self.storage.remove(storage_keys::USER_DIET);
        self.storage.remove(storage_keys::USER_STYLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorage;

    #[test]
    fn test_answers_persist() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ProfileStore::load(storage.clone());
        assert!(!store.is_complete());

        store.answer_goal("Saving money");
        store.answer_diet("Vegan");
        store.answer_style("Dive right in");

        let reloaded = ProfileStore::load(storage);
        assert!(reloaded.is_complete());
        assert_eq!(reloaded.relevant_tags(), vec!["budget", "cooking", "vegan"]);
    }

    #[test]
    fn test_reset() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ProfileStore::load(storage.clone());
        store.answer_goal("Meeting people");
        store.reset();

        assert_eq!(store.profile(), &UserPreferenceProfile::default());
        assert!(storage.is_empty());
    }
}
