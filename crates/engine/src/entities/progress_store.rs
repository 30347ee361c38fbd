//! Progress store - durable per-mission completion and step state.
//!
//! Keys are derived from the mission id, never its title, so reworded titles
//! keep their progress. Restore is best effort: unreadable values are logged
//! and skipped, leaving the mission in its authored state.

use std::sync::Arc;

use landfall_domain::{Mission, MissionProgress, Mood, StepId};

use crate::infrastructure::ports::StorageProvider;
use crate::storage_keys;

pub struct ProgressStore {
    storage: Arc<dyn StorageProvider>,
}

impl ProgressStore {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    /// Write completion and progress. Absent progress deletes any stored one.
    pub fn save(&self, mission: &Mission) {
        let id = mission.id();
        self.storage.save(
            &storage_keys::mission_complete(id),
            if mission.is_complete() { "true" } else { "false" },
        );

        let progress_key = storage_keys::mission_progress(id);
        match mission.progress() {
            Some(progress) => match serde_json::to_string(progress) {
                Ok(json) => self.storage.save(&progress_key, &json),
                Err(e) => {
                    tracing::error!(mission_id = %id, error = %e, "Failed to serialize mission progress");
                }
            },
            None => self.storage.remove(&progress_key),
        }

        tracing::debug!(
            mission_id = %id,
            complete = mission.is_complete(),
            has_progress = mission.progress().is_some(),
            "Mission saved"
        );
    }

    /// Apply stored state to a freshly built mission.
    pub fn restore(&self, mission: &mut Mission) {
        let id = mission.id().clone();

        if let Some(value) = self.storage.load(&storage_keys::mission_complete(&id)) {
            if value.trim() == "true" {
                mission.set_complete(true);
            }
        }

        if let Some(json) = self.storage.load(&storage_keys::mission_progress(&id)) {
            match serde_json::from_str::<MissionProgress>(&json) {
                Ok(progress) => mission.set_progress(Some(progress)),
                Err(e) => {
                    tracing::warn!(mission_id = %id, error = %e, "Ignoring unreadable mission progress");
                }
            }
        }
    }

    pub fn restore_all(&self, missions: &mut [Mission]) {
        for mission in missions.iter_mut() {
            self.restore(mission);
        }
        let completed = missions.iter().filter(|m| m.is_complete()).count();
        tracing::info!(missions = missions.len(), completed, "Mission progress restored");
    }

    /// Open `mission` in `mood` and persist it. Existing progress is kept.
    pub fn start_mission(&self, mission: &mut Mission, mood: Mood) {
        mission.start(mood);
        self.save(mission);
    }

    /// Toggle a step and persist. Returns whether the step is now checked.
    pub fn toggle_step(&self, mission: &mut Mission, step_id: &StepId, mood: Mood) -> bool {
        let checked = mission.toggle_step(step_id, mood);
        self.save(mission);
        checked
    }

    /// Mark complete, writing only when the mission was not complete yet.
    pub fn mark_complete(&self, mission: &mut Mission) -> bool {
        let newly = mission.mark_complete();
        if newly {
            self.save(mission);
        }
        newly
    }

    /// Delete every key under the mission namespace.
    pub fn reset_all(&self) {
        let keys = self.storage.keys_with_prefix(storage_keys::MISSION_NAMESPACE);
        for key in &keys {
            self.storage.remove(key);
        }
        tracing::info!(removed = keys.len(), "Mission progress reset");
    }
}
