//! Application session and composition.

use std::sync::Arc;

use landfall_domain::{DomainError, Mission, MissionId, Mood, Pillar, StepId, WeekNumber};

use crate::catalog::Catalog;
use crate::entities::{
    ArrivalClock, LockState, MissionSelector, MoodCheckInStore, ProfileStore, ProgressStore,
    ProgressSummary, SearchHit,
};
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{ClockPort, StorageProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Order this week's missions by the profile's relevance tags
    pub preference_sort: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            preference_sort: true,
        }
    }
}

impl From<&EngineConfig> for SessionOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            preference_sort: config.preference_sort,
        }
    }
}

/// Outcome of checking or unchecking a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepToggle {
    pub checked: bool,
    /// Every step of the active mood is checked; the mission can be completed.
    pub all_complete: bool,
}

/// Main application state.
///
/// Owns the catalog and every store. Constructed once at startup; mission
/// state is restored from storage before the first query.
pub struct AppSession {
    catalog: Catalog,
    progress: ProgressStore,
    arrival: ArrivalClock,
    profile: ProfileStore,
    check_in: MoodCheckInStore,
    options: SessionOptions,
}

impl AppSession {
    pub fn new(
        mut catalog: Catalog,
        storage: Arc<dyn StorageProvider>,
        clock: Arc<dyn ClockPort>,
        options: SessionOptions,
    ) -> Self {
        let progress = ProgressStore::new(storage.clone());
        progress.restore_all(catalog.missions_mut());

        Self {
            catalog,
            progress,
            arrival: ArrivalClock::load(storage.clone(), clock.clone()),
            profile: ProfileStore::load(storage.clone()),
            check_in: MoodCheckInStore::load(storage, clock),
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mission(&self, id: &MissionId) -> Option<&Mission> {
        self.catalog.mission(id)
    }

    pub fn current_week(&self) -> WeekNumber {
        self.arrival.current_week()
    }

    // === Queries ===

    /// Missions of the current week, ranked by profile relevance when enabled.
    pub fn this_week(&self) -> Vec<&Mission> {
        MissionSelector::new(&self.catalog)
            .missions_for_week(self.current_week(), &self.ranking_tags())
    }

    pub fn this_week_in_pillar(&self, pillar: Pillar) -> Vec<&Mission> {
        MissionSelector::new(&self.catalog).missions_for_week_in_pillar(
            self.current_week(),
            pillar,
            &self.ranking_tags(),
        )
    }

    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        MissionSelector::new(&self.catalog).search(query)
    }

    pub fn lock_state(&self, id: &MissionId) -> Option<LockState> {
        let selector = MissionSelector::new(&self.catalog);
        self.catalog
            .mission(id)
            .map(|mission| selector.lock_state(mission))
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::from_catalog(&self.catalog)
    }

    // === Mission actions ===

    /// Open a mission in `mood`. The first open records the starting mood;
    /// reopening keeps existing progress.
    pub fn open_mission(&mut self, id: &MissionId, mood: Mood) -> Result<&Mission, DomainError> {
        self.ensure_unlocked(id)?;
        let mission = mission_for_update(&mut self.catalog, id)?;
        self.progress.start_mission(mission, mood);
        tracing::debug!(mission_id = %id, mood = %mood, "Mission opened");
        Ok(mission)
    }

    pub fn switch_mood(&mut self, id: &MissionId, mood: Mood) -> Result<(), DomainError> {
        self.ensure_unlocked(id)?;
        let mission = mission_for_update(&mut self.catalog, id)?;
        mission.switch_mood(mood);
        self.progress.save(mission);
        tracing::debug!(mission_id = %id, mood = %mood, "Mission mood switched");
        Ok(())
    }

    /// Check or uncheck a step of the variant currently shown. A mission never
    /// opened starts in the saved mood.
    pub fn toggle_step(
        &mut self,
        id: &MissionId,
        step_id: &StepId,
    ) -> Result<StepToggle, DomainError> {
        self.ensure_unlocked(id)?;
        let mood = self.check_in.saved_mood();
        let mission = mission_for_update(&mut self.catalog, id)?;
        if !mission.content(mission.display_mood(mood)).has_step(step_id) {
            return Err(DomainError::not_found("MissionStep", step_id.as_str()));
        }

        let checked = self.progress.toggle_step(mission, step_id, mood);
        let all_complete = mission.is_all_steps_checked();
        tracing::debug!(mission_id = %id, step_id = %step_id, checked, all_complete, "Step toggled");

        Ok(StepToggle {
            checked,
            all_complete,
        })
    }

    /// Mark a mission complete. Returns false if it already was.
    pub fn complete_mission(&mut self, id: &MissionId) -> Result<bool, DomainError> {
        self.ensure_unlocked(id)?;
        let mission = mission_for_update(&mut self.catalog, id)?;
        let newly = self.progress.mark_complete(mission);
        if newly {
            tracing::info!(mission_id = %id, xp = mission.xp_value(), "Mission complete");
        }
        Ok(newly)
    }

    // === Stores ===

    pub fn arrival(&self) -> &ArrivalClock {
        &self.arrival
    }

    pub fn arrival_mut(&mut self) -> &mut ArrivalClock {
        &mut self.arrival
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ProfileStore {
        &mut self.profile
    }

    pub fn check_in(&self) -> &MoodCheckInStore {
        &self.check_in
    }

    pub fn check_in_mut(&mut self) -> &mut MoodCheckInStore {
        &mut self.check_in
    }

    // === Reset ===

    /// Forget all mission progress, keeping onboarding and profile.
    pub fn reset_missions(&mut self) {
        self.progress.reset_all();
        for mission in self.catalog.missions_mut() {
            mission.reset();
        }
    }

    /// Back to a fresh install: missions, onboarding, profile and check-in.
    pub fn reset_everything(&mut self) {
        self.reset_missions();
        self.arrival.reset();
        self.profile.reset();
        self.check_in.reset();
        tracing::info!("Session reset");
    }

    fn ranking_tags(&self) -> Vec<String> {
        if self.options.preference_sort {
            self.profile.relevant_tags()
        } else {
            Vec::new()
        }
    }

    fn ensure_unlocked(&self, id: &MissionId) -> Result<(), DomainError> {
        let mission = self
            .catalog
            .mission(id)
            .ok_or_else(|| DomainError::not_found("Mission", id.as_str()))?;

        match MissionSelector::new(&self.catalog).lock_state(mission) {
            LockState::Unlocked => Ok(()),
            LockState::Locked { prerequisite_title } => Err(DomainError::constraint(format!(
                "'{}' is locked until '{}' is complete",
                mission.title(),
                prerequisite_title
            ))),
        }
    }
}

fn mission_for_update<'a>(
    catalog: &'a mut Catalog,
    id: &MissionId,
) -> Result<&'a mut Mission, DomainError> {
    catalog
        .mission_mut(id)
        .ok_or_else(|| DomainError::not_found("Mission", id.as_str()))
}
