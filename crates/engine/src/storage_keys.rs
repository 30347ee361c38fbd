//! Persistent storage keys. Changing any of these orphans stored state.

use landfall_domain::MissionId;

pub const ARRIVAL_DATE: &str = "arrivalDate";
pub const HAS_ONBOARDED: &str = "hasCompletedOnboarding";
pub const WEEK_OVERRIDE: &str = "weekOverride";

pub const USER_GOAL: &str = "userGoal";
pub const USER_DIET: &str = "userDiet";
pub const USER_STYLE: &str = "userStyle";

pub const LAST_MOOD_CHECK_IN: &str = "lastMoodCheckIn";
pub const SAVED_MOOD: &str = "savedMood";

/// Namespace of every per-mission key
pub const MISSION_NAMESPACE: &str = "mission.";

const MISSION_COMPLETE_PREFIX: &str = "mission.complete.";
const MISSION_PROGRESS_PREFIX: &str = "mission.progress.";

pub fn mission_complete(id: &MissionId) -> String {
    format!("{}{}", MISSION_COMPLETE_PREFIX, id)
}

pub fn mission_progress(id: &MissionId) -> String {
    format!("{}{}", MISSION_PROGRESS_PREFIX, id)
}
