//! Domain entities

mod arrival;
mod check_in;
mod mission;
mod profile;
mod progress;

pub use arrival::ArrivalState;
pub use check_in::MoodCheckIn;
pub use mission::{Mission, MissionResource, MissionStep, MoodContent, ResourceType};
pub use profile::{UserPreferenceProfile, DIET_OPTIONS, GOAL_OPTIONS, STYLE_OPTIONS};
pub use progress::MissionProgress;
