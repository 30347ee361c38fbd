extern crate self as landfall_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    ArrivalState, Mission, MissionProgress, MissionResource, MissionStep, MoodCheckIn,
    MoodContent, ResourceType, UserPreferenceProfile, DIET_OPTIONS, GOAL_OPTIONS, STYLE_OPTIONS,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{MissionId, StepId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{tag_overlap, Mood, Pillar, WeekNumber};
