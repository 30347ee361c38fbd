//! Identifier types.
//!
//! Mission content ships with the app, so identifiers are authored slugs
//! rather than generated UUIDs. A slug never changes once released; titles
//! may be reworded freely without orphaning stored progress.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_slug_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_slug_id!(MissionId);
define_slug_id!(StepId);

impl StepId {
    /// Step ids are `<mission>.<ordinal>` so the same ordinal in every mood
    /// variant shares checked state.
    pub fn for_step(mission: &MissionId, number: u32) -> Self {
        Self(format!("{}.{}", mission.as_str(), number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_id_for_step() {
        let mission = MissionId::new("w1-grocery-run");
        assert_eq!(StepId::for_step(&mission, 2).as_str(), "w1-grocery-run.2");
    }

    #[test]
    fn test_mission_id_serializes_as_plain_string() {
        let id = MissionId::from("w2-library-card");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"w2-library-card\"");
        let back: MissionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
