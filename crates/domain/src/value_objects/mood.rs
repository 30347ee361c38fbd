//! User mood
//!
//! The mood picked at the daily check-in decides which content variant of a
//! mission is shown. It is a closed set; every mission carries all three.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// How the user feels today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Energised, up for the full version of a mission
    #[default]
    Ready,
    /// Too much going on; smaller steps
    Overwhelmed,
    /// Missing home; steps lean towards people
    Lonely,
}

impl Mood {
    /// Get all moods for the check-in picker
    pub fn all() -> &'static [Mood] {
        &[Mood::Ready, Mood::Overwhelmed, Mood::Lonely]
    }

    /// Get a display name for the mood
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Ready => "Ready",
            Mood::Overwhelmed => "Overwhelmed",
            Mood::Lonely => "Lonely",
        }
    }

    /// Stable lowercase name used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Ready => "ready",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Lonely => "lonely",
        }
    }

    /// Get an emoji representation for UI
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Ready => "🚀",
            Mood::Overwhelmed => "🌊",
            Mood::Lonely => "🫂",
        }
    }

    /// Short prompt shown under the emoji on the check-in screen
    pub fn prompt(&self) -> &'static str {
        match self {
            Mood::Ready => "Let's do this",
            Mood::Overwhelmed => "It's a lot right now",
            Mood::Lonely => "Missing my people",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ready" => Ok(Mood::Ready),
            "overwhelmed" => Ok(Mood::Overwhelmed),
            "lonely" => Ok(Mood::Lonely),
            _ => Err(DomainError::parse(format!("Unknown mood: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mood_is_ready() {
        assert_eq!(Mood::default(), Mood::Ready);
    }

    #[test]
    fn test_from_str_accepts_display_and_storage_names() {
        for mood in Mood::all() {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), *mood);
            assert_eq!(mood.display_name().parse::<Mood>().unwrap(), *mood);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "sleepy".parse::<Mood>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Mood::Overwhelmed).unwrap();
        assert_eq!(json, "\"overwhelmed\"");
    }
}
