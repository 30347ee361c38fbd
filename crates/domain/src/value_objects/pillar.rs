//! Mission pillars: the three top-level content categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    /// Getting to know the new city
    City,
    /// Running a household: money, food, paperwork
    AdultMode,
    /// Personal growth and connection
    Growth,
}

impl Pillar {
    pub fn all() -> &'static [Pillar] {
        &[Pillar::City, Pillar::AdultMode, Pillar::Growth]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pillar::City => "City",
            Pillar::AdultMode => "Adult Mode",
            Pillar::Growth => "Growth",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Pillar::City => "🏙️",
            Pillar::AdultMode => "🧾",
            Pillar::Growth => "🌱",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Pillar {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" => Ok(Pillar::City),
            "adult_mode" | "adult mode" | "adultmode" => Ok(Pillar::AdultMode),
            "growth" => Ok(Pillar::Growth),
            _ => Err(DomainError::parse(format!("Unknown pillar: {}", s))),
        }
    }
}
