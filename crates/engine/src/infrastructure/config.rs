//! Engine configuration from the environment.
//!
//! | Variable                  | Default                          |
//! |---------------------------|----------------------------------|
//! | `LANDFALL_STORAGE_PATH`   | platform config dir/storage.json |
//! | `LANDFALL_SIMULATE_WEEK`  | unset (real week clock)          |
//! | `LANDFALL_PREFERENCE_SORT`| `true`                           |
//!
//! `LANDFALL_SIMULATE_WEEK` stands in for the debug menu and is only honored
//! in debug builds.

use std::path::PathBuf;

use landfall_domain::WeekNumber;

use crate::infrastructure::storage::default_storage_path;

pub const STORAGE_PATH_VAR: &str = "LANDFALL_STORAGE_PATH";
pub const SIMULATE_WEEK_VAR: &str = "LANDFALL_SIMULATE_WEEK";
pub const PREFERENCE_SORT_VAR: &str = "LANDFALL_PREFERENCE_SORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub storage_path: PathBuf,
    /// Applied at startup as if chosen from the debug menu
    pub simulate_week: Option<WeekNumber>,
    /// Rank this week's missions by the profile's relevance tags
    pub preference_sort: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            simulate_week: None,
            preference_sort: true,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Invalid values fall back to defaults
    /// with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::build(lookup, cfg!(debug_assertions))
    }

    fn build(lookup: impl Fn(&str) -> Option<String>, debug_menu: bool) -> Self {
        let storage_path = lookup(STORAGE_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_storage_path);

        let simulate_week = lookup(SIMULATE_WEEK_VAR).and_then(|raw| {
            if !debug_menu {
                tracing::warn!(value = %raw, "Ignoring {} outside debug builds", SIMULATE_WEEK_VAR);
                return None;
            }
            let week = raw
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|week| WeekNumber::new(week).ok());
            if week.is_none() {
                tracing::warn!(value = %raw, "Ignoring {}, expected 1-4", SIMULATE_WEEK_VAR);
            }
            week
        });

        let preference_sort = match lookup(PREFERENCE_SORT_VAR) {
            None => true,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => {
                    tracing::warn!(value = %raw, "Ignoring {}", PREFERENCE_SORT_VAR);
                    true
                }
            },
        };

        Self {
            storage_path,
            simulate_week,
            preference_sort,
        }
    }
}
