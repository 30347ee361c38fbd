//! Mission catalog
//!
//! The authored curriculum, in display order. Authored content is fixed for
//! the life of the process; only per-mission completion and progress change,
//! through [`crate::AppSession`].
//!
//! The prerequisite graph is validated when the catalog is built, so lock
//! checks at runtime never meet a dangling or cyclic reference in authored
//! data.

mod week_four;
mod week_one;
mod week_three;
mod week_two;

use std::collections::{HashMap, HashSet};

use landfall_domain::{Mission, MissionId, WeekNumber};
use thiserror::Error;

/// Catalog validation failures. Each one is an authoring mistake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate mission id: {0}")]
    DuplicateId(MissionId),

    #[error("Mission '{mission}' requires unknown mission '{prerequisite}'")]
    MissingPrerequisite {
        mission: MissionId,
        prerequisite: MissionId,
    },

    #[error("Mission '{0}' cannot require itself")]
    SelfPrerequisite(MissionId),

    #[error("Mission '{mission}' ({mission_week}) requires '{prerequisite}' from later {prerequisite_week}")]
    ForwardPrerequisite {
        mission: MissionId,
        mission_week: WeekNumber,
        prerequisite: MissionId,
        prerequisite_week: WeekNumber,
    },

    #[error("Prerequisite cycle: {}", format_cycle(.0))]
    PrerequisiteCycle(Vec<MissionId>),
}

fn format_cycle(cycle: &[MissionId]) -> String {
    cycle
        .iter()
        .map(MissionId::as_str)
        .collect::<Vec<_>>()
        .join(" → ")
}

#[derive(Debug, Clone)]
pub struct Catalog {
    missions: Vec<Mission>,
    index: HashMap<MissionId, usize>,
}

impl Catalog {
    /// Build a catalog from missions in display order.
    pub fn new(missions: Vec<Mission>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(missions.len());
        for (position, mission) in missions.iter().enumerate() {
            if index.insert(mission.id().clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(mission.id().clone()));
            }
        }

        let catalog = Self { missions, index };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The bundled four-week curriculum.
    pub fn authored() -> Result<Self, CatalogError> {
        let missions = week_one::missions()
            .into_iter()
            .chain(week_two::missions())
            .chain(week_three::missions())
            .chain(week_four::missions())
            .collect();
        Self::new(missions)
    }

    pub fn all(&self) -> &[Mission] {
        &self.missions
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn mission(&self, id: &MissionId) -> Option<&Mission> {
        self.index.get(id).map(|&position| &self.missions[position])
    }

    pub(crate) fn mission_mut(&mut self, id: &MissionId) -> Option<&mut Mission> {
        match self.index.get(id) {
            Some(&position) => self.missions.get_mut(position),
            None => None,
        }
    }

    pub(crate) fn missions_mut(&mut self) -> &mut [Mission] {
        &mut self.missions
    }

    /// Title of the mission with `id`, or an empty string when it is unknown.
    pub fn mission_title_or_placeholder(&self, id: &MissionId) -> String {
        self.mission(id)
            .map(|mission| mission.title().to_string())
            .unwrap_or_default()
    }

    /// Title of the mission's prerequisite, or an empty string when it has
    /// none or the reference does not resolve.
    pub fn prerequisite_title(&self, mission: &Mission) -> String {
        mission
            .prerequisite()
            .map(|id| self.mission_title_or_placeholder(id))
            .unwrap_or_default()
    }

    /// Every prerequisite must resolve to another mission no later in the
    /// curriculum, with no chain looping back on itself. `new` runs this.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for mission in &self.missions {
            let Some(prerequisite_id) = mission.prerequisite() else {
                continue;
            };
            if prerequisite_id == mission.id() {
                return Err(CatalogError::SelfPrerequisite(mission.id().clone()));
            }
            let Some(prerequisite) = self.mission(prerequisite_id) else {
                return Err(CatalogError::MissingPrerequisite {
                    mission: mission.id().clone(),
                    prerequisite: prerequisite_id.clone(),
                });
            };
            if prerequisite.week() > mission.week() {
                return Err(CatalogError::ForwardPrerequisite {
                    mission: mission.id().clone(),
                    mission_week: mission.week(),
                    prerequisite: prerequisite_id.clone(),
                    prerequisite_week: prerequisite.week(),
                });
            }
        }

        self.detect_cycles()
    }

    /// Each mission has at most one prerequisite, so every walk is a chain;
    /// a chain that revisits a mission on the current path is a cycle.
    fn detect_cycles(&self) -> Result<(), CatalogError> {
        let mut cleared: HashSet<&MissionId> = HashSet::new();

        for mission in &self.missions {
            let mut path: Vec<&MissionId> = Vec::new();
            let mut current = Some(mission);

            while let Some(node) = current {
                if cleared.contains(node.id()) {
                    break;
                }
                if let Some(start) = path.iter().position(|id| *id == node.id()) {
                    let mut cycle: Vec<MissionId> =
                        path[start..].iter().map(|id| (*id).clone()).collect();
                    cycle.push(node.id().clone());
                    return Err(CatalogError::PrerequisiteCycle(cycle));
                }
                path.push(node.id());
                current = node.prerequisite().and_then(|id| self.mission(id));
            }

            cleared.extend(path);
        }

        Ok(())
    }
}
