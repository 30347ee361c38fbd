//! Per-mission progress
//!
//! Created the first time a user opens a mission. The starting mood is
//! captured once; the active mood follows later switches.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::MissionStep;
use crate::ids::StepId;
use crate::value_objects::Mood;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionProgress {
    starting_mood: Mood,
    active_mood: Mood,
    /// Serialized as a plain list; order carries no meaning
    #[serde(default)]
    checked_step_ids: BTreeSet<StepId>,
}

impl MissionProgress {
    pub fn new(mood: Mood) -> Self {
        Self {
            starting_mood: mood,
            active_mood: mood,
            checked_step_ids: BTreeSet::new(),
        }
    }

    pub fn starting_mood(&self) -> Mood {
        self.starting_mood
    }

    pub fn active_mood(&self) -> Mood {
        self.active_mood
    }

    pub fn checked_step_ids(&self) -> &BTreeSet<StepId> {
        &self.checked_step_ids
    }

    pub fn is_checked(&self, step_id: &StepId) -> bool {
        self.checked_step_ids.contains(step_id)
    }

    pub fn switch_mood(&mut self, mood: Mood) {
        self.active_mood = mood;
    }

    /// Checks the step if unchecked, unchecks it otherwise. Returns whether the
    /// step is checked afterwards.
    pub fn toggle(&mut self, step_id: &StepId) -> bool {
        if self.checked_step_ids.remove(step_id) {
            false
        } else {
            self.checked_step_ids.insert(step_id.clone());
            true
        }
    }

    pub fn completed_count(&self, steps: &[MissionStep]) -> usize {
        steps
            .iter()
            .filter(|step| self.checked_step_ids.contains(step.id()))
            .count()
    }

    /// False for an empty step list regardless of checked ids.
    pub fn is_all_complete(&self, steps: &[MissionStep]) -> bool {
        !steps.is_empty() && self.completed_count(steps) == steps.len()
    }

    /// Share of `steps` checked, in `0.0..=1.0`.
    pub fn fraction(&self, steps: &[MissionStep]) -> f32 {
        if steps.is_empty() {
            return 0.0;
        }
        self.completed_count(steps) as f32 / steps.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::MissionId;

    fn steps(mission: &str, count: u32) -> Vec<MissionStep> {
        let id = MissionId::new(mission);
        (1..=count)
            .map(|n| MissionStep::new(n, format!("Step {}", n), "Do it").bound_to(&id))
            .collect()
    }

    #[test]
    fn test_new_captures_starting_mood() {
        let mut progress = MissionProgress::new(Mood::Lonely);
        progress.switch_mood(Mood::Ready);
        assert_eq!(progress.starting_mood(), Mood::Lonely);
        assert_eq!(progress.active_mood(), Mood::Ready);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut progress = MissionProgress::new(Mood::Ready);
        let a = StepId::new("m.1");
        let b = StepId::new("m.2");
        progress.toggle(&a);
        progress.toggle(&b);
        let before = progress.clone();

        assert!(!progress.toggle(&a));
        assert!(progress.toggle(&a));
        assert_eq!(progress, before);

        let c = StepId::new("m.3");
        assert!(progress.toggle(&c));
        assert!(!progress.toggle(&c));
        assert_eq!(progress, before);
    }

    #[test]
    fn test_completed_count_ignores_foreign_ids() {
        let steps = steps("m", 3);
        let mut progress = MissionProgress::new(Mood::Ready);
        progress.toggle(steps[0].id());
        progress.toggle(&StepId::new("other.1"));
        assert_eq!(progress.completed_count(&steps), 1);
        assert!(!progress.is_all_complete(&steps));
    }

    #[test]
    fn test_all_complete() {
        let steps = steps("m", 2);
        let mut progress = MissionProgress::new(Mood::Ready);
        for step in &steps {
            progress.toggle(step.id());
        }
        assert!(progress.is_all_complete(&steps));
        assert_eq!(progress.fraction(&steps), 1.0);
    }

    #[test]
    fn test_empty_steps_never_complete() {
        let mut progress = MissionProgress::new(Mood::Ready);
        progress.toggle(&StepId::new("m.1"));
        assert!(!progress.is_all_complete(&[]));
        assert_eq!(progress.fraction(&[]), 0.0);
    }

    #[test]
    fn test_serialized_shape() {
        let mut progress = MissionProgress::new(Mood::Overwhelmed);
        progress.toggle(&StepId::new("m.2"));
        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["startingMood"], "overwhelmed");
        assert_eq!(json["activeMood"], "overwhelmed");
        assert_eq!(json["checkedStepIds"], serde_json::json!(["m.2"]));
    }

    #[test]
    fn test_deserialize_without_checked_ids() {
        let progress: MissionProgress =
            serde_json::from_str(r#"{"startingMood":"ready","activeMood":"lonely"}"#).unwrap();
        assert_eq!(progress.active_mood(), Mood::Lonely);
        assert!(progress.checked_step_ids().is_empty());
    }
}
