//! Mission entity - one actionable task in the four-week curriculum
//!
//! A mission carries three content variants, one per [`Mood`]. Most authored
//! missions use the same text for every mood (see [`Mission::with_content`]),
//! but nothing here assumes the variants are equal.
//!
//! Authored fields never change at runtime. Only `is_complete` and `progress`
//! are mutable, and the engine persists them after every mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::MissionProgress;
use crate::ids::{MissionId, StepId};
use crate::value_objects::{Mood, Pillar, WeekNumber};

/// One actionable item within a mission's step list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionStep {
    id: StepId,
    /// 1-based ordinal
    number: u32,
    action: String,
    how_to: String,
    tip: Option<String>,
}

impl MissionStep {
    /// Create an unbound step. Its id is fixed once the step is attached to a
    /// mission.
    pub fn new(number: u32, action: impl Into<String>, how_to: impl Into<String>) -> Self {
        Self {
            id: StepId::new(format!("step.{}", number)),
            number,
            action: action.into(),
            how_to: how_to.into(),
            tip: None,
        }
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    /// Derive this step's id from the owning mission.
    pub fn bound_to(mut self, mission: &MissionId) -> Self {
        self.id = StepId::for_step(mission, self.number);
        self
    }

    pub fn id(&self) -> &StepId {
        &self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn how_to(&self) -> &str {
        &self.how_to
    }

    pub fn tip(&self) -> Option<&str> {
        self.tip.as_deref()
    }
}

/// Kind of supplementary pointer shown alongside steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    App,
    Place,
    Tip,
    Warning,
    Cost,
}

impl ResourceType {
    pub fn emoji(&self) -> &'static str {
        match self {
            ResourceType::App => "📱",
            ResourceType::Place => "📍",
            ResourceType::Tip => "💡",
            ResourceType::Warning => "⚠️",
            ResourceType::Cost => "💸",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::App => "app",
            ResourceType::Place => "place",
            ResourceType::Tip => "tip",
            ResourceType::Warning => "warning",
            ResourceType::Cost => "cost",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionResource {
    resource_type: ResourceType,
    name: String,
    detail: String,
    url: Option<String>,
}

impl MissionResource {
    pub fn new(
        resource_type: ResourceType,
        name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            resource_type,
            name: name.into(),
            detail: detail.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// The mood-specific text of a mission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodContent {
    briefing: String,
    truth: String,
    win: String,
    steps: Vec<MissionStep>,
    resources: Vec<MissionResource>,
}

impl MoodContent {
    pub fn new(
        briefing: impl Into<String>,
        truth: impl Into<String>,
        win: impl Into<String>,
    ) -> Self {
        Self {
            briefing: briefing.into(),
            truth: truth.into(),
            win: win.into(),
            steps: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<MissionStep>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_resources(mut self, resources: Vec<MissionResource>) -> Self {
        self.resources = resources;
        self
    }

    pub fn briefing(&self) -> &str {
        &self.briefing
    }

    pub fn truth(&self) -> &str {
        &self.truth
    }

    pub fn win(&self) -> &str {
        &self.win
    }

    pub fn steps(&self) -> &[MissionStep] {
        &self.steps
    }

    pub fn resources(&self) -> &[MissionResource] {
        &self.resources
    }

    pub fn has_step(&self, step_id: &StepId) -> bool {
        self.steps.iter().any(|step| step.id() == step_id)
    }

    fn bound_to(mut self, mission: &MissionId) -> Self {
        self.steps = self
            .steps
            .into_iter()
            .map(|step| step.bound_to(mission))
            .collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct MoodVariants {
    ready: MoodContent,
    overwhelmed: MoodContent,
    lonely: MoodContent,
}

impl MoodVariants {
    fn get(&self, mood: Mood) -> &MoodContent {
        match mood {
            Mood::Ready => &self.ready,
            Mood::Overwhelmed => &self.overwhelmed,
            Mood::Lonely => &self.lonely,
        }
    }

    fn set(&mut self, mood: Mood, content: MoodContent) {
        match mood {
            Mood::Ready => self.ready = content,
            Mood::Overwhelmed => self.overwhelmed = content,
            Mood::Lonely => self.lonely = content,
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    id: MissionId,
    title: String,
    pillar: Pillar,
    week: WeekNumber,
    tags: Vec<String>,
    /// Free-text estimate, display only
    duration: String,
    xp_value: u32,
    prerequisite: Option<MissionId>,
    objective: String,
    content: MoodVariants,
    is_complete: bool,
    progress: Option<MissionProgress>,
}

impl Mission {
    pub fn new(
        id: impl Into<MissionId>,
        title: impl Into<String>,
        pillar: Pillar,
        week: WeekNumber,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            pillar,
            week,
            tags: Vec::new(),
            duration: String::new(),
            xp_value: 0,
            prerequisite: None,
            objective: String::new(),
            content: MoodVariants::default(),
            is_complete: false,
            progress: None,
        }
    }

    // === Builder Methods ===

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn with_xp(mut self, xp_value: u32) -> Self {
        self.xp_value = xp_value;
        self
    }

    pub fn with_prerequisite(mut self, prerequisite: impl Into<MissionId>) -> Self {
        self.prerequisite = Some(prerequisite.into());
        self
    }

    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    /// Use the same content for every mood.
    pub fn with_content(mut self, content: MoodContent) -> Self {
        let content = content.bound_to(&self.id);
        for mood in Mood::all() {
            self.content.set(*mood, content.clone());
        }
        self
    }

    /// Replace the content for one mood.
    pub fn with_mood_content(mut self, mood: Mood, content: MoodContent) -> Self {
        let content = content.bound_to(&self.id);
        self.content.set(mood, content);
        self
    }

    // === Accessors ===

    pub fn id(&self) -> &MissionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pillar(&self) -> Pillar {
        self.pillar
    }

    pub fn week(&self) -> WeekNumber {
        self.week
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn xp_value(&self) -> u32 {
        self.xp_value
    }

    pub fn prerequisite(&self) -> Option<&MissionId> {
        self.prerequisite.as_ref()
    }

    pub fn objective(&self) -> &str {
        &self.objective
    }

    pub fn content(&self, mood: Mood) -> &MoodContent {
        self.content.get(mood)
    }

    pub fn steps(&self, mood: Mood) -> &[MissionStep] {
        self.content.get(mood).steps()
    }

    /// The mood this mission is shown in: the progress's active mood once
    /// started, `fallback` before that.
    pub fn display_mood(&self, fallback: Mood) -> Mood {
        self.progress
            .as_ref()
            .map(MissionProgress::active_mood)
            .unwrap_or(fallback)
    }

    /// Whether any mood variant contains the step.
    pub fn has_step(&self, step_id: &StepId) -> bool {
        Mood::all()
            .iter()
            .any(|mood| self.content.get(*mood).has_step(step_id))
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn progress(&self) -> Option<&MissionProgress> {
        self.progress.as_ref()
    }

    /// Whether every step of the active mood's variant is checked.
    pub fn is_all_steps_checked(&self) -> bool {
        match &self.progress {
            Some(progress) => progress.is_all_complete(self.steps(progress.active_mood())),
            None => false,
        }
    }

    // === Mutation ===

    /// Creates progress on first open; later opens leave it untouched.
    pub fn start(&mut self, mood: Mood) -> &mut MissionProgress {
        self.progress.get_or_insert_with(|| MissionProgress::new(mood))
    }

    /// Switches the active mood, starting the mission if needed.
    pub fn switch_mood(&mut self, mood: Mood) {
        self.start(mood).switch_mood(mood);
    }

    /// Toggles a step, starting the mission in `mood` if it was never opened.
    /// Returns whether the step is checked afterwards.
    pub fn toggle_step(&mut self, step_id: &StepId, mood: Mood) -> bool {
        self.start(mood).toggle(step_id)
    }

    /// Returns true if this call completed the mission.
    pub fn mark_complete(&mut self) -> bool {
        let newly = !self.is_complete;
        self.is_complete = true;
        newly
    }

    pub fn set_complete(&mut self, is_complete: bool) {
        self.is_complete = is_complete;
    }

    pub fn set_progress(&mut self, progress: Option<MissionProgress>) {
        self.progress = progress;
    }

    /// Back to the authored state: incomplete, never opened.
    pub fn reset(&mut self) {
        self.is_complete = false;
        self.progress = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grocery_run() -> Mission {
        Mission::new("w1-grocery-run", "First grocery run", Pillar::AdultMode, WeekNumber::ONE)
            .with_tags(&["budget", "cooking"])
            .with_xp(50)
            .with_content(
                MoodContent::new("Fill the fridge", "Nobody else will", "Food for a week")
                    .with_steps(vec![
                        MissionStep::new(1, "Write a list", "Plan five meals"),
                        MissionStep::new(2, "Go shopping", "Stick to the list")
                            .with_tip("Eat before you go"),
                    ])
                    .with_resources(vec![MissionResource::new(
                        ResourceType::Cost,
                        "Weekly shop",
                        "Roughly 40-60",
                    )]),
            )
            .with_mood_content(
                Mood::Overwhelmed,
                MoodContent::new("Just the basics", "Small is fine", "Something to eat")
                    .with_steps(vec![MissionStep::new(1, "Buy three staples", "Bread, eggs, fruit")]),
            )
    }

    #[test]
    fn test_step_ids_bound_to_mission() {
        let mission = grocery_run();
        let ids: Vec<&str> = mission
            .steps(Mood::Ready)
            .iter()
            .map(|s| s.id().as_str())
            .collect();
        assert_eq!(ids, vec!["w1-grocery-run.1", "w1-grocery-run.2"]);
        assert_eq!(
            mission.steps(Mood::Overwhelmed)[0].id().as_str(),
            "w1-grocery-run.1"
        );
    }

    #[test]
    fn test_mood_variants_may_diverge() {
        let mission = grocery_run();
        assert_eq!(mission.steps(Mood::Ready).len(), 2);
        assert_eq!(mission.steps(Mood::Lonely).len(), 2);
        assert_eq!(mission.steps(Mood::Overwhelmed).len(), 1);
        assert_eq!(mission.content(Mood::Overwhelmed).briefing(), "Just the basics");
    }

    #[test]
    fn test_start_captures_mood_once() {
        let mut mission = grocery_run();
        mission.start(Mood::Lonely);
        mission.start(Mood::Ready);
        let progress = mission.progress().unwrap();
        assert_eq!(progress.starting_mood(), Mood::Lonely);
        assert_eq!(progress.active_mood(), Mood::Lonely);
    }

    #[test]
    fn test_switch_mood_keeps_starting_mood() {
        let mut mission = grocery_run();
        mission.start(Mood::Ready);
        mission.switch_mood(Mood::Overwhelmed);
        let progress = mission.progress().unwrap();
        assert_eq!(progress.starting_mood(), Mood::Ready);
        assert_eq!(progress.active_mood(), Mood::Overwhelmed);
        assert_eq!(mission.display_mood(Mood::Lonely), Mood::Overwhelmed);
    }

    #[test]
    fn test_all_steps_checked_follows_active_mood() {
        let mut mission = grocery_run();
        let first = StepId::for_step(mission.id(), 1);
        mission.toggle_step(&first, Mood::Ready);
        assert!(!mission.is_all_steps_checked());

        mission.switch_mood(Mood::Overwhelmed);
        assert!(mission.is_all_steps_checked());
    }

    #[test]
    fn test_mark_complete_reports_transition_once() {
        let mut mission = grocery_run();
        assert!(mission.mark_complete());
        assert!(!mission.mark_complete());
        assert!(mission.is_complete());
    }

    #[test]
    fn test_reset() {
        let mut mission = grocery_run();
        mission.start(Mood::Ready);
        mission.mark_complete();
        mission.reset();
        assert!(!mission.is_complete());
        assert!(mission.progress().is_none());
    }

    #[test]
    fn test_has_step() {
        let mission = grocery_run();
        assert!(mission.has_step(&StepId::new("w1-grocery-run.2")));
        assert!(!mission.has_step(&StepId::new("w1-grocery-run.3")));
    }
}
