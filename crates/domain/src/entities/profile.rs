//! User preference profile
//!
//! Three single-choice answers given during onboarding. They bias the order
//! of "this week's missions" through relevance tags.

use serde::{Deserialize, Serialize};

/// Answers offered for "What matters most this month?"
pub const GOAL_OPTIONS: &[&str] = &[
    "Staying healthy",
    "Saving money",
    "Exploring the city",
    "Meeting people",
];

/// Answers offered for "How do you eat?"
pub const DIET_OPTIONS: &[&str] = &["Anything goes", "Vegetarian", "Vegan"];

/// Answers offered for "How do you like to tackle new things?"
pub const STYLE_OPTIONS: &[&str] = &["One small step at a time", "Dive right in", "With a friend"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferenceProfile {
    pub goal: String,
    pub diet: String,
    pub style: String,
}

impl UserPreferenceProfile {
    pub fn new(
        goal: impl Into<String>,
        diet: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            goal: goal.into(),
            diet: diet.into(),
            style: style.into(),
        }
    }

    /// All three questions answered.
    pub fn is_complete(&self) -> bool {
        !self.goal.is_empty() && !self.diet.is_empty() && !self.style.is_empty()
    }

    /// Goal tags followed by diet tags.
    ///
    /// Not deduplicated: a health-focused omnivore gets `cooking` twice, which
    /// doubles its weight when missions are ranked.
    pub fn relevant_tags(&self) -> Vec<String> {
        goal_tags(&self.goal)
            .iter()
            .chain(diet_tags(&self.diet))
            .map(|tag| tag.to_string())
            .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn goal_tags(goal: &str) -> &'static [&'static str] {
    match goal {
        "Staying healthy" => &["fitness", "cooking"],
        "Saving money" => &["budget", "cooking"],
        "Exploring the city" => &["city", "social"],
        "Meeting people" => &["social", "growth"],
        _ => &[],
    }
}

fn diet_tags(diet: &str) -> &'static [&'static str] {
    match diet {
        "Vegetarian" => &["vegetarian"],
        "Vegan" => &["vegan"],
        _ => &["cooking"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_vegetarian() {
        let profile = UserPreferenceProfile::new("Staying healthy", "Vegetarian", "Dive right in");
        assert_eq!(profile.relevant_tags(), vec!["fitness", "cooking", "vegetarian"]);
    }

    #[test]
    fn test_healthy_omnivore_double_counts_cooking() {
        let profile = UserPreferenceProfile::new("Staying healthy", "Anything goes", "");
        assert_eq!(profile.relevant_tags(), vec!["fitness", "cooking", "cooking"]);
    }

    #[test]
    fn test_unknown_goal_adds_nothing() {
        let profile = UserPreferenceProfile::new("Learning to surf", "Vegan", "");
        assert_eq!(profile.relevant_tags(), vec!["vegan"]);
    }

    #[test]
    fn test_unset_diet_defaults_to_cooking() {
        let profile = UserPreferenceProfile::default();
        assert_eq!(profile.relevant_tags(), vec!["cooking"]);
    }

    #[test]
    fn test_is_complete_requires_all_answers() {
        let mut profile = UserPreferenceProfile::new("Saving money", "Vegan", "");
        assert!(!profile.is_complete());
        profile.style = STYLE_OPTIONS[0].to_string();
        assert!(profile.is_complete());
        profile.reset();
        assert_eq!(profile, UserPreferenceProfile::default());
    }
}
