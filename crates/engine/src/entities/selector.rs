//! Mission selection: this week's list, prerequisite locks and title search.

use std::cmp::Reverse;

use landfall_domain::{tag_overlap, Mission, Pillar, WeekNumber};

use crate::catalog::Catalog;

/// Whether a mission can be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockState {
    Unlocked,
    /// Shown but not openable until the prerequisite is complete.
    /// `prerequisite_title` is empty when the reference does not resolve.
    Locked { prerequisite_title: String },
}

impl LockState {
    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub mission: &'a Mission,
    pub locked: bool,
}

/// Read-only queries over a catalog.
pub struct MissionSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> MissionSelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Missions of `week`, in catalog order when `tags` is empty, otherwise
    /// by descending tag overlap. Ties keep catalog order.
    pub fn missions_for_week(&self, week: WeekNumber, tags: &[String]) -> Vec<&'a Mission> {
        let mut missions: Vec<&'a Mission> = self
            .catalog
            .all()
            .iter()
            .filter(|mission| mission.week() == week)
            .collect();

        if !tags.is_empty() {
            // sort_by_key is stable
            missions.sort_by_key(|mission| Reverse(tag_overlap(mission.tags(), tags)));
        }

        missions
    }

    pub fn missions_for_week_in_pillar(
        &self,
        week: WeekNumber,
        pillar: Pillar,
        tags: &[String],
    ) -> Vec<&'a Mission> {
        self.missions_for_week(week, tags)
            .into_iter()
            .filter(|mission| mission.pillar() == pillar)
            .collect()
    }

    /// Locked iff a prerequisite is declared and it is not a complete mission
    /// of this catalog.
    pub fn is_locked(&self, mission: &Mission) -> bool {
        match mission.prerequisite() {
            None => false,
            Some(id) => !self
                .catalog
                .mission(id)
                .is_some_and(|prerequisite| prerequisite.is_complete()),
        }
    }

    pub fn lock_state(&self, mission: &Mission) -> LockState {
        if self.is_locked(mission) {
            LockState::Locked {
                prerequisite_title: self.catalog.prerequisite_title(mission),
            }
        } else {
            LockState::Unlocked
        }
    }

    /// Case-insensitive substring match on titles across the whole catalog,
    /// ignoring week, pillar and lock state. A blank query matches nothing;
    /// otherwise the query is matched as typed, surrounding spaces included.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.catalog
            .all()
            .iter()
            .filter(|mission| mission.title().to_lowercase().contains(&needle))
            .map(|mission| SearchHit {
                mission,
                locked: self.is_locked(mission),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landfall_domain::MissionId;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn small_catalog() -> Catalog {
        let w1 = WeekNumber::ONE;
        Catalog::new(vec![
            Mission::new("a", "Alpha walk", Pillar::City, w1).with_tags(&["city"]),
            Mission::new("b", "Budget basics", Pillar::AdultMode, w1).with_tags(&["budget"]),
            Mission::new("c", "Cooking night", Pillar::AdultMode, w1)
                .with_tags(&["cooking", "budget"]),
            Mission::new("d", "Dance class", Pillar::Growth, w1).with_tags(&["social"]),
            Mission::new("e", "Evening BUDGET check", Pillar::AdultMode, WeekNumber::TWO)
                .with_tags(&["budget"])
                .with_prerequisite("b"),
        ])
        .unwrap()
    }

    fn ids(missions: &[&Mission]) -> Vec<String> {
        missions.iter().map(|m| m.id().to_string()).collect()
    }

    #[test]
    fn test_no_tags_keeps_catalog_order() {
        let catalog = small_catalog();
        let selector = MissionSelector::new(&catalog);
        let week = selector.missions_for_week(WeekNumber::ONE, &[]);
        assert_eq!(ids(&week), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_tags_sort_by_overlap_stably() {
        let catalog = small_catalog();
        let selector = MissionSelector::new(&catalog);
        let week = selector.missions_for_week(WeekNumber::ONE, &tags(&["budget", "cooking"]));
        // c matches 2, b matches 1, a and d tie at 0 in catalog order
        assert_eq!(ids(&week), vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn test_duplicate_tags_weigh_more() {
        let catalog = small_catalog();
        let selector = MissionSelector::new(&catalog);
        let week =
            selector.missions_for_week(WeekNumber::ONE, &tags(&["city", "city", "budget"]));
        assert_eq!(ids(&week), vec!["a", "b", "c", "d"]);

        let week = selector.missions_for_week(WeekNumber::ONE, &tags(&["social", "budget"]));
        assert_eq!(ids(&week), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_sorted_is_permutation_with_monotone_overlap() {
        let catalog = Catalog::authored().unwrap();
        let selector = MissionSelector::new(&catalog);
        let wanted = tags(&["fitness", "cooking", "cooking"]);
        for week in WeekNumber::all() {
            let plain = selector.missions_for_week(week, &[]);
            let sorted = selector.missions_for_week(week, &wanted);

            let mut plain_ids = ids(&plain);
            let mut sorted_ids = ids(&sorted);
            plain_ids.sort();
            sorted_ids.sort();
            assert_eq!(plain_ids, sorted_ids);

            for pair in sorted.windows(2) {
                let a = tag_overlap(pair[0].tags(), &wanted);
                let b = tag_overlap(pair[1].tags(), &wanted);
                assert!(a >= b);
                if a == b {
                    let pos = |m: &Mission| plain.iter().position(|p| p.id() == m.id());
                    assert!(pos(pair[0]) < pos(pair[1]));
                }
            }
        }
    }

    #[test]
    fn test_pillar_filter() {
        let catalog = small_catalog();
        let selector = MissionSelector::new(&catalog);
        let adult = selector.missions_for_week_in_pillar(
            WeekNumber::ONE,
            Pillar::AdultMode,
            &tags(&["cooking"]),
        );
        assert_eq!(ids(&adult), vec!["c", "b"]);
    }

    #[test]
    fn test_lock_follows_prerequisite_completion() {
        let mut catalog = small_catalog();
        let e = MissionId::new("e");
        {
            let selector = MissionSelector::new(&catalog);
            let mission = catalog.mission(&e).unwrap();
            assert!(selector.is_locked(mission));
            assert_eq!(
                selector.lock_state(mission),
                LockState::Locked {
                    prerequisite_title: "Budget basics".to_string()
                }
            );
        }

        catalog.mission_mut(&MissionId::new("b")).unwrap().mark_complete();
        let selector = MissionSelector::new(&catalog);
        let mission = catalog.mission(&e).unwrap();
        assert!(!selector.is_locked(mission));
        assert_eq!(selector.lock_state(mission), LockState::Unlocked);
    }

    #[test]
    fn test_unresolved_prerequisite_is_locked() {
        let catalog = small_catalog();
        let selector = MissionSelector::new(&catalog);
        let stray = Mission::new("x", "Stray", Pillar::City, WeekNumber::ONE).with_prerequisite("nope");
        assert!(selector.is_locked(&stray));
        assert_eq!(
            selector.lock_state(&stray),
            LockState::Locked {
                prerequisite_title: String::new()
            }
        );
    }

    #[test]
    fn test_search_is_case_insensitive_on_titles() {
        let catalog = small_catalog();
        let selector = MissionSelector::new(&catalog);
        let hits = selector.search("budget");
        let found: Vec<&str> = hits.iter().map(|h| h.mission.id().as_str()).collect();
        assert_eq!(found, vec!["b", "e"]);
        assert!(!hits[0].locked);
        assert!(hits[1].locked);
    }

    #[test]
    fn test_search_ignores_tags_and_blank_queries() {
        let catalog = small_catalog();
        let selector = MissionSelector::new(&catalog);
        assert!(selector.search("social").is_empty());
        assert!(selector.search("   ").is_empty());
        assert!(selector.search("zzz").is_empty());
    }

    #[test]
    fn test_search_keeps_leading_whitespace() {
        let catalog = Catalog::new(vec![
            Mission::new("a", "Tea", Pillar::City, WeekNumber::ONE),
            Mission::new("b", "A tea party", Pillar::Growth, WeekNumber::ONE),
        ])
        .unwrap();
        let selector = MissionSelector::new(&catalog);

        let found: Vec<&str> = selector
            .search(" tea")
            .iter()
            .map(|h| h.mission.id().as_str())
            .collect();
        assert_eq!(found, vec!["b"]);
        assert_eq!(selector.search("tea").len(), 2);
    }

    #[test]
    fn test_search_authored_budget_titles() {
        let catalog = Catalog::authored().unwrap();
        let selector = MissionSelector::new(&catalog);
        let hits = selector.search("BUDGET");
        for mission in catalog.all() {
            let expected = mission.title().to_lowercase().contains("budget");
            let found = hits.iter().any(|h| h.mission.id() == mission.id());
            assert_eq!(expected, found, "{}", mission.title());
        }
        assert!(hits.len() >= 3);
    }
}
