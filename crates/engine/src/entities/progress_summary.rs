//! Derived progress figures for the week header and the star map.
//!
//! Each completed mission lights one star; a week's constellation is complete
//! when all of its missions are.

use landfall_domain::{Mission, Pillar, WeekNumber};

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub completed: usize,
    pub total: usize,
}

impl Tally {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f32 / self.total as f32
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub weeks: Vec<(WeekNumber, Tally)>,
    pub pillars: Vec<(Pillar, Tally)>,
    pub overall: Tally,
    pub earned_xp: u32,
    pub available_xp: u32,
}

impl ProgressSummary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let missions = catalog.all();

        let weeks = WeekNumber::all()
            .into_iter()
            .map(|week| (week, tally(missions.iter().filter(|m| m.week() == week))))
            .collect();
        let pillars = Pillar::all()
            .iter()
            .map(|&pillar| (pillar, tally(missions.iter().filter(|m| m.pillar() == pillar))))
            .collect();

        let earned_xp = missions
            .iter()
            .filter(|m| m.is_complete())
            .map(Mission::xp_value)
            .sum();
        let available_xp = missions.iter().map(Mission::xp_value).sum();

        Self {
            weeks,
            pillars,
            overall: tally(missions.iter()),
            earned_xp,
            available_xp,
        }
    }

    pub fn week(&self, week: WeekNumber) -> Tally {
        self.weeks
            .iter()
            .find(|(w, _)| *w == week)
            .map(|(_, tally)| *tally)
            .unwrap_or(Tally {
                completed: 0,
                total: 0,
            })
    }

    /// Stars lit on the map.
    pub fn stars_lit(&self) -> usize {
        self.overall.completed
    }
}

fn tally<'a>(missions: impl Iterator<Item = &'a Mission>) -> Tally {
    missions.fold(
        Tally {
            completed: 0,
            total: 0,
        },
        |tally, mission| Tally {
            completed: tally.completed + usize::from(mission.is_complete()),
            total: tally.total + 1,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use landfall_domain::MissionId;

    #[test]
    fn test_summary_counts_completed_missions() {
        let mut catalog = Catalog::new(vec![
            Mission::new("a", "A", Pillar::City, WeekNumber::ONE).with_xp(50),
            Mission::new("b", "B", Pillar::Growth, WeekNumber::ONE).with_xp(30),
            Mission::new("c", "C", Pillar::City, WeekNumber::TWO).with_xp(70),
        ])
        .unwrap();
        catalog.mission_mut(&MissionId::new("a")).unwrap().mark_complete();

        let summary = ProgressSummary::from_catalog(&catalog);
        assert_eq!(summary.week(WeekNumber::ONE), Tally { completed: 1, total: 2 });
        assert_eq!(summary.week(WeekNumber::TWO), Tally { completed: 0, total: 1 });
        assert_eq!(summary.week(WeekNumber::FOUR).total, 0);
        assert_eq!(summary.overall, Tally { completed: 1, total: 3 });
        assert_eq!(summary.earned_xp, 50);
        assert_eq!(summary.available_xp, 150);
        assert_eq!(summary.stars_lit(), 1);

        let city = summary.pillars.iter().find(|(p, _)| *p == Pillar::City).unwrap().1;
        assert_eq!(city, Tally { completed: 1, total: 2 });
    }

    #[test]
    fn test_tally_fraction() {
        assert_eq!(Tally { completed: 0, total: 0 }.fraction(), 0.0);
        assert!(!Tally { completed: 0, total: 0 }.is_complete());
        assert_eq!(Tally { completed: 2, total: 4 }.fraction(), 0.5);
        assert!(Tally { completed: 4, total: 4 }.is_complete());
    }
}
