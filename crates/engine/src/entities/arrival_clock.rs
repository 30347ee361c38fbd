//! Arrival clock - the single source of truth for "what week is it".

use std::sync::Arc;

use chrono::NaiveDate;
use landfall_domain::common::{format_date, parse_date};
use landfall_domain::{ArrivalState, WeekNumber};

use crate::infrastructure::ports::{ClockPort, StorageProvider};
use crate::storage_keys;

pub struct ArrivalClock {
    storage: Arc<dyn StorageProvider>,
    clock: Arc<dyn ClockPort>,
    state: ArrivalState,
}

impl ArrivalClock {
    /// Load arrival state from storage. Unreadable values read as unset.
    pub fn load(storage: Arc<dyn StorageProvider>, clock: Arc<dyn ClockPort>) -> Self {
        let arrival_date = storage
            .load(storage_keys::ARRIVAL_DATE)
            .and_then(|raw| match parse_date(&raw) {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring unreadable arrival date");
                    None
                }
            });
        let week_override = storage
            .load(storage_keys::WEEK_OVERRIDE)
            .and_then(|raw| match raw.trim().parse::<i64>() {
                Ok(week) => Some(week),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring unreadable week override");
                    None
                }
            })
            .unwrap_or(0);

        Self {
            storage,
            clock,
            state: ArrivalState::from_stored(arrival_date, week_override),
        }
    }

    pub fn state(&self) -> &ArrivalState {
        &self.state
    }

    pub fn is_onboarded(&self) -> bool {
        self.state.is_onboarded()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn days_since_arrival(&self) -> i64 {
        self.state.days_since_arrival(self.clock.today())
    }

    pub fn current_week(&self) -> WeekNumber {
        self.state.current_week(self.clock.today())
    }

    /// Record the arrival date and mark onboarding done.
    pub fn complete_onboarding(&mut self, arrival_date: NaiveDate) {
        self.state.set_arrival_date(arrival_date);
        self.storage
            .save(storage_keys::ARRIVAL_DATE, &format_date(arrival_date));
        self.storage.save(storage_keys::HAS_ONBOARDED, "true");
        tracing::info!(arrival_date = %arrival_date, week = %self.current_week(), "Onboarding complete");
    }

    /// Debug menu only.
    pub fn simulate_week(&mut self, week: WeekNumber) {
        self.state.simulate_week(week);
        self.persist_override();
        tracing::debug!(week = %week, "Simulating week");
    }

    pub fn stop_simulating(&mut self) {
        self.state.stop_simulating();
        self.persist_override();
        tracing::debug!("Stopped simulating week");
    }

    /// Forget arrival and override, for re-onboarding.
    pub fn reset(&mut self) {
        self.state.reset();
        self.storage.remove(storage_keys::ARRIVAL_DATE);
        self.storage.remove(storage_keys::HAS_ONBOARDED);
        self.storage.remove(storage_keys::WEEK_OVERRIDE);
    }

    fn persist_override(&self) {
        self.storage.save(
            storage_keys::WEEK_OVERRIDE,
            &self.state.raw_week_override().to_string(),
        );
    }
}
