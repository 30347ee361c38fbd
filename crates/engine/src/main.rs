//! Landfall - development entry point.
//!
//! Builds a session against the configured storage file and logs where the
//! user stands: current week, this week's missions and their locks.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use landfall_engine::entities::LockState;
use landfall_engine::infrastructure::{
    clock::SystemClock,
    config::EngineConfig,
    ports::{ClockPort, StorageProvider},
    storage::FileStorage,
};
use landfall_engine::{AppSession, Catalog, SessionOptions};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landfall_engine=debug,landfall=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Landfall");

    let config = EngineConfig::from_env();
    tracing::info!(path = %config.storage_path.display(), "Opening storage");

    let storage: Arc<dyn StorageProvider> = Arc::new(FileStorage::open(&config.storage_path));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let catalog = Catalog::authored()?;

    let mut session = AppSession::new(catalog, storage, clock, SessionOptions::from(&config));
    // Only set in debug builds, see EngineConfig.
    if let Some(week) = config.simulate_week {
        session.arrival_mut().simulate_week(week);
    }

    let arrival = session.arrival();
    tracing::info!(
        onboarded = arrival.is_onboarded(),
        days_since_arrival = arrival.days_since_arrival(),
        week = %session.current_week(),
        "Arrival"
    );
    if session.check_in().needs_check_in() {
        tracing::info!("Mood check-in due today");
    }

    for mission in session.this_week() {
        match session.lock_state(mission.id()) {
            Some(LockState::Locked { prerequisite_title }) => tracing::info!(
                mission_id = %mission.id(),
                pillar = %mission.pillar(),
                requires = %prerequisite_title,
                "🔒 {}",
                mission.title()
            ),
            _ => tracing::info!(
                mission_id = %mission.id(),
                pillar = %mission.pillar(),
                complete = mission.is_complete(),
                "{}",
                mission.title()
            ),
        }
    }

    let summary = session.summary();
    tracing::info!(
        stars = summary.stars_lit(),
        total = summary.overall.total,
        earned_xp = summary.earned_xp,
        available_xp = summary.available_xp,
        "Progress"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
