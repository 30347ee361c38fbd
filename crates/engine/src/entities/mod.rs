//! Entity modules: each wraps domain operations over the catalog or a port.

mod arrival_clock;
mod mood_check_in;
mod profile_store;
mod progress_store;
mod progress_summary;
mod selector;

pub use arrival_clock::ArrivalClock;
pub use mood_check_in::MoodCheckInStore;
pub use profile_store::ProfileStore;
pub use progress_store::ProgressStore;
pub use progress_summary::{ProgressSummary, Tally};
pub use selector::{LockState, MissionSelector, SearchHit};
