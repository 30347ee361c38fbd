//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Key-value persistence (file, in-memory, platform defaults store)
//! - Clock (for testing)

use chrono::NaiveDate;

// =============================================================================
// Persistence Port
// =============================================================================

/// Durable key-value storage.
///
/// Signatures are infallible: adapters log failures and keep serving their
/// in-memory state. Losing a write is tolerated; crashing the app is not.
#[cfg_attr(test, mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);

    /// All stored keys starting with `prefix`
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Today's calendar date in the user's local time zone
    fn today(&self) -> NaiveDate;
}
