//! Landfall engine library.
//!
//! The bundled four-week curriculum plus everything around it that is not
//! presentation: persistence, the week clock, mood check-ins and selection.
//!
//! ## Structure
//!
//! - `catalog/` - Authored missions and catalog validation
//! - `entities/` - Stores and queries wrapping domain operations
//! - `infrastructure/` - Ports and their adapters (storage, clock, config)
//! - `storage_keys` - Persistent key names
//! - `app` - Application composition

pub mod app;
pub mod catalog;
pub mod entities;
pub mod infrastructure;
pub mod storage_keys;

pub use app::{AppSession, SessionOptions, StepToggle};
pub use catalog::{Catalog, CatalogError};
