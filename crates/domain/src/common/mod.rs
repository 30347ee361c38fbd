//! Common utility functions shared by the domain and engine crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod datetime;

pub use datetime::{format_date, parse_date, parse_date_or};
