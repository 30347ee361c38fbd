//! Infrastructure: ports and their adapters.

pub mod clock;
pub mod config;
pub mod ports;
pub mod storage;
