//! kiosk-core
//!
//! Pure domain types for the health kiosk: readings, sessions and score
//! results. No engine logic lives here; this is the shared vocabulary that
//! the engine, export and narrative crates pass between each other.

pub mod error;
pub mod models;
