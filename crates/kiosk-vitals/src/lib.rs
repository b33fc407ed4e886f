//! kiosk-vitals
//!
//! The assessment engine. Pure and synchronous: no I/O, no clock.
//!
//! Data flows one way through the stages:
//! registry → validate → derive → scoring → risk.
//! [`Engine`] wires them together for callers that just want a
//! [`ScoreResult`](kiosk_core::models::score::ScoreResult).

pub mod config;
pub mod derive;
pub mod engine;
pub mod error;
pub mod parameters;
pub mod registry;
pub mod risk;
pub mod scoring;
pub mod validate;

pub use config::ScoringConfig;
pub use engine::Engine;
pub use registry::{ParameterSpec, Registry};
