//! kiosk-narrative
//!
//! Prompt assembly, response parsing and the boundary to whatever produces
//! the plain-language explanation of a score.

pub mod context;
pub mod error;
pub mod prompt;
pub mod response;
pub mod service;

pub use context::NarrativeInput;
pub use response::Narrative;
pub use service::{NarrativeService, PromptedNarrative, RuleBasedNarrative, TextModel};
