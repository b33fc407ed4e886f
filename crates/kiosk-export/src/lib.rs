//! kiosk-export
//!
//! Turns a scored session into JSON, CSV or a rendered text summary.

pub mod csv;
pub mod error;
pub mod format;
pub mod payload;
pub mod render;

pub use format::ExportFormat;
pub use payload::ExportPayload;
