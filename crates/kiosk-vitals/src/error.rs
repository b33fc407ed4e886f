use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use kiosk_core::error::SessionError;

use crate::registry::NumericType;

/// Which end of the plausible range a value fell past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    fn requirement(self) -> &'static str {
        match self {
            Bound::Min => "at least",
            Bound::Max => "at most",
        }
    }
}

/// A value the caller should correct and re-submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("{parameter_id}: '{raw}' is not a valid {expected} value")]
    MalformedValue {
        parameter_id: String,
        raw: String,
        expected: NumericType,
    },

    #[error(
        "{parameter_id}: {value} {unit} is outside the plausible range (must be {} {limit} {unit})",
        .bound.requirement()
    )]
    OutOfPlausibleRange {
        parameter_id: String,
        value: f64,
        unit: String,
        bound: Bound,
        limit: f64,
    },
}

impl ValidationError {
    pub fn parameter_id(&self) -> &str {
        match self {
            ValidationError::MalformedValue { parameter_id, .. }
            | ValidationError::OutOfPlausibleRange { parameter_id, .. } => parameter_id,
        }
    }
}

/// Start-up integrity failures in a parameter registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("parameter '{0}' is declared more than once")]
    DuplicateParameter(String),

    #[error("parameter '{parameter_id}' has inconsistent ranges: {reason}")]
    InvalidRanges { parameter_id: String, reason: String },

    #[error("derived parameter '{0}' has no derivation")]
    MissingDerivation(String),

    #[error("derivation targets '{0}', which is not a derived parameter")]
    UnexpectedDerivation(String),

    #[error("parameter '{0}' has more than one derivation")]
    DuplicateDerivation(String),

    #[error("derivation of '{output}' needs unknown parameter '{input}'")]
    UnknownInput { output: String, input: String },

    #[error("derivation of '{output}' needs '{input}' before it is derived")]
    InputNotYetAvailable { output: String, input: String },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("parameter '{0}' is derived and cannot be entered directly")]
    DerivedParameter(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("registry integrity check failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("session has no valid readings to score")]
    NothingToScore,
}
