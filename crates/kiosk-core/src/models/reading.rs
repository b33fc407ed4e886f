use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where a reading's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReadingSource {
    Entered,
    Derived,
}

impl ReadingSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadingSource::Entered => "entered",
            ReadingSource::Derived => "derived",
        }
    }
}

/// Outcome of validating a submitted or derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationStatus {
    Valid,
    OutOfRange,
    Malformed,
}

impl ValidationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Valid => "valid",
            ValidationStatus::OutOfRange => "out_of_range",
            ValidationStatus::Malformed => "malformed",
        }
    }
}

/// One submitted or derived value for a session.
///
/// Readings are never edited in place. A later submission for the same
/// parameter replaces the whole reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalReading {
    pub parameter_id: String,
    /// `None` only when the raw input could not be parsed.
    pub value: Option<f64>,
    pub source: ReadingSource,
    pub status: ValidationStatus,
    /// The value lies inside one of the parameter's critical sub-ranges.
    pub critical: bool,
}

impl VitalReading {
    pub fn valid(parameter_id: &str, value: f64, source: ReadingSource, critical: bool) -> Self {
        Self {
            parameter_id: parameter_id.to_string(),
            value: Some(value),
            source,
            status: ValidationStatus::Valid,
            critical,
        }
    }

    pub fn out_of_range(parameter_id: &str, value: f64, source: ReadingSource) -> Self {
        Self {
            parameter_id: parameter_id.to_string(),
            value: Some(value),
            source,
            status: ValidationStatus::OutOfRange,
            critical: false,
        }
    }

    pub fn malformed(parameter_id: &str, source: ReadingSource) -> Self {
        Self {
            parameter_id: parameter_id.to_string(),
            value: None,
            source,
            status: ValidationStatus::Malformed,
            critical: false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }

    /// The value, if this reading may be used for derivation and scoring.
    pub fn valid_value(&self) -> Option<f64> {
        if self.is_valid() { self.value } else { None }
    }
}
