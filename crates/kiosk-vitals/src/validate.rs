//! Plausibility checks for entered and derived values.
//!
//! The validator only answers "is this usable data". Whether a usable value
//! is dangerous is recorded on the reading (`critical`) and acted on by the
//! risk classifier.

use kiosk_core::models::reading::{ReadingSource, VitalReading};

use crate::error::{Bound, EngineError, ValidationError};
use crate::registry::{NumericType, ParameterSpec, Registry};

/// Validate a raw entered value for `parameter_id`.
pub fn validate(
    registry: &Registry,
    parameter_id: &str,
    raw: &str,
) -> Result<VitalReading, EngineError> {
    let spec = registry.lookup(parameter_id)?;
    if spec.derived {
        return Err(EngineError::DerivedParameter(parameter_id.to_string()));
    }
    let value = parse_value(spec, raw)?;
    Ok(check_value(spec, value, ReadingSource::Entered)?)
}

/// Parse raw text as the parameter's numeric type.
pub fn parse_value(spec: &ParameterSpec, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let malformed = || ValidationError::MalformedValue {
        parameter_id: spec.id.clone(),
        raw: raw.to_string(),
        expected: spec.numeric_type,
    };

    let value = match spec.numeric_type {
        NumericType::Integer => trimmed.parse::<i64>().map_err(|_| malformed())? as f64,
        NumericType::Float => trimmed.parse::<f64>().map_err(|_| malformed())?,
    };
    if !value.is_finite() {
        return Err(malformed());
    }
    Ok(value)
}

/// Check an already-numeric value against the plausible range.
///
/// The value is stored exactly as given.
pub fn check_value(
    spec: &ParameterSpec,
    value: f64,
    source: ReadingSource,
) -> Result<VitalReading, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::MalformedValue {
            parameter_id: spec.id.clone(),
            raw: value.to_string(),
            expected: spec.numeric_type,
        });
    }

    let violated = if value < spec.plausible.min {
        Some((Bound::Min, spec.plausible.min))
    } else if value > spec.plausible.max {
        Some((Bound::Max, spec.plausible.max))
    } else {
        None
    };
    if let Some((bound, limit)) = violated {
        return Err(ValidationError::OutOfPlausibleRange {
            parameter_id: spec.id.clone(),
            value,
            unit: spec.unit.clone(),
            bound,
            limit,
        });
    }

    Ok(VitalReading::valid(
        &spec.id,
        value,
        source,
        spec.is_critical(value),
    ))
}

/// The placeholder reading stored in a session for a rejected value.
pub fn rejected_reading(error: &ValidationError, source: ReadingSource) -> VitalReading {
    match error {
        ValidationError::MalformedValue { parameter_id, .. } => {
            VitalReading::malformed(parameter_id, source)
        }
        ValidationError::OutOfPlausibleRange {
            parameter_id,
            value,
            ..
        } => VitalReading::out_of_range(parameter_id, *value, source),
    }
}
