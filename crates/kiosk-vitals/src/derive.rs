//! Secondary vitals computed from entered ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use kiosk_core::models::reading::{ReadingSource, VitalReading};
use kiosk_core::models::session::SessionRecord;

use crate::error::ValidationError;
use crate::registry::{Derivation, Registry};
use crate::validate::{check_value, rejected_reading};

/// The built-in derivation graph, in evaluation order.
pub fn builtin_derivations() -> Vec<Derivation> {
    vec![
        Derivation {
            output: "bmi".to_string(),
            inputs: vec!["height".to_string(), "weight".to_string()],
            formula: body_mass_index,
        },
        Derivation {
            output: "mean_arterial_pressure".to_string(),
            inputs: vec![
                "blood_pressure_systolic".to_string(),
                "blood_pressure_diastolic".to_string(),
            ],
            formula: mean_arterial_pressure,
        },
        Derivation {
            output: "blood_pressure_pulse_pressure".to_string(),
            inputs: vec![
                "blood_pressure_systolic".to_string(),
                "blood_pressure_diastolic".to_string(),
            ],
            formula: pulse_pressure,
        },
    ]
}

/// `weight_kg / height_m²`, with height entered in centimetres.
fn body_mass_index(inputs: &[f64]) -> f64 {
    match inputs {
        [height_cm, weight_kg] => {
            let height_m = height_cm / 100.0;
            weight_kg / (height_m * height_m)
        }
        _ => f64::NAN,
    }
}

fn mean_arterial_pressure(inputs: &[f64]) -> f64 {
    match inputs {
        [systolic, diastolic] => diastolic + (systolic - diastolic) / 3.0,
        _ => f64::NAN,
    }
}

fn pulse_pressure(inputs: &[f64]) -> f64 {
    match inputs {
        [systolic, diastolic] => systolic - diastolic,
        _ => f64::NAN,
    }
}

/// A derived parameter that could not be computed because inputs are
/// missing or invalid. Downstream stages treat it as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Unavailable {
    pub parameter_id: String,
    pub missing_inputs: Vec<String>,
}

/// Everything one derivation pass produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivationReport {
    /// Derived readings, valid or not, in derivation order.
    pub readings: Vec<VitalReading>,
    /// Derived values that failed their own plausible range. These usually
    /// point at a data-entry error in the inputs.
    pub rejected: Vec<ValidationError>,
    pub unavailable: Vec<Unavailable>,
}

/// Recompute every derived parameter from the session's valid entered
/// readings.
///
/// Derived readings already in the session are ignored. A derivation runs
/// only when all of its inputs are present and valid; there are no default
/// values. Pure: the same session always yields the same report.
pub fn derive(registry: &Registry, session: &SessionRecord) -> DerivationReport {
    let mut available: BTreeMap<&str, f64> = session
        .readings()
        .filter(|r| r.source == ReadingSource::Entered)
        .filter_map(|r| r.valid_value().map(|v| (r.parameter_id.as_str(), v)))
        .collect();

    let mut report = DerivationReport::default();

    for derivation in registry.derivations() {
        let Some(spec) = registry.get(&derivation.output) else {
            continue;
        };

        let inputs: Option<Vec<f64>> = derivation
            .inputs
            .iter()
            .map(|id| available.get(id.as_str()).copied())
            .collect();

        let Some(inputs) = inputs else {
            let missing_inputs: Vec<String> = derivation
                .inputs
                .iter()
                .filter(|id| !available.contains_key(id.as_str()))
                .cloned()
                .collect();
            debug!(parameter = %spec.id, missing = ?missing_inputs, "derived value unavailable");
            report.unavailable.push(Unavailable {
                parameter_id: spec.id.clone(),
                missing_inputs,
            });
            continue;
        };

        let value = (derivation.formula)(&inputs);
        match check_value(spec, value, ReadingSource::Derived) {
            Ok(reading) => {
                debug!(parameter = %spec.id, value, "derived");
                available.insert(spec.id.as_str(), value);
                report.readings.push(reading);
            }
            Err(err) => {
                warn!(parameter = %spec.id, error = %err, "derived value rejected");
                report
                    .readings
                    .push(rejected_reading(&err, ReadingSource::Derived));
                report.rejected.push(err);
            }
        }
    }

    report
}
