//! Risk band and flagged abnormalities.

use std::cmp::Reverse;

use kiosk_core::models::reading::{ReadingSource, VitalReading};
use kiosk_core::models::score::{Flag, RiskBand, Severity};
use kiosk_core::models::session::SessionRecord;

use crate::config::{BandThresholds, ScoringConfig};
use crate::registry::{NormalStatus, ParameterSpec, Registry};
use crate::scoring::{CategoryScores, parameter_score};

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub risk_band: RiskBand,
    pub critical_count: usize,
    pub flags: Vec<Flag>,
}

/// Classify a scored session snapshot.
///
/// One critical reading lifts the band to at least `high`; two or more make
/// it `critical`, whatever the overall score says. A derived reading only
/// counts when none of its inputs is critical.
pub fn classify(
    registry: &Registry,
    session: &SessionRecord,
    scores: &CategoryScores,
    overall_score: f64,
    config: &ScoringConfig,
) -> Classification {
    let mut flags = Vec::new();
    let mut critical_count = 0;

    for reading in session.readings() {
        let Some(value) = reading.valid_value() else {
            continue;
        };
        let Some(spec) = registry.get(&reading.parameter_id) else {
            continue;
        };
        if reading.critical && !has_critical_input(registry, session, reading) {
            critical_count += 1;
        }
        let sub_score = scores
            .parameter_scores
            .get(&spec.id)
            .copied()
            .unwrap_or_else(|| parameter_score(spec, value));
        if let Some(flag) = flag_for(spec, reading, value, sub_score, config) {
            flags.push(flag);
        }
    }

    flags.sort_by(|a, b| {
        (Reverse(a.severity), a.category.as_str(), &a.parameter_id).cmp(&(
            Reverse(b.severity),
            b.category.as_str(),
            &b.parameter_id,
        ))
    });

    Classification {
        risk_band: band_for(overall_score, critical_count, &config.thresholds),
        critical_count,
        flags,
    }
}

/// Threshold band, escalated by critical readings.
pub fn band_for(overall_score: f64, critical_count: usize, thresholds: &BandThresholds) -> RiskBand {
    let band = thresholds.band_for(overall_score);
    match critical_count {
        0 => band,
        1 => band.max(RiskBand::High),
        _ => RiskBand::Critical,
    }
}

/// A derived reading computed from an input that is itself critical repeats
/// that finding and does not count again.
fn has_critical_input(registry: &Registry, session: &SessionRecord, reading: &VitalReading) -> bool {
    if reading.source != ReadingSource::Derived {
        return false;
    }
    registry
        .derivation_for(&reading.parameter_id)
        .is_some_and(|derivation| {
            derivation.inputs.iter().any(|input| {
                session
                    .reading(input)
                    .is_some_and(|r| r.is_valid() && r.critical)
            })
        })
}

fn flag_for(
    spec: &ParameterSpec,
    reading: &VitalReading,
    value: f64,
    sub_score: f64,
    config: &ScoringConfig,
) -> Option<Flag> {
    let direction = match spec.normal_status(value) {
        NormalStatus::Normal => return None,
        NormalStatus::BelowNormal => "below",
        NormalStatus::AboveNormal => "above",
    };

    let severity = if reading.critical {
        Severity::Critical
    } else if sub_score < config.concern_below {
        Severity::Concern
    } else {
        Severity::Watch
    };

    let mut reason = format!(
        "{} of {value} {} is {direction} the normal range of {} to {} {}",
        spec.name, spec.unit, spec.normal.min, spec.normal.max, spec.unit
    );
    if reading.critical {
        reason.push_str(" and within a critical range");
    }

    Some(Flag {
        parameter_id: spec.id.clone(),
        category: spec.category,
        severity,
        value,
        reason,
    })
}
