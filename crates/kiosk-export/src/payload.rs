use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use kiosk_core::models::category::Category;
use kiosk_core::models::reading::{ReadingSource, ValidationStatus};
use kiosk_core::models::score::{RiskBand, ScoreResult, Severity};
use kiosk_core::models::session::SessionRecord;
use kiosk_vitals::Registry;

use crate::error::ExportError;

/// Flattened, serializable view of a scored session.
///
/// Field names are part of the export contract; downstream tools key on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub session_id: Uuid,
    pub readings: Vec<ExportReading>,
    pub category_scores: BTreeMap<Category, f64>,
    pub contributing_categories: Vec<Category>,
    pub overall_score: f64,
    pub risk_band: RiskBand,
    pub flags: Vec<ExportFlag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReading {
    pub parameter_id: String,
    pub name: String,
    /// Absent when the submitted text could not be parsed.
    pub value: Option<f64>,
    pub unit: String,
    pub status: ValidationStatus,
    pub source: ReadingSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFlag {
    pub parameter_id: String,
    pub severity: Severity,
    pub reason: String,
}

impl ExportPayload {
    /// Readings are listed in registry order. Readings for parameters the
    /// registry does not know are skipped.
    pub fn build(registry: &Registry, session: &SessionRecord, score: &ScoreResult) -> Self {
        let readings: Vec<ExportReading> = registry
            .parameters()
            .iter()
            .filter_map(|spec| {
                session.reading(&spec.id).map(|reading| ExportReading {
                    parameter_id: spec.id.clone(),
                    name: spec.name.clone(),
                    value: reading.value,
                    unit: spec.unit.clone(),
                    status: reading.status,
                    source: reading.source,
                })
            })
            .collect();

        let skipped = session.len() - readings.len();
        if skipped > 0 {
            debug!(session_id = %session.id(), skipped, "readings without a registry entry left out of export");
        }

        Self {
            session_id: session.id(),
            readings,
            category_scores: score.category_scores.clone(),
            contributing_categories: score.contributing_categories.clone(),
            overall_score: score.overall_score,
            risk_band: score.risk_band,
            flags: score
                .flags
                .iter()
                .map(|flag| ExportFlag {
                    parameter_id: flag.parameter_id.clone(),
                    severity: flag.severity,
                    reason: flag.reason.clone(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
