use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::SessionError;
use crate::models::reading::{ReadingSource, VitalReading};

/// Lifecycle of a patient interaction.
///
/// `collecting → complete → scored → exported`, with `cleared` reachable
/// from every other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionState {
    Collecting,
    Complete,
    Scored,
    Exported,
    Cleared,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionState::Collecting => "collecting",
            SessionState::Complete => "complete",
            SessionState::Scored => "scored",
            SessionState::Exported => "exported",
            SessionState::Cleared => "cleared",
        }
    }

    pub fn accepts_readings(self) -> bool {
        !matches!(self, SessionState::Exported | SessionState::Cleared)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The readings gathered during one patient interaction.
///
/// Holds at most one reading per parameter; the session owns them and only
/// hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionRecord {
    id: Uuid,
    state: SessionState,
    readings: BTreeMap<String, VitalReading>,
    created_at: jiff::Timestamp,
}

impl SessionRecord {
    pub fn new(id: Uuid, created_at: jiff::Timestamp) -> Self {
        Self {
            id,
            state: SessionState::Collecting,
            readings: BTreeMap::new(),
            created_at,
        }
    }

    /// Start a fresh session with a random id, stamped now.
    pub fn start() -> Self {
        Self::new(Uuid::new_v4(), jiff::Timestamp::now())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    /// All current readings, ordered by parameter id.
    pub fn readings(&self) -> impl Iterator<Item = &VitalReading> {
        self.readings.values()
    }

    pub fn reading(&self, parameter_id: &str) -> Option<&VitalReading> {
        self.readings.get(parameter_id)
    }

    pub fn valid_value(&self, parameter_id: &str) -> Option<f64> {
        self.reading(parameter_id).and_then(VitalReading::valid_value)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Store a reading, superseding any earlier one for the same parameter.
    ///
    /// New data makes an existing score stale, so a complete or scored
    /// session drops back to collecting.
    pub fn record(&mut self, reading: VitalReading) -> Result<(), SessionError> {
        if !self.state.accepts_readings() {
            return Err(SessionError::Closed(self.state));
        }
        self.readings.insert(reading.parameter_id.clone(), reading);
        self.state = SessionState::Collecting;
        Ok(())
    }

    /// Drop every derived reading and store `derived` in their place.
    ///
    /// Derived values are a pure function of the entered ones, so this is
    /// not new data: the lifecycle state is left alone.
    pub fn replace_derived(&mut self, derived: Vec<VitalReading>) {
        self.readings.retain(|_, r| r.source != ReadingSource::Derived);
        for reading in derived {
            self.readings.insert(reading.parameter_id.clone(), reading);
        }
    }

    pub fn mark_complete(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Complete, &[SessionState::Collecting])
    }

    pub fn mark_scored(&mut self) -> Result<(), SessionError> {
        self.transition(
            SessionState::Scored,
            &[SessionState::Complete, SessionState::Scored],
        )
    }

    pub fn mark_exported(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Exported, &[SessionState::Scored])
    }

    /// Discard every reading. Nothing is archived.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::Cleared {
            return Err(SessionError::InvalidTransition {
                from: self.state,
                to: SessionState::Cleared,
            });
        }
        self.readings.clear();
        self.state = SessionState::Cleared;
        Ok(())
    }

    fn transition(&mut self, to: SessionState, allowed_from: &[SessionState]) -> Result<(), SessionError> {
        if !allowed_from.contains(&self.state) {
            return Err(SessionError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }
}
