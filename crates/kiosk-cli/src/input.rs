use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use kiosk_core::models::session::SessionRecord;
use kiosk_vitals::Engine;
use kiosk_vitals::engine::BatchOutcome;

/// A session as saved by the collection front end.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    pub readings: Vec<RawReading>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReading {
    pub parameter_id: String,
    pub value: RawValue,
}

/// Values arrive either as typed text or as JSON numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(serde_json::Number),
    Text(String),
}

impl RawValue {
    /// The value as submitted text. Whole-valued floats such as `72.0` are
    /// written without the fraction so integer parameters accept them.
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => i.to_string(),
                (None, Some(u), _) => u.to_string(),
                (None, None, Some(f)) => f.to_string(),
                (None, None, None) => n.to_string(),
            },
            RawValue::Text(s) => s.clone(),
        }
    }
}

pub fn read_session_file(path: &Path) -> eyre::Result<SessionFile> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read session file {}: {e}", path.display()))?;
    let file: SessionFile = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid session file {}: {e}", path.display()))?;
    Ok(file)
}

impl SessionFile {
    /// Replay the file's readings into a fresh session, in file order.
    pub fn into_session(self, engine: &Engine<'_>) -> eyre::Result<(SessionRecord, BatchOutcome)> {
        let mut session = match self.session_id {
            Some(id) => SessionRecord::new(id, jiff::Timestamp::now()),
            None => SessionRecord::start(),
        };
        let entries = self
            .readings
            .into_iter()
            .map(|r| (r.parameter_id, r.value.as_text()));
        let outcome = engine.submit_batch(&mut session, entries)?;
        Ok((session, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_text_are_both_accepted() {
        let file: SessionFile = serde_json::from_str(
            r#"{"readings": [
                {"parameter_id": "heart_rate", "value": 72},
                {"parameter_id": "body_temperature", "value": "36.8"},
                {"parameter_id": "weight", "value": 70.5}
            ]}"#,
        )
        .unwrap();
        let values: Vec<_> = file.readings.iter().map(|r| r.value.as_text()).collect();
        assert_eq!(values, ["72", "36.8", "70.5"]);
        assert!(file.session_id.is_none());
    }

    #[test]
    fn whole_floats_are_accepted_for_integer_parameters() {
        let file: SessionFile = serde_json::from_str(
            r#"{"readings": [
                {"parameter_id": "heart_rate", "value": 72.0},
                {"parameter_id": "body_temperature", "value": 37.0},
                {"parameter_id": "respiratory_rate", "value": 16.5}
            ]}"#,
        )
        .unwrap();
        let values: Vec<_> = file.readings.iter().map(|r| r.value.as_text()).collect();
        assert_eq!(values, ["72", "37", "16.5"]);

        let engine = Engine::builtin().unwrap();
        let (session, outcome) = file.into_session(&engine).unwrap();
        assert_eq!(session.valid_value("heart_rate"), Some(72.0));
        assert_eq!(session.valid_value("body_temperature"), Some(37.0));
        assert_eq!(outcome.accepted.len(), 2);
        assert_eq!(outcome.rejected.len(), 1);
    }

    #[test]
    fn file_replays_into_session() {
        let file: SessionFile = serde_json::from_str(
            r#"{"session_id": "00000000-0000-0000-0000-000000000001",
                "readings": [
                    {"parameter_id": "heart_rate", "value": 72},
                    {"parameter_id": "heart_rate", "value": "seventy"},
                    {"parameter_id": "height", "value": 170},
                    {"parameter_id": "weight", "value": 70}
                ]}"#,
        )
        .unwrap();
        let engine = Engine::builtin().unwrap();
        let (session, outcome) = file.into_session(&engine).unwrap();

        assert_eq!(session.id(), Uuid::from_u128(1));
        assert_eq!(outcome.accepted.len(), 3);
        assert_eq!(outcome.rejected.len(), 1);
        assert!(session.valid_value("heart_rate").is_none());
        assert!(session.valid_value("bmi").is_some());
    }
}
