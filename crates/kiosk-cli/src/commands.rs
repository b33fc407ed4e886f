//! One function per subcommand. Each returns the text to print so the
//! commands can be exercised without a terminal.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{info, warn};

use kiosk_core::models::category::Category;
use kiosk_core::models::score::ScoreResult;
use kiosk_core::models::session::SessionRecord;
use kiosk_export::{ExportFormat, ExportPayload};
use kiosk_narrative::prompt::build_prompt;
use kiosk_narrative::service::narrate_or_fallback;
use kiosk_narrative::{Narrative, NarrativeInput, RuleBasedNarrative};
use kiosk_vitals::Engine;

use crate::input::read_session_file;

pub fn parameters(engine: &Engine<'_>, category: Option<Category>) -> String {
    let registry = engine.registry();
    let mut out = String::new();
    for cat in Category::ALL {
        if category.is_some_and(|c| c != cat) {
            continue;
        }
        let _ = writeln!(out, "{}", cat.label());
        for spec in registry.list_by_category(cat) {
            let _ = writeln!(
                out,
                "  {:<32} {:<10} plausible {} to {}, normal {} to {}{}",
                spec.id,
                spec.unit,
                spec.plausible.min,
                spec.plausible.max,
                spec.normal.min,
                spec.normal.max,
                if spec.derived { " (derived)" } else { "" },
            );
        }
    }
    out
}

pub fn validate(engine: &Engine<'_>, parameter_id: &str, raw: &str) -> eyre::Result<String> {
    let reading = engine.validate(parameter_id, raw)?;
    let spec = engine.registry().lookup(parameter_id)?;
    let value = reading.value.unwrap_or_default();
    let mut out = format!(
        "{} = {value} {} ({})",
        spec.id,
        spec.unit,
        spec.normal_status(value).as_str()
    );
    if reading.critical {
        out.push_str(", critical");
    }
    out.push('\n');
    Ok(out)
}

/// Load, score and export a session file, marking the session exported.
pub fn assess(
    engine: &Engine<'_>,
    path: &Path,
    format: ExportFormat,
    narrative_language: Option<&str>,
) -> eyre::Result<String> {
    let (mut session, score) = load_and_score(engine, path)?;

    let payload = ExportPayload::build(engine.registry(), &session, &score);
    let narrative = narrative_language.map(|language| {
        let input = NarrativeInput::build(engine.registry(), &session, &score, language);
        narrate_or_fallback(&RuleBasedNarrative, &input)
    });

    let rendered = match (format, &narrative) {
        (_, None) => format.render(&payload)?,
        (ExportFormat::Json, Some(narrative)) => {
            let mut value = serde_json::to_value(&payload)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("narrative".to_string(), serde_json::to_value(narrative)?);
            }
            serde_json::to_string_pretty(&value)?
        }
        (ExportFormat::Text, Some(narrative)) => {
            let mut text = format.render(&payload)?;
            text.push('\n');
            text.push_str(&narrative_text(narrative));
            text
        }
        (ExportFormat::Csv, Some(_)) => {
            return Err(eyre::eyre!("--narrative needs json or text output, not csv"));
        }
    };

    session.mark_exported()?;
    info!(session_id = %session.id(), format = %format, "session exported");
    Ok(rendered)
}

/// The prompt a text model would receive for this session.
pub fn prompt(engine: &Engine<'_>, path: &Path, language: &str) -> eyre::Result<String> {
    let (session, score) = load_and_score(engine, path)?;
    let input = NarrativeInput::build(engine.registry(), &session, &score, language);
    Ok(build_prompt(&input))
}

pub fn check(engine: &Engine<'_>) -> eyre::Result<String> {
    let registry = engine.registry();
    registry.check()?;
    engine.config().validate()?;
    Ok(format!(
        "registry ok: {} parameters ({} derived), {} derivations\n",
        registry.parameters().len(),
        registry.parameters().iter().filter(|p| p.derived).count(),
        registry.derivations().len(),
    ))
}

fn load_and_score(engine: &Engine<'_>, path: &Path) -> eyre::Result<(SessionRecord, ScoreResult)> {
    let (mut session, outcome) = read_session_file(path)?.into_session(engine)?;
    for err in &outcome.rejected {
        warn!(session_id = %session.id(), error = %err, "reading not accepted");
    }
    for missing in &outcome.derivation.unavailable {
        info!(
            parameter = missing.parameter_id.as_str(),
            missing = ?missing.missing_inputs,
            "derived value unavailable"
        );
    }

    session.mark_complete()?;
    let score = engine.evaluate(&session)?;
    session.mark_scored()?;
    Ok((session, score))
}

fn narrative_text(narrative: &Narrative) -> String {
    let mut out = String::from("Explanation\n");
    let _ = writeln!(out, "{}", narrative.response);
    let _ = writeln!(out, "{}", narrative.health_assessment);
    for rec in &narrative.recommendations {
        let _ = writeln!(out, "  - {rec}");
    }
    let _ = writeln!(out, "Next steps: {}", narrative.next_steps);
    let _ = writeln!(out, "{}", narrative.medical_disclaimer);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_file(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("session.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    const SAMPLE: &str = r#"{"session_id": "00000000-0000-0000-0000-00000000000a",
        "readings": [
            {"parameter_id": "heart_rate", "value": 35},
            {"parameter_id": "body_temperature", "value": "37.0"},
            {"parameter_id": "blood_type", "value": "O"}
        ]}"#;

    #[test]
    fn parameters_can_be_filtered_by_category() {
        let engine = Engine::builtin().unwrap();
        let all = parameters(&engine, None);
        assert!(all.contains("Lipid Profile"));
        assert!(all.contains("bmi"));

        let sensory = parameters(&engine, Some(Category::Sensory));
        assert!(sensory.contains("hearing_threshold"));
        assert!(!sensory.contains("heart_rate"));
    }

    #[test]
    fn validate_reports_status_or_error() {
        let engine = Engine::builtin().unwrap();
        assert_eq!(
            validate(&engine, "heart_rate", "35").unwrap(),
            "heart_rate = 35 bpm (below_normal), critical\n"
        );
        let err = validate(&engine, "body_temperature", "45").unwrap_err();
        assert!(err.to_string().contains("at most 43"));
    }

    #[test]
    fn assess_renders_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = session_file(&dir, SAMPLE);
        let engine = Engine::builtin().unwrap();

        let json = assess(&engine, &path, ExportFormat::Json, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["session_id"], "00000000-0000-0000-0000-00000000000a");
        assert_eq!(value["risk_band"], "high");

        let csv = assess(&engine, &path, ExportFormat::Csv, None).unwrap();
        assert!(csv.starts_with("parameter_id,value,unit,status,source\r\n"));

        let text = assess(&engine, &path, ExportFormat::Text, Some("en")).unwrap();
        assert!(text.contains("Risk level: HIGH"));
        assert!(text.contains("Seek medical attention promptly about your Heart Rate."));
    }

    #[test]
    fn json_narrative_is_added_alongside_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = session_file(&dir, SAMPLE);
        let engine = Engine::builtin().unwrap();

        let json = assess(&engine, &path, ExportFormat::Json, Some("hi")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["narrative"]["language"], "hi");
        assert!(assess(&engine, &path, ExportFormat::Csv, Some("en")).is_err());
    }

    #[test]
    fn session_without_valid_readings_fails_to_assess() {
        let dir = tempfile::tempdir().unwrap();
        let path = session_file(&dir, r#"{"readings": [{"parameter_id": "heart_rate", "value": "x"}]}"#);
        let engine = Engine::builtin().unwrap();
        assert!(assess(&engine, &path, ExportFormat::Json, None).is_err());
    }

    #[test]
    fn prompt_contains_context_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = session_file(&dir, SAMPLE);
        let engine = Engine::builtin().unwrap();
        let text = prompt(&engine, &path, "kn").unwrap();
        assert!(text.contains("RESPONSE LANGUAGE: Kannada (kn)"));
        assert!(text.contains("<health_check session=\"00000000-0000-0000-0000-00000000000a\">"));
    }

    #[test]
    fn check_summarises_registry() {
        let engine = Engine::builtin().unwrap();
        assert_eq!(
            check(&engine).unwrap(),
            "registry ok: 28 parameters (3 derived), 3 derivations\n"
        );
    }
}
