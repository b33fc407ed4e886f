use kiosk_core::error::SessionError;
use kiosk_core::models::category::Category;
use kiosk_core::models::reading::{ReadingSource, ValidationStatus};
use kiosk_core::models::session::{SessionRecord, SessionState};
use kiosk_vitals::config::ScoringConfig;
use kiosk_vitals::error::EngineError;
use kiosk_vitals::{Engine, Registry};
use proptest::prelude::*;
use uuid::Uuid;

fn new_session() -> SessionRecord {
    SessionRecord::new(Uuid::nil(), jiff::Timestamp::UNIX_EPOCH)
}

#[test]
fn submit_refreshes_derived_readings() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();
    engine.submit(&mut session, "height", "170").unwrap();
    assert!(session.reading("bmi").is_none());

    engine.submit(&mut session, "weight", "70").unwrap();
    let bmi = session.reading("bmi").unwrap();
    assert_eq!(bmi.source, ReadingSource::Derived);
    assert!((bmi.value.unwrap() - 24.2).abs() < 0.05);
}

#[test]
fn correcting_an_input_drops_the_stale_derived_value() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();
    engine
        .submit_batch(&mut session, [("height", "170"), ("weight", "70")])
        .unwrap();
    assert!(session.reading("bmi").is_some());

    let _ = engine.submit(&mut session, "weight", "seventy");
    assert!(session.reading("bmi").is_none());
    assert_eq!(
        session.reading("weight").unwrap().status,
        ValidationStatus::Malformed
    );
}

#[test]
fn rejected_value_is_recorded_and_reported() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();
    let err = engine
        .submit(&mut session, "body_temperature", "45.0")
        .unwrap_err();

    assert!(matches!(err, EngineError::Validation(_)));
    let reading = session.reading("body_temperature").unwrap();
    assert_eq!(reading.status, ValidationStatus::OutOfRange);
    assert_eq!(reading.value, Some(45.0));
}

#[test]
fn unknown_and_derived_ids_leave_session_untouched() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();

    assert!(matches!(
        engine.submit(&mut session, "blood_type", "1"),
        Err(EngineError::UnknownParameter(_))
    ));
    assert!(matches!(
        engine.submit(&mut session, "bmi", "22"),
        Err(EngineError::DerivedParameter(_))
    ));
    assert!(session.is_empty());
}

#[test]
fn one_bad_value_does_not_block_the_batch() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();
    let outcome = engine
        .submit_batch(
            &mut session,
            [
                ("heart_rate", "72"),
                ("body_temperature", "hot"),
                ("oxygen_saturation", "98"),
                ("blood_type", "4"),
            ],
        )
        .unwrap();

    assert_eq!(outcome.accepted.len(), 2);
    assert_eq!(outcome.rejected.len(), 2);

    let result = engine.evaluate(&session).unwrap();
    assert_eq!(
        result.contributing_categories,
        vec![Category::Cardiovascular, Category::Respiratory]
    );
}

#[test]
fn closed_session_refuses_submissions() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();
    session.clear().unwrap();

    let err = engine.submit(&mut session, "heart_rate", "72").unwrap_err();
    assert!(matches!(
        err,
        EngineError::Session(SessionError::Closed(SessionState::Cleared))
    ));
    assert!(engine.submit_batch(&mut session, [("heart_rate", "72")]).is_err());
}

#[test]
fn partial_session_records_contributing_categories() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();
    engine
        .submit_batch(&mut session, [("heart_rate", "70"), ("body_temperature", "38.0")])
        .unwrap();

    let result = engine.evaluate(&session).unwrap();
    assert_eq!(
        result.contributing_categories,
        vec![Category::Cardiovascular, Category::Metabolic]
    );
    assert_eq!(result.category_scores.len(), 2);
    let mean = result.category_scores.values().sum::<f64>() / 2.0;
    assert!((result.overall_score - mean).abs() < 1e-9);
    assert!(!result.is_fully_assessed());
}

#[test]
fn perfect_partial_and_perfect_full_are_distinguishable() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();
    engine.submit(&mut session, "heart_rate", "70").unwrap();

    let result = engine.evaluate(&session).unwrap();
    assert_eq!(result.overall_score, 100.0);
    assert_eq!(result.contributing_categories, vec![Category::Cardiovascular]);
    assert_eq!(result.assessed_parameters(), 1);
}

#[test]
fn empty_session_has_nothing_to_score() {
    let engine = Engine::builtin().unwrap();
    assert!(matches!(
        engine.evaluate(&new_session()),
        Err(EngineError::NothingToScore)
    ));
}

#[test]
fn evaluate_does_not_depend_on_stored_derived_values() {
    let engine = Engine::builtin().unwrap();
    let mut session = new_session();
    engine
        .submit_batch(&mut session, [("height", "170"), ("weight", "70")])
        .unwrap();
    let refreshed = engine.evaluate(&session).unwrap();

    session.replace_derived(vec![]);
    assert_eq!(engine.evaluate(&session).unwrap(), refreshed);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = ScoringConfig::default();
    config.thresholds.moderate_at = 90.0;
    assert!(matches!(
        Engine::new(Registry::builtin(), config),
        Err(EngineError::InvalidConfig(_))
    ));

    let mut config = ScoringConfig::default();
    config.weights.insert(Category::Lipid, -1.0);
    assert!(Engine::new(Registry::builtin(), config).is_err());
}

#[test]
fn sessions_evaluate_independently_across_threads() {
    let engine = Engine::builtin().unwrap();
    let inputs = [("heart_rate", "72"), ("heart_rate", "140"), ("heart_rate", "35")];

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(id, raw)| {
                let engine = &engine;
                scope.spawn(move || {
                    let mut session = new_session();
                    engine.submit(&mut session, id, raw).unwrap();
                    engine.evaluate(&session).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for ((id, raw), result) in inputs.iter().zip(&results) {
        let mut session = new_session();
        engine.submit(&mut session, id, raw).unwrap();
        assert_eq!(&engine.evaluate(&session).unwrap(), result);
    }
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        heart_rate in 20i64..=250,
        systolic in 50i64..=260,
        diastolic in 30i64..=160,
        temperature in 30.0..=43.0f64,
        height in 50.0..=250.0f64,
        weight in 2.0..=350.0f64,
    ) {
        let engine = Engine::builtin().unwrap();
        let mut session = new_session();
        engine.submit_batch(&mut session, [
            ("heart_rate", heart_rate.to_string()),
            ("blood_pressure_systolic", systolic.to_string()),
            ("blood_pressure_diastolic", diastolic.to_string()),
            ("body_temperature", temperature.to_string()),
            ("height", height.to_string()),
            ("weight", weight.to_string()),
        ]).unwrap();

        let first = engine.evaluate(&session).unwrap();
        let second = engine.evaluate(&session.clone()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!((0.0..=100.0).contains(&first.overall_score));
    }

    #[test]
    fn critical_reading_never_classifies_low(heart_rate in prop_oneof![20i64..=39, 150i64..=250]) {
        let engine = Engine::builtin().unwrap();
        let mut session = new_session();
        engine.submit_batch(&mut session, [
            ("heart_rate", heart_rate.to_string()),
            ("body_temperature", "37".to_string()),
            ("oxygen_saturation", "100".to_string()),
            ("hemoglobin", "14".to_string()),
        ]).unwrap();

        let result = engine.evaluate(&session).unwrap();
        prop_assert!(result.risk_band >= kiosk_core::models::score::RiskBand::High);
    }
}
