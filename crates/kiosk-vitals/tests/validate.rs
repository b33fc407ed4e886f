use kiosk_core::models::reading::{ReadingSource, ValidationStatus};
use kiosk_vitals::error::{Bound, EngineError, ValidationError};
use kiosk_vitals::registry::Registry;
use kiosk_vitals::validate::validate;
use proptest::prelude::*;

fn validation_error(result: Result<impl std::fmt::Debug, EngineError>) -> ValidationError {
    match result {
        Err(EngineError::Validation(err)) => err,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn valid_value_is_accepted() {
    let reading = validate(Registry::builtin(), "heart_rate", "72").unwrap();
    assert_eq!(reading.value, Some(72.0));
    assert_eq!(reading.status, ValidationStatus::Valid);
    assert_eq!(reading.source, ReadingSource::Entered);
    assert!(!reading.critical);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let reading = validate(Registry::builtin(), "body_temperature", " 36.6 ").unwrap();
    assert_eq!(reading.value, Some(36.6));
}

#[test]
fn bounds_are_inclusive_and_one_unit_outside_fails() {
    let registry = Registry::builtin();
    for spec in registry.parameters().iter().filter(|p| !p.derived) {
        let (min, max) = (spec.plausible.min, spec.plausible.max);

        validate(registry, &spec.id, &min.to_string())
            .unwrap_or_else(|e| panic!("{} rejected its min: {e}", spec.id));
        validate(registry, &spec.id, &max.to_string())
            .unwrap_or_else(|e| panic!("{} rejected its max: {e}", spec.id));

        let below = validation_error(validate(registry, &spec.id, &(min - 1.0).to_string()));
        assert!(matches!(
            below,
            ValidationError::OutOfPlausibleRange { bound: Bound::Min, .. }
        ));
        let above = validation_error(validate(registry, &spec.id, &(max + 1.0).to_string()));
        assert!(matches!(
            above,
            ValidationError::OutOfPlausibleRange { bound: Bound::Max, .. }
        ));
    }
}

#[test]
fn implausible_temperature_is_rejected_with_bound() {
    let err = validation_error(validate(Registry::builtin(), "body_temperature", "45.0"));
    assert_eq!(
        err,
        ValidationError::OutOfPlausibleRange {
            parameter_id: "body_temperature".to_string(),
            value: 45.0,
            unit: "°C".to_string(),
            bound: Bound::Max,
            limit: 43.0,
        }
    );
    assert!(err.to_string().contains("must be at most 43 °C"));
}

#[test]
fn unparseable_values_are_malformed() {
    for raw in ["abc", "", "  ", "NaN", "inf", "12,5"] {
        let err = validation_error(validate(Registry::builtin(), "body_temperature", raw));
        assert!(
            matches!(err, ValidationError::MalformedValue { .. }),
            "{raw:?} should be malformed"
        );
    }
}

#[test]
fn fractional_value_for_integer_parameter_is_malformed() {
    let err = validation_error(validate(Registry::builtin(), "heart_rate", "72.5"));
    assert_eq!(err.parameter_id(), "heart_rate");
    assert!(err.to_string().contains("not a valid integer"));
}

#[test]
fn unknown_parameter_is_a_lookup_failure() {
    let err = validate(Registry::builtin(), "blood_type", "5").unwrap_err();
    assert!(matches!(err, EngineError::UnknownParameter(id) if id == "blood_type"));
}

#[test]
fn derived_parameter_cannot_be_entered() {
    let err = validate(Registry::builtin(), "bmi", "22").unwrap_err();
    assert!(matches!(err, EngineError::DerivedParameter(id) if id == "bmi"));
}

#[test]
fn critical_value_is_tagged_but_still_valid() {
    let reading = validate(Registry::builtin(), "heart_rate", "35").unwrap();
    assert!(reading.is_valid());
    assert!(reading.critical);
}

#[test]
fn critical_bounds_are_inclusive() {
    let registry = Registry::builtin();
    assert!(validate(registry, "body_temperature", "40").unwrap().critical);
    assert!(!validate(registry, "body_temperature", "39.9").unwrap().critical);
}

#[test]
fn validation_error_serialises_with_kind_tag() {
    let err = validation_error(validate(Registry::builtin(), "heart_rate", "300"));
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "out_of_plausible_range");
    assert_eq!(json["bound"], "max");
    assert_eq!(json["limit"], 250.0);
}

proptest! {
    #[test]
    fn float_values_in_range_are_preserved_exactly(value in 30.0..=43.0f64) {
        let reading = validate(Registry::builtin(), "body_temperature", &value.to_string()).unwrap();
        prop_assert_eq!(reading.value, Some(value));
    }

    #[test]
    fn integer_values_in_range_are_preserved_exactly(value in 20i64..=250) {
        let reading = validate(Registry::builtin(), "heart_rate", &value.to_string()).unwrap();
        prop_assert_eq!(reading.value, Some(value as f64));
    }

    #[test]
    fn values_above_max_are_rejected(value in 43.000001..1000.0f64) {
        let result = validate(Registry::builtin(), "body_temperature", &value.to_string());
        let rejected = matches!(
            result,
            Err(EngineError::Validation(ValidationError::OutOfPlausibleRange { bound: Bound::Max, .. }))
        );
        prop_assert!(rejected);
    }
}
