use kiosk_core::models::category::Category;
use kiosk_vitals::error::RegistryError;
use kiosk_vitals::registry::{Derivation, NumericType, ParameterSpec, Registry, ValueRange};

fn spec(id: &str, derived: bool) -> ParameterSpec {
    ParameterSpec {
        id: id.to_string(),
        name: id.to_string(),
        category: Category::Metabolic,
        unit: "u".to_string(),
        numeric_type: NumericType::Float,
        plausible: ValueRange::new(0.0, 100.0),
        normal: ValueRange::new(40.0, 60.0),
        ideal: 50.0,
        critical: vec![],
        score_floor: 0.0,
        derived,
        description: None,
    }
}

fn sum(inputs: &[f64]) -> f64 {
    inputs.iter().sum()
}

fn derivation(output: &str, inputs: &[&str]) -> Derivation {
    Derivation {
        output: output.to_string(),
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        formula: sum,
    }
}

#[test]
fn builtin_registry_passes_integrity_check() {
    let registry = Registry::builtin();
    registry.check().unwrap();
    assert_eq!(registry.parameters().len(), 28);
    assert_eq!(registry.parameters().iter().filter(|p| p.derived).count(), 3);
    assert_eq!(registry.derivations().len(), 3);
}

#[test]
fn every_category_has_parameters() {
    let registry = Registry::builtin();
    for category in Category::ALL {
        assert!(
            !registry.list_by_category(category).is_empty(),
            "{category} has no parameters"
        );
    }
}

#[test]
fn list_by_category_keeps_declaration_order() {
    let ids: Vec<_> = Registry::builtin()
        .list_by_category(Category::Respiratory)
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["respiratory_rate", "oxygen_saturation"]);
}

#[test]
fn lookup_unknown_parameter_fails() {
    let err = Registry::builtin().lookup("blood_type").unwrap_err();
    assert_eq!(err.to_string(), "unknown parameter: blood_type");
}

#[test]
fn derivation_for_finds_inputs_of_derived_parameters() {
    let registry = Registry::builtin();
    let pulse = registry
        .derivation_for("blood_pressure_pulse_pressure")
        .unwrap();
    assert_eq!(
        pulse.inputs,
        ["blood_pressure_systolic", "blood_pressure_diastolic"]
    );
    assert!(registry.derivation_for("heart_rate").is_none());
}

#[test]
fn lookup_returns_fixed_unit() {
    let spec = Registry::builtin().lookup("body_temperature").unwrap();
    assert_eq!(spec.unit, "°C");
    assert_eq!(spec.ideal, 37.0);
}

#[test]
fn duplicate_ids_are_rejected() {
    let registry = Registry::new(vec![spec("a", false), spec("a", false)], vec![]);
    assert_eq!(
        registry.check(),
        Err(RegistryError::DuplicateParameter("a".to_string()))
    );
}

#[test]
fn ideal_outside_normal_range_is_rejected() {
    let mut bad = spec("a", false);
    bad.ideal = 70.0;
    let registry = Registry::new(vec![bad], vec![]);
    assert!(matches!(
        registry.check(),
        Err(RegistryError::InvalidRanges { .. })
    ));
}

#[test]
fn critical_range_overlapping_normal_is_rejected() {
    let mut bad = spec("a", false);
    bad.critical = vec![ValueRange::new(55.0, 100.0)];
    let registry = Registry::new(vec![bad], vec![]);
    assert!(matches!(
        registry.check(),
        Err(RegistryError::InvalidRanges { .. })
    ));
}

#[test]
fn circular_derivation_is_rejected() {
    let registry = Registry::new(
        vec![spec("a", true), spec("b", true)],
        vec![derivation("a", &["b"]), derivation("b", &["a"])],
    );
    assert_eq!(
        registry.check(),
        Err(RegistryError::InputNotYetAvailable {
            output: "a".to_string(),
            input: "b".to_string(),
        })
    );
}

#[test]
fn chained_derivation_in_order_is_accepted() {
    let registry = Registry::new(
        vec![spec("x", false), spec("a", true), spec("b", true)],
        vec![derivation("a", &["x"]), derivation("b", &["a", "x"])],
    );
    registry.check().unwrap();
}

#[test]
fn derived_parameter_without_formula_is_rejected() {
    let registry = Registry::new(vec![spec("a", true)], vec![]);
    assert_eq!(
        registry.check(),
        Err(RegistryError::MissingDerivation("a".to_string()))
    );
}

#[test]
fn derivation_of_entered_parameter_is_rejected() {
    let registry = Registry::new(
        vec![spec("x", false), spec("y", false)],
        vec![derivation("y", &["x"])],
    );
    assert_eq!(
        registry.check(),
        Err(RegistryError::UnexpectedDerivation("y".to_string()))
    );
}

#[test]
fn derivation_with_unknown_input_is_rejected() {
    let registry = Registry::new(vec![spec("a", true)], vec![derivation("a", &["ghost"])]);
    assert!(matches!(
        registry.check(),
        Err(RegistryError::UnknownInput { .. })
    ));
}
