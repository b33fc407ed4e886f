use kiosk_core::models::category::Category;

use crate::registry::{NumericType, ParameterSpec, ValueRange};

/// Heart and blood pressure. Mean arterial and pulse pressure are derived
/// from the systolic/diastolic pair.
pub fn parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            id: "heart_rate".to_string(),
            name: "Heart Rate".to_string(),
            category: Category::Cardiovascular,
            unit: "bpm".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(20.0, 250.0),
            normal: ValueRange::new(60.0, 100.0),
            ideal: 70.0,
            critical: vec![ValueRange::new(20.0, 39.0), ValueRange::new(150.0, 250.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Number of heartbeats per minute".to_string()),
        },
        ParameterSpec {
            id: "blood_pressure_systolic".to_string(),
            name: "Systolic Blood Pressure".to_string(),
            category: Category::Cardiovascular,
            unit: "mmHg".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(50.0, 260.0),
            normal: ValueRange::new(90.0, 120.0),
            ideal: 115.0,
            critical: vec![ValueRange::new(50.0, 79.0), ValueRange::new(180.0, 260.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Pressure when the heart contracts".to_string()),
        },
        ParameterSpec {
            id: "blood_pressure_diastolic".to_string(),
            name: "Diastolic Blood Pressure".to_string(),
            category: Category::Cardiovascular,
            unit: "mmHg".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(30.0, 160.0),
            normal: ValueRange::new(60.0, 80.0),
            ideal: 75.0,
            critical: vec![ValueRange::new(30.0, 44.0), ValueRange::new(120.0, 160.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Pressure when the heart relaxes".to_string()),
        },
        ParameterSpec {
            id: "pulse_rate".to_string(),
            name: "Pulse Rate".to_string(),
            category: Category::Cardiovascular,
            unit: "bpm".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(20.0, 250.0),
            normal: ValueRange::new(60.0, 100.0),
            ideal: 70.0,
            critical: vec![ValueRange::new(20.0, 39.0), ValueRange::new(150.0, 250.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Arterial pulse rate".to_string()),
        },
        ParameterSpec {
            id: "mean_arterial_pressure".to_string(),
            name: "Mean Arterial Pressure".to_string(),
            category: Category::Cardiovascular,
            unit: "mmHg".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(30.0, 200.0),
            normal: ValueRange::new(70.0, 100.0),
            ideal: 90.0,
            critical: vec![ValueRange::new(30.0, 59.0), ValueRange::new(130.0, 200.0)],
            score_floor: 0.0,
            derived: true,
            description: Some("Average arterial pressure over one cardiac cycle".to_string()),
        },
        ParameterSpec {
            id: "blood_pressure_pulse_pressure".to_string(),
            name: "Pulse Pressure".to_string(),
            category: Category::Cardiovascular,
            unit: "mmHg".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(10.0, 200.0),
            normal: ValueRange::new(30.0, 50.0),
            ideal: 40.0,
            critical: vec![ValueRange::new(10.0, 14.0), ValueRange::new(100.0, 200.0)],
            score_floor: 0.0,
            derived: true,
            description: Some("Difference between systolic and diastolic pressure".to_string()),
        },
    ]
}
