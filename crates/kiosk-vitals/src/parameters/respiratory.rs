use kiosk_core::models::category::Category;

use crate::registry::{NumericType, ParameterSpec, ValueRange};

pub fn parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            id: "respiratory_rate".to_string(),
            name: "Respiratory Rate".to_string(),
            category: Category::Respiratory,
            unit: "breaths/min".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(4.0, 60.0),
            normal: ValueRange::new(12.0, 20.0),
            ideal: 16.0,
            critical: vec![ValueRange::new(4.0, 8.0), ValueRange::new(30.0, 60.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Number of breaths per minute".to_string()),
        },
        // Saturation cannot exceed 100%, so the ideal sits on the upper bound.
        ParameterSpec {
            id: "oxygen_saturation".to_string(),
            name: "Oxygen Saturation".to_string(),
            category: Category::Respiratory,
            unit: "%".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(50.0, 100.0),
            normal: ValueRange::new(95.0, 100.0),
            ideal: 100.0,
            critical: vec![ValueRange::new(50.0, 89.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Oxygen saturation in blood".to_string()),
        },
    ]
}
