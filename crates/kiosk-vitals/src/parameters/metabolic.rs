use kiosk_core::models::category::Category;

use crate::registry::{NumericType, ParameterSpec, ValueRange};

pub fn parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            id: "body_temperature".to_string(),
            name: "Body Temperature".to_string(),
            category: Category::Metabolic,
            unit: "°C".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(30.0, 43.0),
            normal: ValueRange::new(36.1, 37.2),
            ideal: 37.0,
            critical: vec![ValueRange::new(30.0, 35.0), ValueRange::new(40.0, 43.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Core body temperature".to_string()),
        },
        ParameterSpec {
            id: "blood_glucose".to_string(),
            name: "Blood Glucose".to_string(),
            category: Category::Metabolic,
            unit: "mg/dL".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(20.0, 800.0),
            normal: ValueRange::new(70.0, 140.0),
            ideal: 90.0,
            critical: vec![ValueRange::new(20.0, 54.0), ValueRange::new(300.0, 800.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Blood sugar level".to_string()),
        },
    ]
}
