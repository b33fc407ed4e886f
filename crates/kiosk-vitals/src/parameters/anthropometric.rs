use kiosk_core::models::category::Category;

use crate::registry::{NumericType, ParameterSpec, ValueRange};

/// Body measurements. BMI is derived from height and weight.
pub fn parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            id: "height".to_string(),
            name: "Height".to_string(),
            category: Category::Anthropometric,
            unit: "cm".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(50.0, 250.0),
            normal: ValueRange::new(140.0, 220.0),
            ideal: 175.0,
            critical: vec![],
            score_floor: 50.0,
            derived: false,
            description: Some("Body height".to_string()),
        },
        ParameterSpec {
            id: "weight".to_string(),
            name: "Weight".to_string(),
            category: Category::Anthropometric,
            unit: "kg".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(2.0, 350.0),
            normal: ValueRange::new(40.0, 120.0),
            ideal: 70.0,
            critical: vec![],
            score_floor: 25.0,
            derived: false,
            description: Some("Body weight".to_string()),
        },
        ParameterSpec {
            id: "bmi".to_string(),
            name: "Body Mass Index".to_string(),
            category: Category::Anthropometric,
            unit: "kg/m²".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(10.0, 80.0),
            normal: ValueRange::new(18.5, 24.9),
            ideal: 22.0,
            critical: vec![ValueRange::new(10.0, 15.0), ValueRange::new(50.0, 80.0)],
            score_floor: 0.0,
            derived: true,
            description: Some("Weight relative to height squared".to_string()),
        },
        ParameterSpec {
            id: "waist_circumference".to_string(),
            name: "Waist Circumference".to_string(),
            category: Category::Anthropometric,
            unit: "cm".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(40.0, 200.0),
            normal: ValueRange::new(70.0, 102.0),
            ideal: 85.0,
            critical: vec![],
            score_floor: 25.0,
            derived: false,
            description: Some("Waist measurement".to_string()),
        },
        ParameterSpec {
            id: "hip_circumference".to_string(),
            name: "Hip Circumference".to_string(),
            category: Category::Anthropometric,
            unit: "cm".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(50.0, 200.0),
            normal: ValueRange::new(85.0, 120.0),
            ideal: 100.0,
            critical: vec![],
            score_floor: 25.0,
            derived: false,
            description: Some("Hip measurement".to_string()),
        },
    ]
}
