use kiosk_core::models::category::Category;

use crate::registry::{NumericType, ParameterSpec, ValueRange};

pub fn parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            id: "vision_acuity".to_string(),
            name: "Vision Acuity".to_string(),
            category: Category::Sensory,
            unit: "ratio".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(0.0, 2.0),
            normal: ValueRange::new(0.8, 2.0),
            ideal: 1.0,
            critical: vec![],
            score_floor: 25.0,
            derived: false,
            description: Some("Decimal visual acuity (1.0 = 20/20)".to_string()),
        },
        ParameterSpec {
            id: "hearing_threshold".to_string(),
            name: "Hearing Threshold".to_string(),
            category: Category::Sensory,
            unit: "dB HL".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(-10.0, 120.0),
            normal: ValueRange::new(-10.0, 25.0),
            ideal: 0.0,
            critical: vec![],
            score_floor: 25.0,
            derived: false,
            description: Some("Quietest tone heard, in decibels hearing level".to_string()),
        },
    ]
}
