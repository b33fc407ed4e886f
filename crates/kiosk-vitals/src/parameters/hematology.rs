use kiosk_core::models::category::Category;

use crate::registry::{NumericType, ParameterSpec, ValueRange};

pub fn parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            id: "hemoglobin".to_string(),
            name: "Hemoglobin".to_string(),
            category: Category::Hematology,
            unit: "g/dL".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(3.0, 25.0),
            normal: ValueRange::new(12.0, 16.0),
            ideal: 14.0,
            critical: vec![ValueRange::new(3.0, 7.0), ValueRange::new(20.0, 25.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Hemoglobin level in blood".to_string()),
        },
        ParameterSpec {
            id: "white_blood_cells".to_string(),
            name: "White Blood Cells".to_string(),
            category: Category::Hematology,
            unit: "cells/μL".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(500.0, 100_000.0),
            normal: ValueRange::new(4_000.0, 11_000.0),
            ideal: 7_000.0,
            critical: vec![
                ValueRange::new(500.0, 1_999.0),
                ValueRange::new(30_000.0, 100_000.0),
            ],
            score_floor: 0.0,
            derived: false,
            description: Some("White blood cell count".to_string()),
        },
        ParameterSpec {
            id: "red_blood_cells".to_string(),
            name: "Red Blood Cells".to_string(),
            category: Category::Hematology,
            unit: "cells/μL".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(1_000_000.0, 9_000_000.0),
            normal: ValueRange::new(4_200_000.0, 5_400_000.0),
            ideal: 4_800_000.0,
            critical: vec![ValueRange::new(1_000_000.0, 2_500_000.0)],
            score_floor: 0.0,
            derived: false,
            description: Some("Red blood cell count".to_string()),
        },
        ParameterSpec {
            id: "platelets".to_string(),
            name: "Platelets".to_string(),
            category: Category::Hematology,
            unit: "cells/μL".to_string(),
            numeric_type: NumericType::Integer,
            plausible: ValueRange::new(1_000.0, 2_000_000.0),
            normal: ValueRange::new(150_000.0, 450_000.0),
            ideal: 250_000.0,
            critical: vec![
                ValueRange::new(1_000.0, 49_999.0),
                ValueRange::new(1_000_000.0, 2_000_000.0),
            ],
            score_floor: 0.0,
            derived: false,
            description: Some("Platelet count".to_string()),
        },
    ]
}
