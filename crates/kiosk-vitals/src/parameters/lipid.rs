use kiosk_core::models::category::Category;

use crate::registry::{NumericType, ParameterSpec, ValueRange};

/// Lipid panel. Only triglycerides carry an acute (pancreatitis) threshold.
pub fn parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            id: "cholesterol_total".to_string(),
            name: "Total Cholesterol".to_string(),
            category: Category::Lipid,
            unit: "mg/dL".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(50.0, 600.0),
            normal: ValueRange::new(125.0, 200.0),
            ideal: 170.0,
            critical: vec![],
            score_floor: 10.0,
            derived: false,
            description: Some("Total cholesterol level".to_string()),
        },
        ParameterSpec {
            id: "cholesterol_ldl".to_string(),
            name: "LDL Cholesterol".to_string(),
            category: Category::Lipid,
            unit: "mg/dL".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(10.0, 500.0),
            normal: ValueRange::new(10.0, 100.0),
            ideal: 70.0,
            critical: vec![],
            score_floor: 10.0,
            derived: false,
            description: Some("Low-density lipoprotein cholesterol".to_string()),
        },
        ParameterSpec {
            id: "cholesterol_hdl".to_string(),
            name: "HDL Cholesterol".to_string(),
            category: Category::Lipid,
            unit: "mg/dL".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(10.0, 150.0),
            normal: ValueRange::new(40.0, 100.0),
            ideal: 60.0,
            critical: vec![],
            score_floor: 10.0,
            derived: false,
            description: Some("High-density lipoprotein cholesterol".to_string()),
        },
        ParameterSpec {
            id: "triglycerides".to_string(),
            name: "Triglycerides".to_string(),
            category: Category::Lipid,
            unit: "mg/dL".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(20.0, 5000.0),
            normal: ValueRange::new(40.0, 150.0),
            ideal: 100.0,
            critical: vec![ValueRange::new(1000.0, 5000.0)],
            score_floor: 10.0,
            derived: false,
            description: Some("Blood triglyceride level".to_string()),
        },
    ]
}
