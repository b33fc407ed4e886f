use kiosk_core::models::category::Category;

use crate::registry::{NumericType, ParameterSpec, ValueRange};

pub fn parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            id: "body_fat_percentage".to_string(),
            name: "Body Fat Percentage".to_string(),
            category: Category::BodyComposition,
            unit: "%".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(2.0, 70.0),
            normal: ValueRange::new(10.0, 25.0),
            ideal: 18.0,
            critical: vec![],
            score_floor: 25.0,
            derived: false,
            description: Some("Percentage of body fat".to_string()),
        },
        ParameterSpec {
            id: "muscle_mass".to_string(),
            name: "Muscle Mass".to_string(),
            category: Category::BodyComposition,
            unit: "kg".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(10.0, 100.0),
            normal: ValueRange::new(25.0, 50.0),
            ideal: 35.0,
            critical: vec![],
            score_floor: 25.0,
            derived: false,
            description: Some("Total muscle mass".to_string()),
        },
        ParameterSpec {
            id: "bone_density".to_string(),
            name: "Bone Density".to_string(),
            category: Category::BodyComposition,
            unit: "g/cm²".to_string(),
            numeric_type: NumericType::Float,
            plausible: ValueRange::new(0.3, 2.0),
            normal: ValueRange::new(0.8, 1.2),
            ideal: 1.0,
            critical: vec![],
            score_floor: 25.0,
            derived: false,
            description: Some("Bone mineral density".to_string()),
        },
    ]
}
