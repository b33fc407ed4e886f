//! Built-in parameter definitions, one module per category.
//!
//! Ranges are adult reference values. Units are fixed; callers convert
//! before submitting.

pub mod anthropometric;
pub mod body_composition;
pub mod cardiovascular;
pub mod hematology;
pub mod lipid;
pub mod metabolic;
pub mod respiratory;
pub mod sensory;

use crate::registry::ParameterSpec;

/// Every built-in parameter, grouped by category in category order.
pub fn all_parameters() -> Vec<ParameterSpec> {
    [
        cardiovascular::parameters(),
        respiratory::parameters(),
        metabolic::parameters(),
        lipid::parameters(),
        hematology::parameters(),
        anthropometric::parameters(),
        body_composition::parameters(),
        sensory::parameters(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
