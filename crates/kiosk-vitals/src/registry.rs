use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use kiosk_core::models::category::Category;

use crate::error::{EngineError, RegistryError};
use crate::scoring::NORMAL_EDGE_SCORE;

/// How raw input for a parameter is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NumericType {
    Integer,
    Float,
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericType::Integer => f.write_str("integer"),
            NumericType::Float => f.write_str("number"),
        }
    }
}

/// An inclusive `[min, max]` interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn overlaps(&self, other: &ValueRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Where a value sits relative to the normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NormalStatus {
    BelowNormal,
    Normal,
    AboveNormal,
}

impl NormalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NormalStatus::BelowNormal => "below_normal",
            NormalStatus::Normal => "normal",
            NormalStatus::AboveNormal => "above_normal",
        }
    }
}

/// Static definition of one supported measurement.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParameterSpec {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub unit: String,
    pub numeric_type: NumericType,
    /// Values outside this range are rejected as implausible.
    pub plausible: ValueRange,
    /// The ideal zone. Valid readings outside it are flagged.
    pub normal: ValueRange,
    /// Scores 100. Lies within `normal`.
    pub ideal: f64,
    /// Sub-ranges that escalate risk regardless of the overall score.
    pub critical: Vec<ValueRange>,
    /// Sub-score at either plausible bound.
    pub score_floor: f64,
    /// Computed from other parameters, never entered.
    pub derived: bool,
    pub description: Option<String>,
}

impl ParameterSpec {
    pub fn is_critical(&self, value: f64) -> bool {
        self.critical.iter().any(|r| r.contains(value))
    }

    pub fn normal_status(&self, value: f64) -> NormalStatus {
        if value < self.normal.min {
            NormalStatus::BelowNormal
        } else if value > self.normal.max {
            NormalStatus::AboveNormal
        } else {
            NormalStatus::Normal
        }
    }

    fn check_ranges(&self) -> Result<(), RegistryError> {
        let fail = |reason: String| RegistryError::InvalidRanges {
            parameter_id: self.id.clone(),
            reason,
        };

        let ordered = [
            self.plausible.min,
            self.normal.min,
            self.ideal,
            self.normal.max,
            self.plausible.max,
        ];
        if ordered.iter().any(|v| !v.is_finite()) {
            return Err(fail("bounds must be finite".to_string()));
        }
        if ordered.windows(2).any(|w| w[0] > w[1]) {
            return Err(fail(format!(
                "expected min <= normal.min <= ideal <= normal.max <= max, got {ordered:?}"
            )));
        }
        if self.plausible.min == self.plausible.max {
            return Err(fail("plausible range is empty".to_string()));
        }
        if !(0.0..NORMAL_EDGE_SCORE).contains(&self.score_floor) {
            return Err(fail(format!(
                "score floor {} must be in [0, {NORMAL_EDGE_SCORE})",
                self.score_floor
            )));
        }
        for range in &self.critical {
            if range.min > range.max
                || !self.plausible.contains(range.min)
                || !self.plausible.contains(range.max)
            {
                return Err(fail(format!(
                    "critical range [{}, {}] is not inside the plausible range",
                    range.min, range.max
                )));
            }
            if range.overlaps(&self.normal) {
                return Err(fail(format!(
                    "critical range [{}, {}] overlaps the normal range",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

/// A pure function from input values (in `inputs` order) to the output value.
pub type Formula = fn(&[f64]) -> f64;

/// One edge set of the derivation graph: `output` is computed from `inputs`.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub output: String,
    pub inputs: Vec<String>,
    pub formula: Formula,
}

/// Read-only catalogue of parameters and the derivations between them.
///
/// Derivations are kept in evaluation order: each one may only use entered
/// parameters or outputs of derivations listed before it, which rules out
/// cycles. [`Registry::check`] enforces this.
#[derive(Debug, Clone)]
pub struct Registry {
    parameters: Vec<ParameterSpec>,
    index: HashMap<String, usize>,
    derivations: Vec<Derivation>,
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(
        crate::parameters::all_parameters(),
        crate::derive::builtin_derivations(),
    )
});

impl Registry {
    /// Build a registry. Call [`Registry::check`] before using it.
    pub fn new(parameters: Vec<ParameterSpec>, derivations: Vec<Derivation>) -> Self {
        let mut index = HashMap::with_capacity(parameters.len());
        for (i, spec) in parameters.iter().enumerate() {
            index.entry(spec.id.clone()).or_insert(i);
        }
        Self {
            parameters,
            index,
            derivations,
        }
    }

    /// The 28 built-in parameters, initialised once per process.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn get(&self, parameter_id: &str) -> Option<&ParameterSpec> {
        self.index.get(parameter_id).map(|&i| &self.parameters[i])
    }

    pub fn lookup(&self, parameter_id: &str) -> Result<&ParameterSpec, EngineError> {
        self.get(parameter_id)
            .ok_or_else(|| EngineError::UnknownParameter(parameter_id.to_string()))
    }

    /// Parameters of one category, in declaration order.
    pub fn list_by_category(&self, category: Category) -> Vec<&ParameterSpec> {
        self.parameters
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn derivations(&self) -> &[Derivation] {
        &self.derivations
    }

    /// The derivation that computes `parameter_id`, if it is derived.
    pub fn derivation_for(&self, parameter_id: &str) -> Option<&Derivation> {
        self.derivations.iter().find(|d| d.output == parameter_id)
    }

    /// Verify every structural invariant of the registry.
    pub fn check(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        for spec in &self.parameters {
            if !seen.insert(spec.id.as_str()) {
                return Err(RegistryError::DuplicateParameter(spec.id.clone()));
            }
            spec.check_ranges()?;
        }

        let mut available: HashSet<&str> = self
            .parameters
            .iter()
            .filter(|p| !p.derived)
            .map(|p| p.id.as_str())
            .collect();
        let mut derived_outputs = HashSet::new();

        for derivation in &self.derivations {
            let output = derivation.output.as_str();
            match self.get(output) {
                Some(spec) if spec.derived => {}
                _ => return Err(RegistryError::UnexpectedDerivation(output.to_string())),
            }
            if !derived_outputs.insert(output) {
                return Err(RegistryError::DuplicateDerivation(output.to_string()));
            }
            for input in &derivation.inputs {
                if self.get(input).is_none() {
                    return Err(RegistryError::UnknownInput {
                        output: output.to_string(),
                        input: input.clone(),
                    });
                }
                if !available.contains(input.as_str()) {
                    return Err(RegistryError::InputNotYetAvailable {
                        output: output.to_string(),
                        input: input.clone(),
                    });
                }
            }
            available.insert(output);
        }

        if let Some(orphan) = self
            .parameters
            .iter()
            .find(|p| p.derived && !derived_outputs.contains(p.id.as_str()))
        {
            return Err(RegistryError::MissingDerivation(orphan.id.clone()));
        }

        Ok(())
    }
}
