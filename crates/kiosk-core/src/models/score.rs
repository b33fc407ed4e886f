use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// Discrete classification of the overall result, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskBand {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
            RiskBand::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far outside its ideal zone a reading lies. Ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Watch,
    Concern,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Watch => "watch",
            Severity::Concern => "concern",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reading outside its parameter's normal range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Flag {
    pub parameter_id: String,
    pub category: Category,
    pub severity: Severity,
    pub value: f64,
    pub reason: String,
}

/// The outcome of one scoring pass over a session snapshot.
///
/// Built once and never modified; a changed session needs a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    /// Sub-score (0–100) of every valid reading that was scored.
    pub parameter_scores: BTreeMap<String, f64>,
    /// Mean sub-score per category. Only categories with data appear.
    pub category_scores: BTreeMap<Category, f64>,
    /// Categories that fed the overall score, in category order.
    pub contributing_categories: Vec<Category>,
    pub overall_score: f64,
    pub risk_band: RiskBand,
    /// Number of independent critical findings. A derived reading computed
    /// from a critical input is flagged but not counted again.
    pub critical_count: usize,
    /// Sorted by severity (most severe first), then category name, then parameter id.
    pub flags: Vec<Flag>,
}

impl ScoreResult {
    /// Number of parameters that contributed a sub-score.
    pub fn assessed_parameters(&self) -> usize {
        self.parameter_scores.len()
    }

    pub fn is_fully_assessed(&self) -> bool {
        self.contributing_categories.len() == Category::ALL.len()
    }
}
