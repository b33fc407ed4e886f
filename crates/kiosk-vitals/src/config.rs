use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use kiosk_core::models::category::Category;
use kiosk_core::models::score::RiskBand;

use crate::error::EngineError;

/// Tunable scoring policy.
///
/// The default weighs every category with data equally and uses the
/// 85/70/50 band thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Per-category weight. Categories not listed weigh 1.0.
    pub weights: BTreeMap<Category, f64>,
    pub thresholds: BandThresholds,
    /// Out-of-normal readings scoring below this are flagged `concern`
    /// rather than `watch`.
    pub concern_below: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: BTreeMap::new(),
            thresholds: BandThresholds::default(),
            concern_below: 70.0,
        }
    }
}

impl ScoringConfig {
    pub fn weight(&self, category: Category) -> f64 {
        self.weights.get(&category).copied().unwrap_or(1.0)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for (category, weight) in &self.weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "weight for {category} must be a non-negative number, got {weight}"
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.concern_below) {
            return Err(EngineError::InvalidConfig(format!(
                "concern_below must be within [0, 100], got {}",
                self.concern_below
            )));
        }
        self.thresholds.validate()
    }
}

/// Lower bounds (inclusive) of the overall score for each band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    pub low_at: f64,
    pub moderate_at: f64,
    pub high_at: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            low_at: 85.0,
            moderate_at: 70.0,
            high_at: 50.0,
        }
    }
}

impl BandThresholds {
    /// Band for an overall score, before any critical-reading override.
    pub fn band_for(&self, score: f64) -> RiskBand {
        if score >= self.low_at {
            RiskBand::Low
        } else if score >= self.moderate_at {
            RiskBand::Moderate
        } else if score >= self.high_at {
            RiskBand::High
        } else {
            RiskBand::Critical
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        let ordered = [100.0, self.low_at, self.moderate_at, self.high_at, 0.0];
        if ordered.iter().any(|v| !v.is_finite()) || ordered.windows(2).any(|w| w[0] < w[1]) {
            return Err(EngineError::InvalidConfig(format!(
                "thresholds must satisfy 100 >= low_at >= moderate_at >= high_at >= 0, got {self:?}"
            )));
        }
        Ok(())
    }
}
