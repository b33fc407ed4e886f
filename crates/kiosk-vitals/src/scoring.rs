//! Per-parameter sub-scores and their aggregation.
//!
//! # Sub-score curve
//!
//! Piecewise-linear on each side of the ideal point:
//!
//! ```text
//! plausible.min ── normal.min ── ideal ── normal.max ── plausible.max
//!     floor            85          100        85            floor
//! ```
//!
//! The curve is monotone non-increasing with distance from the ideal, so a
//! value inside the normal range never scores below [`NORMAL_EDGE_SCORE`].
//!
//! # Aggregation
//!
//! A category scores the arithmetic mean of its present, valid parameters.
//! Categories without data are left out entirely. The overall score is the
//! weighted mean of the present categories (equal weights by default).

use std::collections::BTreeMap;

use tracing::warn;

use kiosk_core::models::category::Category;
use kiosk_core::models::session::SessionRecord;

use crate::config::ScoringConfig;
use crate::error::EngineError;
use crate::registry::{ParameterSpec, Registry};

pub const IDEAL_SCORE: f64 = 100.0;

/// Sub-score at either edge of the normal range.
pub const NORMAL_EDGE_SCORE: f64 = 85.0;

/// Sub-score (floor..=100) for a value of `spec`.
///
/// Values outside the plausible range are clamped to it first.
pub fn parameter_score(spec: &ParameterSpec, value: f64) -> f64 {
    let value = value.clamp(spec.plausible.min, spec.plausible.max);

    if value == spec.ideal {
        IDEAL_SCORE
    } else if value < spec.ideal {
        if value >= spec.normal.min {
            interpolate(value, spec.normal.min, NORMAL_EDGE_SCORE, spec.ideal, IDEAL_SCORE)
        } else {
            interpolate(
                value,
                spec.plausible.min,
                spec.score_floor,
                spec.normal.min,
                NORMAL_EDGE_SCORE,
            )
        }
    } else if value <= spec.normal.max {
        interpolate(value, spec.ideal, IDEAL_SCORE, spec.normal.max, NORMAL_EDGE_SCORE)
    } else {
        interpolate(
            value,
            spec.normal.max,
            NORMAL_EDGE_SCORE,
            spec.plausible.max,
            spec.score_floor,
        )
    }
}

/// Linear interpolation between `(x0, y0)` and `(x1, y1)`.
fn interpolate(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    if x1 == x0 {
        return y0.min(y1);
    }
    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

/// Sub-scores of one session snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryScores {
    pub parameter_scores: BTreeMap<String, f64>,
    pub category_scores: BTreeMap<Category, f64>,
}

/// Score every valid reading and average per category.
pub fn score(registry: &Registry, session: &SessionRecord) -> CategoryScores {
    let mut parameter_scores = BTreeMap::new();
    let mut sums: BTreeMap<Category, (f64, usize)> = BTreeMap::new();

    for reading in session.readings() {
        let Some(value) = reading.valid_value() else {
            continue;
        };
        let Some(spec) = registry.get(&reading.parameter_id) else {
            warn!(parameter = %reading.parameter_id, "reading for unregistered parameter ignored");
            continue;
        };
        let sub_score = parameter_score(spec, value);
        parameter_scores.insert(spec.id.clone(), sub_score);

        let entry = sums.entry(spec.category).or_insert((0.0, 0));
        entry.0 += sub_score;
        entry.1 += 1;
    }

    let category_scores = sums
        .into_iter()
        .map(|(category, (sum, count))| (category, sum / count as f64))
        .collect();

    CategoryScores {
        parameter_scores,
        category_scores,
    }
}

/// The combined score and the categories that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Overall {
    pub overall_score: f64,
    pub contributing: Vec<Category>,
}

/// Weighted mean of the present category scores.
///
/// Categories with zero weight are present but do not contribute.
pub fn overall(
    category_scores: &BTreeMap<Category, f64>,
    config: &ScoringConfig,
) -> Result<Overall, EngineError> {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    let mut contributing = Vec::new();

    for (&category, &sub_score) in category_scores {
        let weight = config.weight(category);
        if weight <= 0.0 {
            continue;
        }
        weighted += weight * sub_score;
        total_weight += weight;
        contributing.push(category);
    }

    if contributing.is_empty() {
        return Err(EngineError::NothingToScore);
    }

    Ok(Overall {
        overall_score: (weighted / total_weight).clamp(0.0, IDEAL_SCORE),
        contributing,
    })
}
