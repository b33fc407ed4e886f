//! Read-only view of a scored session for narrative generation.
//!
//! Only valid readings are included. The score is copied in and never
//! handed out mutably, so nothing downstream can alter the deterministic
//! result it explains.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_core::models::category::Category;
use kiosk_core::models::reading::ReadingSource;
use kiosk_core::models::score::ScoreResult;
use kiosk_core::models::session::SessionRecord;
use kiosk_vitals::Registry;
use kiosk_vitals::registry::NormalStatus;

/// A valid reading with the registry details a reader needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeReading {
    pub parameter_id: String,
    pub name: String,
    pub category: Category,
    pub value: f64,
    pub unit: String,
    pub normal_min: f64,
    pub normal_max: f64,
    pub normal_status: NormalStatus,
    pub source: ReadingSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeInput {
    pub session_id: Uuid,
    /// Language code for the response, e.g. `en`, `hi`, `kn`.
    pub language: String,
    pub readings: Vec<NarrativeReading>,
    score: ScoreResult,
}

impl NarrativeInput {
    pub fn build(
        registry: &Registry,
        session: &SessionRecord,
        score: &ScoreResult,
        language: &str,
    ) -> Self {
        let readings = registry
            .parameters()
            .iter()
            .filter_map(|spec| {
                let reading = session.reading(&spec.id)?;
                let value = reading.valid_value()?;
                Some(NarrativeReading {
                    parameter_id: spec.id.clone(),
                    name: spec.name.clone(),
                    category: spec.category,
                    value,
                    unit: spec.unit.clone(),
                    normal_min: spec.normal.min,
                    normal_max: spec.normal.max,
                    normal_status: spec.normal_status(value),
                    source: reading.source,
                })
            })
            .collect();

        Self {
            session_id: session.id(),
            language: language.to_string(),
            readings,
            score: score.clone(),
        }
    }

    pub fn score(&self) -> &ScoreResult {
        &self.score
    }

    pub fn reading(&self, parameter_id: &str) -> Option<&NarrativeReading> {
        self.readings.iter().find(|r| r.parameter_id == parameter_id)
    }

    /// Display name for a parameter id, falling back to the id itself.
    pub fn display_name<'a>(&'a self, parameter_id: &'a str) -> &'a str {
        self.reading(parameter_id)
            .map(|r| r.name.as_str())
            .unwrap_or(parameter_id)
    }
}

/// Build a structured context block from a narrative input.
///
/// Returns an XML-style block that can be embedded in a prompt.
pub fn build_context_block(input: &NarrativeInput) -> String {
    let score = input.score();
    let mut block = format!("<health_check session=\"{}\">\n", input.session_id);

    block.push_str(&format!(
        "<score overall=\"{:.1}\" band=\"{}\" critical_count=\"{}\" categories=\"{}/{}\"/>\n",
        score.overall_score,
        score.risk_band,
        score.critical_count,
        score.contributing_categories.len(),
        Category::ALL.len(),
    ));

    for (category, value) in &score.category_scores {
        block.push_str(&format!(
            "<category name=\"{}\" score=\"{:.1}\"/>\n",
            category.as_str(),
            value
        ));
    }

    for r in &input.readings {
        block.push_str(&format!(
            "<reading id=\"{}\" name=\"{}\" value=\"{}\" unit=\"{}\" normal=\"{} to {}\" status=\"{}\" source=\"{}\"/>\n",
            r.parameter_id,
            escape(&r.name),
            r.value,
            escape(&r.unit),
            r.normal_min,
            r.normal_max,
            r.normal_status.as_str(),
            r.source.as_str(),
        ));
    }

    for flag in &score.flags {
        block.push_str(&format!(
            "<flag parameter=\"{}\" severity=\"{}\">{}</flag>\n",
            flag.parameter_id,
            flag.severity,
            escape(&flag.reason),
        ));
    }

    block.push_str("</health_check>");
    block
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
