use tracing::{info, warn};

use kiosk_core::models::score::{RiskBand, Severity};

use crate::context::NarrativeInput;
use crate::error::NarrativeError;
use crate::prompt::build_prompt;
use crate::response::{Narrative, disclaimer, error_narrative, parse_narrative};

/// Anything that can explain a scored session.
///
/// Implementations only read the input; the score they explain is fixed.
pub trait NarrativeService {
    fn narrate(&self, input: &NarrativeInput) -> Result<Narrative, NarrativeError>;
}

/// A text-completion backend: prompt in, reply text out.
pub trait TextModel {
    fn complete(&self, prompt: &str) -> Result<String, NarrativeError>;
}

impl<M: TextModel + ?Sized> TextModel for &M {
    fn complete(&self, prompt: &str) -> Result<String, NarrativeError> {
        (**self).complete(prompt)
    }
}

/// Narrative from a [`TextModel`] using the standard prompt and reply parser.
#[derive(Debug, Clone)]
pub struct PromptedNarrative<M> {
    model: M,
}

impl<M: TextModel> PromptedNarrative<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M: TextModel> NarrativeService for PromptedNarrative<M> {
    fn narrate(&self, input: &NarrativeInput) -> Result<Narrative, NarrativeError> {
        let prompt = build_prompt(input);
        let reply = self.model.complete(&prompt)?;
        info!(
            session_id = %input.session_id,
            prompt_len = prompt.len(),
            reply_len = reply.len(),
            "narrative reply received"
        );
        Ok(parse_narrative(&reply, &input.language))
    }
}

/// Deterministic offline narrative built from the band and flags.
///
/// Text is English; the disclaimer follows the requested language.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedNarrative;

impl NarrativeService for RuleBasedNarrative {
    fn narrate(&self, input: &NarrativeInput) -> Result<Narrative, NarrativeError> {
        let score = input.score();

        let response = format!(
            "Your overall health score is {:.1} out of 100, which puts you in the {} risk band.",
            score.overall_score, score.risk_band
        );

        let mut health_assessment = format!(
            "Based on {} measurements across {} of 8 health categories, ",
            score.assessed_parameters(),
            score.contributing_categories.len()
        );
        match score.flags.len() {
            0 => health_assessment.push_str("all readings are within their normal ranges."),
            1 => health_assessment.push_str("one reading is outside its normal range."),
            n => health_assessment.push_str(&format!("{n} readings are outside their normal ranges.")),
        }
        if score.critical_count > 0 {
            health_assessment.push_str(&format!(
                " {} reading(s) fall in a critical range.",
                score.critical_count
            ));
        }

        let mut recommendations: Vec<String> = score
            .flags
            .iter()
            .map(|flag| {
                let name = input.display_name(&flag.parameter_id);
                match flag.severity {
                    Severity::Critical => format!("Seek medical attention promptly about your {name}."),
                    Severity::Concern => format!("Discuss your {name} with a healthcare professional."),
                    Severity::Watch => format!("Keep an eye on your {name} and re-check it at your next visit."),
                }
            })
            .collect();
        if recommendations.is_empty() {
            recommendations
                .push("Keep up your current routine and repeat the check periodically.".to_string());
        }

        let next_steps = match score.risk_band {
            RiskBand::Critical => "Contact a healthcare provider or emergency services now.",
            RiskBand::High => "Book an appointment with a doctor within the next few days.",
            RiskBand::Moderate => "Mention these results at your next routine appointment.",
            RiskBand::Low => "No follow-up needed beyond routine check-ups.",
        };

        Ok(Narrative {
            response,
            health_assessment,
            recommendations,
            next_steps: next_steps.to_string(),
            medical_disclaimer: disclaimer(&input.language).to_string(),
            language: input.language.clone(),
            fallback: false,
        })
    }
}

/// Run `service`, substituting the error narrative if it fails.
///
/// A failed narrative never affects the score it was meant to explain.
pub fn narrate_or_fallback(service: &dyn NarrativeService, input: &NarrativeInput) -> Narrative {
    match service.narrate(input) {
        Ok(narrative) => narrative,
        Err(e) => {
            warn!(session_id = %input.session_id, error = %e, "narrative generation failed");
            error_narrative(&input.language)
        }
    }
}
