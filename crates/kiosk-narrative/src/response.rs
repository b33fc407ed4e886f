//! Parsing a model reply into a [`Narrative`].
//!
//! Replies are free text that should contain one JSON object. Anything that
//! cannot be read as one degrades to a fallback narrative that keeps the raw
//! text, so the caller always has something to show.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::NarrativeError;

/// Plain-language explanation of a scored session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub response: String,
    pub health_assessment: String,
    pub recommendations: Vec<String>,
    pub next_steps: String,
    pub medical_disclaimer: String,
    pub language: String,
    /// Set when this narrative was substituted for an unusable reply or a
    /// failed service call.
    #[serde(default)]
    pub fallback: bool,
}

/// Reply shape as the model sends it. Unknown keys, including any risk
/// level the model invents, are dropped.
#[derive(Debug, Deserialize)]
struct RawNarrative {
    response: String,
    #[serde(default)]
    health_assessment: Option<String>,
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(default)]
    next_steps: Option<String>,
    #[serde(default)]
    medical_disclaimer: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

/// Standard disclaimer for a language code. Unknown codes get English.
pub fn disclaimer(language: &str) -> &'static str {
    match language {
        "hi" => "यह एक प्रारंभिक मूल्यांकन है। कृपया किसी योग्य स्वास्थ्य सेवा पेशेवर से सलाह लें।",
        "kn" => "ಇದು ಪ್ರಾಥಮಿಕ ಮೌಲ್ಯಮಾಪನವಾಗಿದೆ. ದಯವಿಟ್ಟು ಅರ್ಹ ಆರೋಗ್ಯ ಸೇವಾ ವೃತ್ತಿಪರರನ್ನು ಸಂಪರ್ಕಿಸಿ.",
        _ => "This is a preliminary assessment. Please consult a qualified healthcare professional.",
    }
}

/// Strict parse: the outermost `{ ... }` span must be a narrative object.
pub fn try_parse_narrative(text: &str, language: &str) -> Result<Narrative, NarrativeError> {
    let start = text
        .find('{')
        .ok_or_else(|| NarrativeError::ResponseParse("no JSON object in reply".to_string()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| NarrativeError::ResponseParse("unterminated JSON object".to_string()))?;

    let raw: RawNarrative = serde_json::from_str(&text[start..=end])?;
    if raw.response.trim().is_empty() {
        return Err(NarrativeError::SchemaViolation(
            "response field is empty".to_string(),
        ));
    }

    let language = raw.language.unwrap_or_else(|| language.to_string());
    Ok(Narrative {
        response: raw.response,
        health_assessment: raw.health_assessment.unwrap_or_default(),
        recommendations: raw.recommendations,
        next_steps: raw.next_steps.unwrap_or_default(),
        medical_disclaimer: raw
            .medical_disclaimer
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| disclaimer(&language).to_string()),
        language,
        fallback: false,
    })
}

/// Parse a reply, falling back to a narrative that wraps the raw text.
pub fn parse_narrative(text: &str, language: &str) -> Narrative {
    match try_parse_narrative(text, language) {
        Ok(narrative) => narrative,
        Err(e) => {
            warn!(error = %e, reply_len = text.len(), "unusable narrative reply, using fallback");
            fallback_narrative(text, language)
        }
    }
}

/// Narrative that shows `text` as-is with the standard advice.
pub fn fallback_narrative(text: &str, language: &str) -> Narrative {
    Narrative {
        response: text.trim().to_string(),
        health_assessment: "Basic assessment provided".to_string(),
        recommendations: vec!["Consult a healthcare professional".to_string()],
        next_steps: "Schedule a medical appointment".to_string(),
        medical_disclaimer: disclaimer(language).to_string(),
        language: language.to_string(),
        fallback: true,
    }
}

/// Narrative shown when no explanation could be produced at all.
pub fn error_narrative(language: &str) -> Narrative {
    Narrative {
        response: "Sorry, an explanation of your results is not available right now. \
                   Your scores above are unaffected."
            .to_string(),
        health_assessment: "Unable to assess".to_string(),
        recommendations: vec!["Try again or seek medical help".to_string()],
        next_steps: "Contact a healthcare provider".to_string(),
        medical_disclaimer: disclaimer(language).to_string(),
        language: language.to_string(),
        fallback: true,
    }
}
