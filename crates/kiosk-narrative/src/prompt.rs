use crate::context::{NarrativeInput, build_context_block};

const SYSTEM_PROMPT: &str = "\
You are a health assistant at a self-service health check kiosk. \
Explain the measured results below in plain, friendly language. \
The overall score, risk level and findings were computed by the kiosk and are final; \
do not recalculate or contradict them. \
Never give a diagnosis or prescribe medication. \
Recommend professional care for every critical finding.";

/// JSON object the model must reply with.
pub const RESPONSE_SCHEMA: &str = r#"{
  "response": "Conversational explanation of the results",
  "health_assessment": "Preliminary assessment based on the measured values",
  "recommendations": ["Actionable recommendation", "..."],
  "next_steps": "What the person should do next",
  "medical_disclaimer": "Reminder to consult a healthcare professional",
  "language": "Response language code"
}"#;

/// Human-readable name for a response language code. Unknown codes fall
/// back to English.
pub fn language_name(code: &str) -> &'static str {
    match code {
        "hi" => "Hindi",
        "kn" => "Kannada",
        _ => "English",
    }
}

/// Full prompt: instructions, the measured context and the reply schema.
pub fn build_prompt(input: &NarrativeInput) -> String {
    format!(
        "{SYSTEM_PROMPT}\n\nRESPONSE LANGUAGE: {} ({})\n\n{}\n\n\
         Reply with a single JSON object of this form and nothing else:\n{RESPONSE_SCHEMA}\n",
        language_name(&input.language),
        input.language,
        build_context_block(input),
    )
}
