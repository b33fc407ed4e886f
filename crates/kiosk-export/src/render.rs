use tera::{Context, Tera};

use crate::error::ExportError;
use crate::payload::ExportPayload;

const SUMMARY_NAME: &str = "summary.txt";

/// Plain-text summary printed at the end of a check.
pub const SUMMARY_TEMPLATE: &str = r#"Health check summary
Session: {{ session_id }}
Overall score: {{ overall_score | round(precision=1) }} / 100
Risk level: {{ risk_band | upper }}

Category scores
{% for category, score in category_scores -%}
  {{ category }}: {{ score | round(precision=1) }}
{% endfor %}
Readings
{% for r in readings -%}
  {{ r.name }}: {% if r.status == "malformed" %}unreadable{% else %}{{ r.value }} {{ r.unit }}{% endif %}{% if r.status != "valid" %} [{{ r.status }}]{% endif %}{% if r.source == "derived" %} (calculated){% endif %}
{% endfor %}
{%- if flags %}
Findings
{% for f in flags -%}
  [{{ f.severity | upper }}] {{ f.reason }}
{% endfor %}
{%- else %}
No readings outside their normal ranges.
{% endif -%}
"#;

/// Render the built-in text summary.
pub fn render_summary(payload: &ExportPayload) -> Result<String, ExportError> {
    render_template(SUMMARY_NAME, SUMMARY_TEMPLATE, payload)
}

/// Render a caller-supplied Tera template with an export payload.
///
/// The payload fields become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    payload: &ExportPayload,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(payload)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
