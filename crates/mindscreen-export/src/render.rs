use serde::Serialize;
use tera::{Context, Tera};

use mindscreen_core::ScreeningReport;

use crate::error::ExportError;

const SUMMARY_TEMPLATE_NAME: &str = "summary.md";

const SUMMARY_TEMPLATE: &str = r#"# Mental Health Screening Report

- **Session:** {{ session_id }}
- **Generated:** {{ generated_at }}
- **Questions answered:** {{ questions_asked }}
{% if crisis_alert %}
## Crisis Alert

You reported: {{ risk_factors | join(sep=", ") }}.

If you are in immediate danger or thinking about harming yourself, contact
your local emergency number or a crisis line right now.
{% endif %}
## Results
{% if results | length == 0 %}
No conditions detected.
{% else %}
| Condition | Symptoms | Severity | Confidence | Level |
|-----------|----------|----------|------------|-------|
{% for r in results -%}
| {{ r.name }} | {{ r.yes_count }} | {{ r.severity }} | {{ r.confidence }}% | {{ r.level }} |
{% endfor %}
## Recommendations
{% for r in results %}
### {{ r.name }}

{% for rec in r.recommendations -%}
- {{ rec }}
{% endfor -%}
{% endfor -%}
{% endif %}
---

This screening is not a diagnosis. Please discuss these results with a
qualified mental health professional.
"#;

#[derive(Serialize)]
struct SummaryView {
    session_id: String,
    generated_at: String,
    questions_asked: usize,
    crisis_alert: bool,
    risk_factors: Vec<String>,
    results: Vec<EntryView>,
}

#[derive(Serialize)]
struct EntryView {
    name: String,
    yes_count: usize,
    severity: u32,
    confidence: String,
    level: String,
    recommendations: Vec<String>,
}

impl From<&ScreeningReport> for SummaryView {
    fn from(report: &ScreeningReport) -> Self {
        Self {
            session_id: report.session_id.to_string(),
            generated_at: report.generated_at.strftime("%Y-%m-%d %H:%M:%S UTC").to_string(),
            questions_asked: report.questions_asked,
            crisis_alert: report.crisis_alert,
            risk_factors: report.risk_factors.iter().map(|s| s.label()).collect(),
            results: report
                .results
                .iter()
                .map(|entry| EntryView {
                    name: format!("{} ({})", entry.condition.name(), entry.condition.id()),
                    yes_count: entry.yes_count,
                    severity: entry.severity,
                    confidence: format!("{:.1}", entry.confidence),
                    level: entry.level.to_string(),
                    recommendations: entry.recommendations.clone(),
                })
                .collect(),
        }
    }
}

/// Render a Markdown summary of `report`.
pub fn render_summary(report: &ScreeningReport) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = Context::from_serialize(SummaryView::from(report))
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(SUMMARY_TEMPLATE_NAME, &context)?;
    Ok(rendered)
}
