use mindscreen_core::{Condition, ReportEntry, ScreeningReport, SeverityLevel, Symptom};
use mindscreen_export::render_summary;

fn report(results: Vec<ReportEntry>, risk_factors: Vec<Symptom>) -> ScreeningReport {
    ScreeningReport {
        session_id: uuid::Uuid::new_v4(),
        generated_at: jiff::Timestamp::from_second(1_700_000_000).unwrap(),
        questions_asked: 52,
        crisis_alert: !risk_factors.is_empty(),
        risk_factors,
        results,
    }
}

#[test]
fn empty_report_says_nothing_detected() {
    let rendered = render_summary(&report(Vec::new(), Vec::new())).unwrap();
    assert!(rendered.starts_with("# Mental Health Screening Report"));
    assert!(rendered.contains("No conditions detected."));
    assert!(!rendered.contains("Crisis Alert"));
    assert!(rendered.contains("2023-11-14 22:13:20 UTC"));
}

#[test]
fn diagnosed_conditions_are_tabulated_with_advice() {
    let entry = ReportEntry {
        condition: Condition::PanicDisorder,
        yes_count: 4,
        severity: 13,
        confidence: 66.666_666,
        level: SeverityLevel::Moderate,
        diagnosed: true,
        recommendations: vec!["Learn grounding techniques".to_string()],
    };
    let rendered = render_summary(&report(vec![entry], Vec::new())).unwrap();

    assert!(rendered.contains("| Panic Disorder (panic_disorder) | 4 | 13 | 66.7% | MODERATE |"));
    assert!(rendered.contains("### Panic Disorder (panic_disorder)"));
    assert!(rendered.contains("- Learn grounding techniques"));
    assert!(!rendered.contains("No conditions detected."));
}

#[test]
fn crisis_section_lists_labels() {
    let rendered = render_summary(&report(
        Vec::new(),
        vec![Symptom::SuicidalThoughts, Symptom::RestrictiveEating],
    ))
    .unwrap();
    assert!(rendered.contains("## Crisis Alert"));
    assert!(rendered.contains("You reported: Suicidal Thoughts, Restrictive Eating."));
}
