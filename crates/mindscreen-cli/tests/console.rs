use std::io::Cursor;

use mindscreen_cli::console::ConsoleRenderer;
use mindscreen_cli::prompt::ConsolePrompter;
use mindscreen_core::Symptom;
use mindscreen_engine::{Assessment, KnowledgeBase};

/// One answer line per question, in the order the assessment asks them.
fn script(knowledge: &KnowledgeBase, yes: &[Symptom]) -> String {
    knowledge
        .distinct_symptoms()
        .into_iter()
        .map(|s| if yes.contains(&s) { "y\n" } else { "n\n" })
        .collect()
}

fn run(yes: &[Symptom]) -> String {
    let knowledge = KnowledgeBase::standard().unwrap();
    let input = Cursor::new(script(&knowledge, yes));
    let mut prompter = ConsolePrompter::new(input, Vec::new());
    let mut renderer = ConsoleRenderer::new(Vec::new(), false);

    Assessment::new(&knowledge)
        .run(&mut prompter, &mut renderer)
        .unwrap();

    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn no_answers_renders_nothing_detected() {
    let output = run(&[]);
    assert!(output.contains("ASSESSMENT SUMMARY"));
    assert!(output.contains("No conditions detected."));
    assert!(!output.contains("CRISIS ALERT"));
}

#[test]
fn diagnosis_shows_level_and_recommendations() {
    let output = run(&[
        Symptom::ExcessiveWorry,
        Symptom::SleepProblems,
        Symptom::MuscleTension,
    ]);
    assert!(output.contains(">> Indicators found for Generalized Anxiety Disorder [MILD]"));
    assert!(output.contains("symptoms: 3  severity: 11  confidence: 60.0%"));
    assert!(output.contains("* Consult a licensed mental health professional"));
    assert!(!output.contains("No conditions detected."));
}

#[test]
fn crisis_alert_lists_reported_symptoms() {
    let output = run(&[Symptom::SuicidalThoughts]);
    assert!(output.contains("!!! CRISIS ALERT !!!"));
    assert!(output.contains("- Suicidal Thoughts"));
    assert!(output.contains("No conditions detected."));
}

#[test]
fn plain_output_has_no_escape_codes() {
    let output = run(&[Symptom::SuicidalThoughts]);
    assert!(!output.contains('\u{1b}'));
}

#[test]
fn listing_marks_high_risk_symptoms() {
    let knowledge = KnowledgeBase::standard().unwrap();
    let mut renderer = ConsoleRenderer::new(Vec::new(), false);
    renderer.list_conditions(&knowledge).unwrap();
    let output = String::from_utf8(renderer.into_inner()).unwrap();

    assert!(output.contains("Anxiety Disorders"));
    assert!(output.contains("Generalized Anxiety Disorder (gad)"));
    assert!(output.contains("suicidal_thoughts"));
    assert!(output.contains("weight 5 [high risk]"));
}
