use mindscreen_core::{SeverityLevel, Symptom};
use mindscreen_engine::scoring::{
    calculate_confidence, calculate_severity, count_yes, severity_level,
};
use mindscreen_engine::{KnowledgeBase, Session, meets_constraints};
use proptest::prelude::*;

fn any_symptom() -> impl Strategy<Value = Symptom> {
    prop::sample::select(Symptom::ALL.to_vec())
}

proptest! {
    #[test]
    fn yes_count_bounded_by_list_length(
        symptoms in prop::collection::vec(any_symptom(), 0..20),
        answers in prop::collection::vec((any_symptom(), any::<bool>()), 0..40),
    ) {
        let kb = KnowledgeBase::standard().unwrap();
        let mut session = Session::new(&kb);
        for (symptom, answer) in answers {
            session.record(symptom, answer);
        }
        let yes = count_yes(&session, &symptoms);
        prop_assert!(yes <= symptoms.len());

        let confidence = calculate_confidence(yes, symptoms.len());
        prop_assert!((0.0..=100.0).contains(&confidence));
    }

    #[test]
    fn severity_is_zero_without_yes_answers(
        symptoms in prop::collection::vec(any_symptom(), 0..20),
        noes in prop::collection::vec(any_symptom(), 0..20),
    ) {
        let kb = KnowledgeBase::standard().unwrap();
        let mut session = Session::new(&kb);
        for symptom in noes {
            session.record(symptom, false);
        }
        prop_assert_eq!(calculate_severity(&session, &symptoms), 0);
    }

    #[test]
    fn severity_level_is_monotonic(a in 0u32..100, b in 0u32..100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(severity_level(low) <= severity_level(high));
    }

    #[test]
    fn gate_fails_when_any_threshold_fails(
        yes in 0usize..10,
        severity in 0u32..40,
        confidence in 0.0f64..=100.0,
    ) {
        let expected = yes >= 3 && severity >= 8 && confidence >= 40.0;
        prop_assert_eq!(meets_constraints(yes, severity, confidence), expected);
    }

    #[test]
    fn recording_twice_is_idempotent(symptom in any_symptom(), answer in any::<bool>()) {
        let kb = KnowledgeBase::standard().unwrap();
        let mut session = Session::new(&kb);
        session.record(symptom, answer);
        let count = session.answered_count();
        let risks = session.risk_factors().len();
        session.record(symptom, answer);
        prop_assert_eq!(session.answered_count(), count);
        prop_assert_eq!(session.risk_factors().len(), risks);
    }
}

#[test]
fn severity_levels_are_ordered() {
    assert!(SeverityLevel::Minimal < SeverityLevel::Mild);
    assert!(SeverityLevel::Mild < SeverityLevel::Moderate);
    assert!(SeverityLevel::Moderate < SeverityLevel::Severe);
}
