use mindscreen_core::error::CoreError;
use mindscreen_core::{Category, Condition, DiagnosisResult, SeverityLevel, Symptom};

#[test]
fn labels_are_title_cased() {
    assert_eq!(Symptom::ExcessiveWorry.label(), "Excessive Worry");
    assert_eq!(
        Symptom::PhysicalSymptomsInPublic.label(),
        "Physical Symptoms In Public"
    );
    assert_eq!(Symptom::Fatigue.label(), "Fatigue");
}

#[test]
fn symptom_ids_parse_back() {
    for symptom in Symptom::ALL {
        assert_eq!(symptom.id().parse::<Symptom>().unwrap(), *symptom);
    }
    assert_eq!(Symptom::ALL.len(), 52);
}

#[test]
fn unknown_ids_are_rejected() {
    assert!(matches!(
        "panic".parse::<Symptom>(),
        Err(CoreError::UnknownSymptom(id)) if id == "panic"
    ));
    assert!(matches!(
        "anxiety".parse::<Condition>(),
        Err(CoreError::UnknownCondition(_))
    ));
}

#[test]
fn serde_uses_snake_case_tokens() {
    assert_eq!(
        serde_json::to_string(&Symptom::ContinuedUseDespiteHarm).unwrap(),
        "\"continued_use_despite_harm\""
    );
    assert_eq!(
        serde_json::to_string(&Condition::PanicDisorder).unwrap(),
        "\"panic_disorder\""
    );
    assert_eq!(
        serde_json::to_string(&SeverityLevel::Moderate).unwrap(),
        "\"MODERATE\""
    );
}

#[test]
fn condition_ids_match_serde() {
    for condition in Condition::ALL {
        let json = serde_json::to_string(condition).unwrap();
        assert_eq!(json, format!("\"{}\"", condition.id()));
        assert_eq!(condition.id().parse::<Condition>().unwrap(), *condition);
    }
}

#[test]
fn categories_group_conditions() {
    assert_eq!(Condition::Gad.category(), Category::Anxiety);
    assert_eq!(Condition::Sad.category(), Category::Depression);
    assert_eq!(Condition::Burnout.category(), Category::TraumaAndStress);
    assert_eq!(Condition::SubstanceUse.category(), Category::Other);
    assert_eq!(Category::TraumaAndStress.name(), "Trauma & Stress");
}

#[test]
fn diagnosis_result_record_keys() {
    let result = DiagnosisResult {
        condition: Condition::Gad,
        yes_count: 3,
        severity: 11,
        confidence: 60.0,
        level: SeverityLevel::Mild,
        diagnosed: true,
    };
    let value = serde_json::to_value(&result).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    for key in ["condition", "yes_count", "severity", "confidence", "level", "diagnosed"] {
        assert!(keys.iter().any(|k| k == key), "missing {key}");
    }
}
