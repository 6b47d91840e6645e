use mindscreen_core::Condition;
use mindscreen_core::Symptom::*;

use crate::knowledge::KnowledgeBaseBuilder;

/// Major depression and seasonal affective disorder.
pub fn register(builder: KnowledgeBaseBuilder) -> KnowledgeBaseBuilder {
    builder
        .condition(
            Condition::MajorDepression,
            [
                PersistentSadness,
                LossOfInterest,
                SleepChanges,
                Fatigue,
                FeelingsOfWorthlessness,
                DifficultyConcentrating,
                SuicidalThoughts,
            ],
            [
                "Seek an evaluation from a psychiatrist or licensed therapist as soon as possible",
                "Evidence-based options include psychotherapy (CBT, IPT) and, where appropriate, medication",
                "Keep a daily routine with regular meals, sleep and light physical activity",
                "Stay connected with trusted friends or family rather than withdrawing",
                "If thoughts of self-harm appear, contact a crisis line or emergency services immediately",
            ],
        )
        .condition(
            Condition::Sad,
            [WinterDepression, Oversleeping, WeightGain, LowEnergySeasonal],
            [
                "Discuss seasonal mood changes with a healthcare provider",
                "Ask about light therapy with a 10,000 lux light box in the morning",
                "Get outdoors in daylight whenever possible during darker months",
                "Plan regular exercise and social activity through autumn and winter",
            ],
        )
        .weights(&[
            (SuicidalThoughts, 5),
            (PersistentSadness, 4),
            (LossOfInterest, 4),
            (FeelingsOfWorthlessness, 4),
            (SleepChanges, 3),
            (Fatigue, 3),
            (WinterDepression, 3),
        ])
        .high_risk(SuicidalThoughts)
}
