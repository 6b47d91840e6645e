use mindscreen_core::Condition;
use mindscreen_core::Symptom::*;

use crate::knowledge::KnowledgeBaseBuilder;

pub fn register(builder: KnowledgeBaseBuilder) -> KnowledgeBaseBuilder {
    builder
        .condition(
            Condition::Ptsd,
            [
                IntrusiveMemories,
                Nightmares,
                Flashbacks,
                AvoidanceOfReminders,
                Hypervigilance,
                EmotionalNumbness,
            ],
            [
                "Seek a trauma-informed mental health professional for assessment",
                "Ask about trauma-focused therapies such as CPT, PE or EMDR",
                "Build a safety plan and grounding routine for flashbacks",
                "Connect with peer support groups for trauma survivors",
            ],
        )
        .condition(
            Condition::Burnout,
            [
                EmotionalExhaustion,
                Cynicism,
                ReducedPerformance,
                ChronicWorkStress,
            ],
            [
                "Talk to a counselor or occupational health service about workload and stress",
                "Set firm boundaries around working hours and protect time for recovery",
                "Discuss workload adjustments or leave options with your employer",
                "Prioritise sleep, exercise and activities unrelated to work",
            ],
        )
        .weights(&[
            (IntrusiveMemories, 4),
            (Flashbacks, 4),
            (Nightmares, 3),
            (Hypervigilance, 3),
            (AvoidanceOfReminders, 3),
            (EmotionalExhaustion, 4),
            (ChronicWorkStress, 3),
        ])
}
