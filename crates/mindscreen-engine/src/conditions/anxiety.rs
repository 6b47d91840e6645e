use mindscreen_core::Condition;
use mindscreen_core::Symptom::*;

use crate::knowledge::KnowledgeBaseBuilder;

/// GAD, panic disorder and social anxiety.
pub fn register(builder: KnowledgeBaseBuilder) -> KnowledgeBaseBuilder {
    builder
        .condition(
            Condition::Gad,
            [
                ExcessiveWorry,
                Restlessness,
                DifficultyConcentrating,
                MuscleTension,
                SleepProblems,
            ],
            [
                "Consult a licensed mental health professional for a full anxiety evaluation",
                "Consider Cognitive Behavioral Therapy (CBT), which has strong evidence for GAD",
                "Practice daily relaxation techniques such as diaphragmatic breathing or progressive muscle relaxation",
                "Limit caffeine and alcohol, both of which can intensify worry",
                "Keep a regular sleep schedule and a consistent wind-down routine",
            ],
        )
        .condition(
            Condition::PanicDisorder,
            [
                SuddenIntenseFear,
                ChestPain,
                RapidHeartbeat,
                FearOfDying,
                Sweating,
                Trembling,
            ],
            [
                "See a doctor to rule out cardiac or other medical causes of chest pain and palpitations",
                "Ask a mental health professional about CBT with interoceptive exposure",
                "Learn grounding techniques (5-4-3-2-1 senses) to ride out an attack",
                "Avoid stimulants that can mimic or trigger panic symptoms",
            ],
        )
        .condition(
            Condition::SocialAnxiety,
            [
                FearOfJudgment,
                AvoidSocialSituations,
                FearOfEmbarrassment,
                PhysicalSymptomsInPublic,
            ],
            [
                "Talk to a mental health professional about social anxiety treatment options",
                "Consider CBT with gradual exposure to feared social situations",
                "Join a support group or social skills group in a low-pressure setting",
            ],
        )
        .weights(&[
            (ExcessiveWorry, 4),
            (SleepProblems, 4),
            (MuscleTension, 3),
            (Restlessness, 3),
            (SuddenIntenseFear, 4),
            (FearOfDying, 3),
            (RapidHeartbeat, 3),
            (ChestPain, 3),
            (FearOfJudgment, 3),
            (AvoidSocialSituations, 3),
        ])
}
