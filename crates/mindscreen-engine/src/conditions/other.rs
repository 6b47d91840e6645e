use mindscreen_core::Condition;
use mindscreen_core::Symptom::*;

use crate::knowledge::KnowledgeBaseBuilder;

/// OCD, bipolar disorder, eating disorders and substance use.
pub fn register(builder: KnowledgeBaseBuilder) -> KnowledgeBaseBuilder {
    builder
        .condition(
            Condition::Ocd,
            [
                IntrusiveThoughts,
                RepetitiveBehaviors,
                CompulsiveChecking,
                ExcessiveCleaning,
            ],
            [
                "Consult a mental health professional experienced in treating OCD",
                "Ask about Exposure and Response Prevention (ERP) therapy",
                "Track compulsions and their triggers to share with your clinician",
            ],
        )
        .condition(
            Condition::Bipolar,
            [
                MoodSwings,
                PeriodsOfHighEnergy,
                PeriodsOfDepression,
                ImpulsiveBehavior,
                RacingThoughts,
            ],
            [
                "See a psychiatrist for a thorough mood disorder evaluation",
                "Keep a mood and sleep diary to identify cycles and early warning signs",
                "Maintain a stable sleep schedule, as sleep loss can trigger episodes",
                "Avoid alcohol and recreational drugs, which destabilise mood",
            ],
        )
        .condition(
            Condition::EatingDisorder,
            [
                PreoccupationWithWeight,
                RestrictiveEating,
                BingeEating,
                DistortedBodyImage,
            ],
            [
                "Contact a healthcare provider for a medical and psychological assessment",
                "Seek a treatment team that includes a therapist and a registered dietitian",
                "Reach out to an eating disorder helpline for confidential support",
            ],
        )
        .condition(
            Condition::SubstanceUse,
            [
                UnableToControlUse,
                Cravings,
                NeglectingResponsibilities,
                ContinuedUseDespiteHarm,
            ],
            [
                "Speak with a doctor or addiction specialist about your substance use",
                "Do not stop some substances abruptly without medical supervision",
                "Consider support groups such as AA, NA or SMART Recovery",
                "Identify triggers and build a plan with people you trust",
            ],
        )
        .weights(&[
            (IntrusiveThoughts, 4),
            (RepetitiveBehaviors, 3),
            (CompulsiveChecking, 3),
            (PeriodsOfHighEnergy, 4),
            (MoodSwings, 3),
            (RacingThoughts, 3),
            (ImpulsiveBehavior, 3),
            (PreoccupationWithWeight, 4),
            (RestrictiveEating, 4),
            (BingeEating, 3),
            (DistortedBodyImage, 3),
            (UnableToControlUse, 4),
            (ContinuedUseDespiteHarm, 4),
            (Cravings, 3),
            (NeglectingResponsibilities, 3),
        ])
        .high_risk(RestrictiveEating)
        .high_risk(UnableToControlUse)
}
