use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! symptoms {
    ($($variant:ident => $id:literal),+ $(,)?) => {
        /// A single yes/no screening question.
        ///
        /// The set is closed: every symptom any condition can reference is a
        /// variant here, so a misspelled identifier is a compile error rather
        /// than a silently unanswered question.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Symptom {
            $($variant,)+
        }

        impl Symptom {
            /// Every symptom, in declaration order.
            pub const ALL: &'static [Symptom] = &[$(Symptom::$variant,)+];

            /// The stable snake_case token (e.g. `"excessive_worry"`).
            pub fn id(self) -> &'static str {
                match self {
                    $(Symptom::$variant => $id,)+
                }
            }
        }
    };
}

symptoms! {
    // anxiety
    ExcessiveWorry => "excessive_worry",
    Restlessness => "restlessness",
    DifficultyConcentrating => "difficulty_concentrating",
    MuscleTension => "muscle_tension",
    SleepProblems => "sleep_problems",
    SuddenIntenseFear => "sudden_intense_fear",
    ChestPain => "chest_pain",
    RapidHeartbeat => "rapid_heartbeat",
    FearOfDying => "fear_of_dying",
    Sweating => "sweating",
    Trembling => "trembling",
    FearOfJudgment => "fear_of_judgment",
    AvoidSocialSituations => "avoid_social_situations",
    FearOfEmbarrassment => "fear_of_embarrassment",
    PhysicalSymptomsInPublic => "physical_symptoms_in_public",
    // depression
    PersistentSadness => "persistent_sadness",
    LossOfInterest => "loss_of_interest",
    SleepChanges => "sleep_changes",
    Fatigue => "fatigue",
    FeelingsOfWorthlessness => "feelings_of_worthlessness",
    SuicidalThoughts => "suicidal_thoughts",
    WinterDepression => "winter_depression",
    Oversleeping => "oversleeping",
    WeightGain => "weight_gain",
    LowEnergySeasonal => "low_energy_seasonal",
    // trauma and stress
    IntrusiveMemories => "intrusive_memories",
    Nightmares => "nightmares",
    Flashbacks => "flashbacks",
    AvoidanceOfReminders => "avoidance_of_reminders",
    Hypervigilance => "hypervigilance",
    EmotionalNumbness => "emotional_numbness",
    EmotionalExhaustion => "emotional_exhaustion",
    Cynicism => "cynicism",
    ReducedPerformance => "reduced_performance",
    ChronicWorkStress => "chronic_work_stress",
    // other
    IntrusiveThoughts => "intrusive_thoughts",
    RepetitiveBehaviors => "repetitive_behaviors",
    CompulsiveChecking => "compulsive_checking",
    ExcessiveCleaning => "excessive_cleaning",
    MoodSwings => "mood_swings",
    PeriodsOfHighEnergy => "periods_of_high_energy",
    PeriodsOfDepression => "periods_of_depression",
    ImpulsiveBehavior => "impulsive_behavior",
    RacingThoughts => "racing_thoughts",
    PreoccupationWithWeight => "preoccupation_with_weight",
    RestrictiveEating => "restrictive_eating",
    BingeEating => "binge_eating",
    DistortedBodyImage => "distorted_body_image",
    UnableToControlUse => "unable_to_control_use",
    Cravings => "cravings",
    NeglectingResponsibilities => "neglecting_responsibilities",
    ContinuedUseDespiteHarm => "continued_use_despite_harm",
}

impl Symptom {
    /// Display label derived from the identifier: underscores become spaces
    /// and each word is capitalised (`excessive_worry` -> `Excessive Worry`).
    pub fn label(self) -> String {
        self.id()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Symptom {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symptom::ALL
            .iter()
            .copied()
            .find(|symptom| symptom.id() == s)
            .ok_or_else(|| CoreError::UnknownSymptom(s.to_string()))
    }
}
