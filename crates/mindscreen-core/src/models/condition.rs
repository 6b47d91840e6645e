use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A screening category with its own symptom checklist.
///
/// Declaration order is the order conditions are assessed and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Gad,
    PanicDisorder,
    SocialAnxiety,
    MajorDepression,
    Sad,
    Ptsd,
    Burnout,
    Ocd,
    Bipolar,
    EatingDisorder,
    SubstanceUse,
}

/// Grouping used when listing the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Anxiety,
    Depression,
    TraumaAndStress,
    Other,
}

impl Condition {
    pub const ALL: &'static [Condition] = &[
        Condition::Gad,
        Condition::PanicDisorder,
        Condition::SocialAnxiety,
        Condition::MajorDepression,
        Condition::Sad,
        Condition::Ptsd,
        Condition::Burnout,
        Condition::Ocd,
        Condition::Bipolar,
        Condition::EatingDisorder,
        Condition::SubstanceUse,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Condition::Gad => "gad",
            Condition::PanicDisorder => "panic_disorder",
            Condition::SocialAnxiety => "social_anxiety",
            Condition::MajorDepression => "major_depression",
            Condition::Sad => "sad",
            Condition::Ptsd => "ptsd",
            Condition::Burnout => "burnout",
            Condition::Ocd => "ocd",
            Condition::Bipolar => "bipolar",
            Condition::EatingDisorder => "eating_disorder",
            Condition::SubstanceUse => "substance_use",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Condition::Gad => "Generalized Anxiety Disorder",
            Condition::PanicDisorder => "Panic Disorder",
            Condition::SocialAnxiety => "Social Anxiety Disorder",
            Condition::MajorDepression => "Major Depressive Disorder",
            Condition::Sad => "Seasonal Affective Disorder",
            Condition::Ptsd => "Post-Traumatic Stress Disorder",
            Condition::Burnout => "Burnout Syndrome",
            Condition::Ocd => "Obsessive-Compulsive Disorder",
            Condition::Bipolar => "Bipolar Disorder",
            Condition::EatingDisorder => "Eating Disorder",
            Condition::SubstanceUse => "Substance Use Disorder",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Condition::Gad | Condition::PanicDisorder | Condition::SocialAnxiety => {
                Category::Anxiety
            }
            Condition::MajorDepression | Condition::Sad => Category::Depression,
            Condition::Ptsd | Condition::Burnout => Category::TraumaAndStress,
            Condition::Ocd
            | Condition::Bipolar
            | Condition::EatingDisorder
            | Condition::SubstanceUse => Category::Other,
        }
    }
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Anxiety => "Anxiety Disorders",
            Category::Depression => "Depression",
            Category::TraumaAndStress => "Trauma & Stress",
            Category::Other => "Other Conditions",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .iter()
            .copied()
            .find(|condition| condition.id() == s)
            .ok_or_else(|| CoreError::UnknownCondition(s.to_string()))
    }
}
