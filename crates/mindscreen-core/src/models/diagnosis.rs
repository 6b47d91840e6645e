use std::fmt;

use serde::{Deserialize, Serialize};

use super::condition::Condition;

/// Severity band a condition's weighted score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl SeverityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Minimal => "MINIMAL",
            SeverityLevel::Mild => "MILD",
            SeverityLevel::Moderate => "MODERATE",
            SeverityLevel::Severe => "SEVERE",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one condition against a session's answers.
///
/// Only conditions that pass the diagnostic gate produce one, so
/// `diagnosed` is always `true` for results handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub condition: Condition,
    pub yes_count: usize,
    pub severity: u32,
    /// Percentage of the checklist answered yes, in `[0, 100]`.
    pub confidence: f64,
    pub level: SeverityLevel,
    pub diagnosed: bool,
}
