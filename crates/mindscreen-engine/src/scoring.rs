use mindscreen_core::{Condition, DiagnosisResult, SeverityLevel, Symptom};

use crate::predicate::meets_constraints;
use crate::session::Session;

/// Inclusive lower bounds of each severity band.
pub const SEVERE_THRESHOLD: u32 = 20;
pub const MODERATE_THRESHOLD: u32 = 12;
pub const MILD_THRESHOLD: u32 = 8;

/// Number of `symptoms` answered yes.
pub fn count_yes(session: &Session<'_>, symptoms: &[Symptom]) -> usize {
    symptoms.iter().filter(|s| session.get(**s)).count()
}

/// Sum of the weights of the `symptoms` answered yes.
pub fn calculate_severity(session: &Session<'_>, symptoms: &[Symptom]) -> u32 {
    let knowledge = session.knowledge();
    symptoms
        .iter()
        .filter(|s| session.get(**s))
        .map(|s| knowledge.weight(*s))
        .sum()
}

/// Share of the checklist answered yes, as a percentage. Zero for an empty
/// checklist.
pub fn calculate_confidence(yes_count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    yes_count as f64 / total as f64 * 100.0
}

pub fn severity_level(score: u32) -> SeverityLevel {
    if score >= SEVERE_THRESHOLD {
        SeverityLevel::Severe
    } else if score >= MODERATE_THRESHOLD {
        SeverityLevel::Moderate
    } else if score >= MILD_THRESHOLD {
        SeverityLevel::Mild
    } else {
        SeverityLevel::Minimal
    }
}

/// All metrics for one condition, whether or not it passes the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub condition: Condition,
    pub yes_count: usize,
    pub total: usize,
    pub severity: u32,
    pub confidence: f64,
    pub level: SeverityLevel,
}

impl Evaluation {
    pub fn passes(&self) -> bool {
        meets_constraints(self.yes_count, self.severity, self.confidence)
    }

    /// The diagnosis, if the condition passes the diagnostic gate.
    pub fn diagnosis(&self) -> Option<DiagnosisResult> {
        self.passes().then(|| DiagnosisResult {
            condition: self.condition,
            yes_count: self.yes_count,
            severity: self.severity,
            confidence: self.confidence,
            level: self.level,
            diagnosed: true,
        })
    }
}

/// Score `condition` against the answers recorded so far.
pub fn evaluate(session: &Session<'_>, condition: Condition) -> Evaluation {
    let symptoms = session.knowledge().symptoms(condition);
    let yes_count = count_yes(session, symptoms);
    let severity = calculate_severity(session, symptoms);
    Evaluation {
        condition,
        yes_count,
        total: symptoms.len(),
        severity,
        confidence: calculate_confidence(yes_count, symptoms.len()),
        level: severity_level(severity),
    }
}
