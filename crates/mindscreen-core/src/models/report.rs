use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::condition::Condition;
use super::diagnosis::{DiagnosisResult, SeverityLevel};
use super::symptom::Symptom;

/// The archived form of one finished screening session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub session_id: Uuid,
    pub generated_at: jiff::Timestamp,
    pub questions_asked: usize,
    pub crisis_alert: bool,
    #[serde(default)]
    pub risk_factors: Vec<Symptom>,
    pub results: Vec<ReportEntry>,
}

/// One diagnosed condition as stored in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub condition: Condition,
    pub yes_count: usize,
    pub severity: u32,
    pub confidence: f64,
    pub level: SeverityLevel,
    pub diagnosed: bool,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl ReportEntry {
    pub fn from_result(result: &DiagnosisResult, recommendations: &[String]) -> Self {
        Self {
            condition: result.condition,
            yes_count: result.yes_count,
            severity: result.severity,
            confidence: result.confidence,
            level: result.level,
            diagnosed: result.diagnosed,
            recommendations: recommendations.to_vec(),
        }
    }
}
