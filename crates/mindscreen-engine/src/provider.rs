use std::collections::HashMap;

use mindscreen_core::{Condition, DiagnosisResult, Symptom};

use crate::error::EngineError;

/// Source of symptom answers.
///
/// Implementations block until they have a definite yes or no; re-asking on
/// unparseable input is their business. An error aborts the assessment.
pub trait AnswerProvider {
    fn ask(&mut self, symptom: Symptom) -> Result<bool, EngineError>;
}

/// Output side of an assessment. A failed write aborts the run.
pub trait Renderer {
    /// Called before a condition's outstanding questions are asked.
    fn condition_started(
        &mut self,
        _condition: Condition,
        _pending_questions: usize,
    ) -> Result<(), EngineError> {
        Ok(())
    }

    /// A condition passed the diagnostic gate.
    fn diagnosis(
        &mut self,
        result: &DiagnosisResult,
        recommendations: &[String],
    ) -> Result<(), EngineError>;

    /// At least one high-risk symptom was answered yes.
    fn crisis_alert(&mut self, risk_factors: &[Symptom]) -> Result<(), EngineError>;

    /// Every diagnosis of the session, in assessment order. May be empty.
    fn summary(&mut self, results: &[DiagnosisResult]) -> Result<(), EngineError>;
}

/// Answers from a fixed script; anything unscripted is answered no.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: HashMap<Symptom, bool>,
    asked: Vec<Symptom>,
}

impl ScriptedAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a yes for each of `symptoms`.
    pub fn yes_to(symptoms: &[Symptom]) -> Self {
        let mut script = Self::new();
        for &symptom in symptoms {
            script.answers.insert(symptom, true);
        }
        script
    }

    pub fn answer(mut self, symptom: Symptom, answer: bool) -> Self {
        self.answers.insert(symptom, answer);
        self
    }

    /// Symptoms asked so far, in order.
    pub fn asked(&self) -> &[Symptom] {
        &self.asked
    }
}

impl AnswerProvider for ScriptedAnswers {
    fn ask(&mut self, symptom: Symptom) -> Result<bool, EngineError> {
        self.asked.push(symptom);
        Ok(self.answers.get(&symptom).copied().unwrap_or(false))
    }
}
