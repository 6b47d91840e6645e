use mindscreen_core::{Condition, DiagnosisResult, ReportEntry, ScreeningReport, Symptom};
use serde::Serialize;
use uuid::Uuid;

use crate::error::EngineError;
use crate::knowledge::KnowledgeBase;
use crate::predicate::unmet_constraints;
use crate::provider::{AnswerProvider, Renderer};
use crate::scoring;
use crate::session::Session;

/// Where an assessment is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentPhase {
    NotStarted,
    Collecting(Condition),
    CrisisCheck,
    Reporting,
    Done,
}

/// Drives one session through every condition in knowledge-base order.
///
/// Each [`run`](Self::run) clears the session first, so an `Assessment` can
/// be reused for back-to-back screenings without answers leaking between them.
#[derive(Debug)]
pub struct Assessment<'kb> {
    session: Session<'kb>,
    phase: AssessmentPhase,
}

/// What a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    pub session_id: Uuid,
    pub started_at: jiff::Timestamp,
    pub finished_at: jiff::Timestamp,
    pub questions_asked: usize,
    pub results: Vec<DiagnosisResult>,
    pub risk_factors: Vec<Symptom>,
}

impl<'kb> Assessment<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self {
            session: Session::new(knowledge),
            phase: AssessmentPhase::NotStarted,
        }
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    pub fn run<P, R>(
        &mut self,
        provider: &mut P,
        renderer: &mut R,
    ) -> Result<AssessmentOutcome, EngineError>
    where
        P: AnswerProvider + ?Sized,
        R: Renderer + ?Sized,
    {
        self.session.clear();
        self.phase = AssessmentPhase::NotStarted;
        let knowledge = self.session.knowledge();
        tracing::info!(session = %self.session.id(), "assessment started");

        let mut results = Vec::new();
        let mut questions_asked = 0;

        for entry in knowledge.entries() {
            self.transition(AssessmentPhase::Collecting(entry.condition));

            let pending: Vec<Symptom> = entry
                .symptoms
                .iter()
                .copied()
                .filter(|s| !self.session.has(*s))
                .collect();
            renderer.condition_started(entry.condition, pending.len())?;

            for symptom in pending {
                let answer = provider.ask(symptom)?;
                self.session.record(symptom, answer);
                questions_asked += 1;
            }

            let evaluation = scoring::evaluate(&self.session, entry.condition);
            match evaluation.diagnosis() {
                Some(result) => {
                    tracing::debug!(
                        condition = %entry.condition,
                        yes_count = result.yes_count,
                        severity = result.severity,
                        confidence = result.confidence,
                        level = %result.level,
                        "condition diagnosed"
                    );
                    renderer.diagnosis(&result, &entry.recommendations)?;
                    results.push(result);
                }
                None => {
                    let unmet = unmet_constraints(
                        evaluation.yes_count,
                        evaluation.severity,
                        evaluation.confidence,
                    );
                    tracing::debug!(
                        condition = %entry.condition,
                        yes_count = evaluation.yes_count,
                        severity = evaluation.severity,
                        confidence = evaluation.confidence,
                        unmet = ?unmet,
                        "condition not diagnosed"
                    );
                }
            }
        }

        self.transition(AssessmentPhase::CrisisCheck);
        let risk_factors = self.session.risk_factors().to_vec();
        if !risk_factors.is_empty() {
            tracing::warn!(
                session = %self.session.id(),
                risk_factors = ?risk_factors,
                "crisis indicators reported"
            );
            renderer.crisis_alert(&risk_factors)?;
        }

        self.transition(AssessmentPhase::Reporting);
        renderer.summary(&results)?;

        self.transition(AssessmentPhase::Done);
        tracing::info!(
            session = %self.session.id(),
            questions_asked,
            diagnosed = results.len(),
            "assessment finished"
        );

        Ok(AssessmentOutcome {
            session_id: self.session.id(),
            started_at: self.session.started_at(),
            finished_at: jiff::Timestamp::now(),
            questions_asked,
            results,
            risk_factors,
        })
    }

    fn transition(&mut self, next: AssessmentPhase) {
        tracing::debug!(from = ?self.phase, to = ?next, "assessment phase");
        self.phase = next;
    }
}

impl AssessmentOutcome {
    pub fn crisis_alert(&self) -> bool {
        !self.risk_factors.is_empty()
    }

    /// Archival form, with each diagnosis's recommendations attached.
    pub fn into_report(self, knowledge: &KnowledgeBase) -> ScreeningReport {
        let crisis_alert = self.crisis_alert();
        ScreeningReport {
            session_id: self.session_id,
            generated_at: self.finished_at,
            questions_asked: self.questions_asked,
            crisis_alert,
            risk_factors: self.risk_factors,
            results: self
                .results
                .iter()
                .map(|r| ReportEntry::from_result(r, knowledge.recommendations(r.condition)))
                .collect(),
        }
    }
}
