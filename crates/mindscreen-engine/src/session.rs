use std::collections::HashMap;

use mindscreen_core::Symptom;
use uuid::Uuid;

use crate::knowledge::KnowledgeBase;

/// Answer store for one screening session.
///
/// A symptom is asked at most once per session; its answer is then reused by
/// every condition that lists it. High-risk symptoms answered yes are kept in
/// an insertion-ordered, duplicate-free list.
#[derive(Debug, Clone)]
pub struct Session<'kb> {
    knowledge: &'kb KnowledgeBase,
    id: Uuid,
    started_at: jiff::Timestamp,
    answers: HashMap<Symptom, bool>,
    risk_factors: Vec<Symptom>,
}

impl<'kb> Session<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self {
            knowledge,
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            answers: HashMap::new(),
            risk_factors: Vec::new(),
        }
    }

    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.knowledge
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    /// Set or overwrite the answer for `symptom`.
    ///
    /// A yes to a high-risk symptom is logged once; overwriting it with no
    /// later does not retract the entry.
    pub fn record(&mut self, symptom: Symptom, answer: bool) {
        self.answers.insert(symptom, answer);
        if answer
            && self.knowledge.is_high_risk(symptom)
            && !self.risk_factors.contains(&symptom)
        {
            tracing::debug!(session = %self.id, %symptom, "high-risk symptom reported");
            self.risk_factors.push(symptom);
        }
    }

    pub fn has(&self, symptom: Symptom) -> bool {
        self.answers.contains_key(&symptom)
    }

    /// Recorded answer, or `false` when the symptom has not been asked.
    pub fn get(&self, symptom: Symptom) -> bool {
        self.answers.get(&symptom).copied().unwrap_or(false)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn risk_factors(&self) -> &[Symptom] {
        &self.risk_factors
    }

    /// Forget every answer and risk factor and start a new session identity.
    pub fn clear(&mut self) {
        self.answers.clear();
        self.risk_factors.clear();
        self.id = Uuid::new_v4();
        self.started_at = jiff::Timestamp::now();
    }
}
