use mindscreen_core::{Condition, Symptom};
use thiserror::Error;

/// Data-entry problems caught when a knowledge base is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnowledgeBaseError {
    #[error("knowledge base defines no conditions")]
    EmptyConditions,

    #[error("condition '{0}' has no symptoms")]
    EmptySymptomList(Condition),

    #[error("condition '{0}' is defined more than once")]
    DuplicateCondition(Condition),

    #[error("symptom '{symptom}' is listed more than once for condition '{condition}'")]
    DuplicateSymptom {
        condition: Condition,
        symptom: Symptom,
    },

    #[error("symptom '{0}' has an explicit weight of zero")]
    ZeroWeight(Symptom),

    #[error("weight given for symptom '{0}' which no condition references")]
    OrphanWeight(Symptom),

    #[error("symptom '{0}' is marked high-risk but no condition references it")]
    OrphanHighRisk(Symptom),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("input closed before symptom '{0}' was answered")]
    InputClosed(Symptom),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid knowledge base: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),
}
