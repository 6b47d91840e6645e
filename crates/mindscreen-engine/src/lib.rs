//! mindscreen-engine
//!
//! The rule-based inference engine. Holds the knowledge base of conditions,
//! symptom weights and recommendations; the per-session answer store; the
//! scoring functions and diagnostic gate; and the orchestrator that walks a
//! session through every condition. Pure logic: all I/O goes through the
//! [`provider::AnswerProvider`] and [`provider::Renderer`] traits.

pub mod assessment;
pub mod conditions;
pub mod error;
pub mod knowledge;
pub mod predicate;
pub mod provider;
pub mod scoring;
pub mod session;

pub use assessment::{Assessment, AssessmentOutcome, AssessmentPhase};
pub use error::{EngineError, KnowledgeBaseError};
pub use knowledge::{ConditionEntry, DEFAULT_WEIGHT, KnowledgeBase, KnowledgeBaseBuilder};
pub use predicate::meets_constraints;
pub use provider::{AnswerProvider, Renderer, ScriptedAnswers};
pub use session::Session;
