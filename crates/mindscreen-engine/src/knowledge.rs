use std::collections::{HashMap, HashSet};

use mindscreen_core::{Condition, Symptom};

use crate::conditions;
use crate::error::KnowledgeBaseError;

/// Weight applied to any symptom without an explicit entry.
pub const DEFAULT_WEIGHT: u32 = 2;

/// A condition's checklist and the advice shown when it is diagnosed.
#[derive(Debug, Clone)]
pub struct ConditionEntry {
    pub condition: Condition,
    pub symptoms: Vec<Symptom>,
    pub recommendations: Vec<String>,
}

/// Immutable, validated lookup table of conditions, weights and risk flags.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<ConditionEntry>,
    weights: HashMap<Symptom, u32>,
    high_risk: HashSet<Symptom>,
}

impl KnowledgeBase {
    /// The built-in screening knowledge base.
    pub fn standard() -> Result<Self, KnowledgeBaseError> {
        conditions::register_all(Self::builder()).build()
    }

    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::default()
    }

    /// Conditions in assessment order.
    pub fn conditions(&self) -> impl Iterator<Item = Condition> + '_ {
        self.entries.iter().map(|e| e.condition)
    }

    pub fn entries(&self) -> &[ConditionEntry] {
        &self.entries
    }

    pub fn entry(&self, condition: Condition) -> Option<&ConditionEntry> {
        self.entries.iter().find(|e| e.condition == condition)
    }

    /// Ordered checklist for `condition`; empty if the condition is not loaded.
    pub fn symptoms(&self, condition: Condition) -> &[Symptom] {
        self.entry(condition)
            .map(|e| e.symptoms.as_slice())
            .unwrap_or_default()
    }

    pub fn recommendations(&self, condition: Condition) -> &[String] {
        self.entry(condition)
            .map(|e| e.recommendations.as_slice())
            .unwrap_or_default()
    }

    pub fn weight(&self, symptom: Symptom) -> u32 {
        self.weights
            .get(&symptom)
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn has_explicit_weight(&self, symptom: Symptom) -> bool {
        self.weights.contains_key(&symptom)
    }

    pub fn is_high_risk(&self, symptom: Symptom) -> bool {
        self.high_risk.contains(&symptom)
    }

    /// Every referenced symptom once, in order of first appearance.
    pub fn distinct_symptoms(&self) -> Vec<Symptom> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .flat_map(|e| e.symptoms.iter().copied())
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

/// Accumulates knowledge-base data; [`build`](Self::build) validates it.
#[derive(Debug, Default)]
pub struct KnowledgeBaseBuilder {
    entries: Vec<ConditionEntry>,
    weights: HashMap<Symptom, u32>,
    high_risk: Vec<Symptom>,
}

impl KnowledgeBaseBuilder {
    pub fn condition<S, R>(mut self, condition: Condition, symptoms: S, recommendations: R) -> Self
    where
        S: IntoIterator<Item = Symptom>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        self.entries.push(ConditionEntry {
            condition,
            symptoms: symptoms.into_iter().collect(),
            recommendations: recommendations.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Set an explicit severity weight. A later call for the same symptom wins.
    pub fn weight(mut self, symptom: Symptom, weight: u32) -> Self {
        self.weights.insert(symptom, weight);
        self
    }

    pub fn weights(mut self, weights: &[(Symptom, u32)]) -> Self {
        self.weights.extend(weights.iter().copied());
        self
    }

    pub fn high_risk(mut self, symptom: Symptom) -> Self {
        self.high_risk.push(symptom);
        self
    }

    pub fn build(self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        if self.entries.is_empty() {
            return Err(KnowledgeBaseError::EmptyConditions);
        }

        let mut seen_conditions = HashSet::new();
        let mut referenced = HashSet::new();
        for entry in &self.entries {
            if !seen_conditions.insert(entry.condition) {
                return Err(KnowledgeBaseError::DuplicateCondition(entry.condition));
            }
            if entry.symptoms.is_empty() {
                return Err(KnowledgeBaseError::EmptySymptomList(entry.condition));
            }
            let mut in_condition = HashSet::new();
            for &symptom in &entry.symptoms {
                if !in_condition.insert(symptom) {
                    return Err(KnowledgeBaseError::DuplicateSymptom {
                        condition: entry.condition,
                        symptom,
                    });
                }
                referenced.insert(symptom);
            }
        }

        // Sorted so the first reported error is stable across runs.
        let mut weighted: Vec<_> = self.weights.iter().map(|(s, w)| (*s, *w)).collect();
        weighted.sort();
        for (symptom, weight) in weighted {
            if weight == 0 {
                return Err(KnowledgeBaseError::ZeroWeight(symptom));
            }
            if !referenced.contains(&symptom) {
                return Err(KnowledgeBaseError::OrphanWeight(symptom));
            }
        }

        for &symptom in &self.high_risk {
            if !referenced.contains(&symptom) {
                return Err(KnowledgeBaseError::OrphanHighRisk(symptom));
            }
        }

        let kb = KnowledgeBase {
            entries: self.entries,
            weights: self.weights,
            high_risk: self.high_risk.into_iter().collect(),
        };

        for symptom in kb.distinct_symptoms() {
            if !kb.has_explicit_weight(symptom) {
                tracing::debug!(%symptom, weight = DEFAULT_WEIGHT, "symptom uses default weight");
            }
        }
        tracing::debug!(
            conditions = kb.entries.len(),
            symptoms = referenced.len(),
            high_risk = kb.high_risk.len(),
            "knowledge base loaded"
        );

        Ok(kb)
    }
}
