//! Built-in condition definitions, grouped by category.
//!
//! Each module registers its checklists, explicit weights and high-risk
//! markers on a [`KnowledgeBaseBuilder`]. Registration order is assessment
//! order.

pub mod anxiety;
pub mod depression;
pub mod other;
pub mod trauma;

use crate::knowledge::KnowledgeBaseBuilder;

/// Register every built-in condition.
pub fn register_all(builder: KnowledgeBaseBuilder) -> KnowledgeBaseBuilder {
    let builder = anxiety::register(builder);
    let builder = depression::register(builder);
    let builder = trauma::register(builder);
    other::register(builder)
}
