pub mod condition;
pub mod diagnosis;
pub mod report;
pub mod symptom;
