//! mindscreen-core
//!
//! Pure domain types shared by every mindscreen crate: the closed sets of
//! symptom and condition identifiers, severity levels, diagnosis results and
//! the archived report shape. No I/O lives here.

pub mod error;
pub mod models;

pub use models::condition::{Category, Condition};
pub use models::diagnosis::{DiagnosisResult, SeverityLevel};
pub use models::report::{ReportEntry, ScreeningReport};
pub use models::symptom::Symptom;
