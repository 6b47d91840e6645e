//! mindscreen-export
//!
//! Report archival (pretty JSON on disk) and Markdown summaries rendered
//! through Tera.

pub mod archive;
pub mod error;
pub mod render;

pub use archive::{load_report, report_file_name, save_report};
pub use error::ExportError;
pub use render::render_summary;
