//! mindscreen-cli library root.
//!
//! Re-exports the console collaborators and config handling so integration
//! tests can drive them with in-memory readers and writers instead of a
//! terminal.

pub mod config;
pub mod console;
pub mod prompt;
