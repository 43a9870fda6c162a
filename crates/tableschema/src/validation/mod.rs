//! Diagnostics and the per-call and per-file result types.

mod diagnostic;
mod file;
mod outcome;

pub use diagnostic::{Category, Diagnostic, DiagnosticKind};
pub use file::{FileReport, TableValidator};
pub use outcome::{DiagnosticSink, ValidationOutcome};
