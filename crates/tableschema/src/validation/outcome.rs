//! Per-call validation results.

use serde::{Deserialize, Serialize};

use super::diagnostic::Diagnostic;

/// Diagnostics produced by a single validation call.
///
/// Passing means no errors; warnings never affect the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    #[serde(default)]
    pub errors: Vec<Diagnostic>,
    #[serde(default)]
    pub warnings: Vec<Diagnostic>,
}

impl ValidationOutcome {
    /// Whether the call produced no errors.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of diagnostics of either severity.
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Accumulates diagnostics for one validation call.
///
/// A sink is created at the start of each call and consumed by
/// [`finish`](Self::finish), so nothing carries over between calls.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    outcome: ValidationOutcome,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn error(&mut self, diagnostic: Diagnostic) {
        self.outcome.errors.push(diagnostic);
    }

    /// Record a warning.
    pub fn warning(&mut self, diagnostic: Diagnostic) {
        self.outcome.warnings.push(diagnostic);
    }

    /// Append another outcome's diagnostics after the ones already recorded.
    pub fn merge(&mut self, other: ValidationOutcome) {
        self.outcome.errors.extend(other.errors);
        self.outcome.warnings.extend(other.warnings);
    }

    pub fn finish(self) -> ValidationOutcome {
        self.outcome
    }
}
