//! Field definitions and per-value constraint checks.

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Result, SchemaError};
use crate::validation::{Diagnostic, DiagnosticKind, DiagnosticSink, ValidationOutcome};

use super::constraints::Constraints;

/// One named, constrained column definition.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    constraints: Constraints,
    title: Option<String>,
    description: Option<String>,
    pattern: Option<Regex>,
}

impl Field {
    /// Create a field, compiling its `pattern` constraint if present.
    pub fn new(name: impl Into<String>, constraints: Constraints) -> Result<Self> {
        let name = name.into();
        let pattern = match &constraints.pattern {
            Some(p) => Some(Regex::new(p).map_err(|source| SchemaError::Regex {
                field: name.clone(),
                source,
            })?),
            None => None,
        };

        if !constraints.unknown.is_empty() {
            debug!(
                field = %name,
                keys = ?constraints.unknown.keys().collect::<Vec<_>>(),
                "ignoring unrecognized constraints"
            );
        }

        Ok(Self {
            name,
            constraints,
            title: None,
            description: None,
            pattern,
        })
    }

    /// Create a field with no constraints.
    pub fn unconstrained(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Constraints::default(),
            title: None,
            description: None,
            pattern: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.constraints.required
    }

    /// Case-insensitive comparison against a header cell.
    pub fn matches_name(&self, header: &str) -> bool {
        self.name.to_lowercase() == header.to_lowercase()
    }

    /// Check one value against every constraint.
    ///
    /// Checks are independent, so one value may produce several errors.
    pub fn validate(&self, value: &str, row: Option<usize>, column: usize) -> ValidationOutcome {
        let mut sink = DiagnosticSink::new();
        let length = value.chars().count();

        if self.constraints.required && value.is_empty() {
            sink.error(Diagnostic::schema(DiagnosticKind::MissingValue, row, column));
        }

        if let Some(min) = self.constraints.min_length {
            if length < min {
                sink.error(
                    Diagnostic::schema(DiagnosticKind::MinLength, row, column)
                        .with_content(Some(value)),
                );
            }
        }

        if let Some(max) = self.constraints.max_length {
            if length > max {
                sink.error(
                    Diagnostic::schema(DiagnosticKind::MaxLength, row, column)
                        .with_content(Some(value)),
                );
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                sink.error(
                    Diagnostic::schema(DiagnosticKind::Pattern, row, column)
                        .with_content(Some(value)),
                );
            }
        }

        let outcome = sink.finish();
        trace!(
            field = %self.name,
            ?row,
            column,
            errors = outcome.errors.len(),
            "checked value"
        );
        outcome
    }
}
