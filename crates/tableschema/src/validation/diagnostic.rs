//! Diagnostic records emitted while matching data against a schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Header cell text does not match the field name.
    HeaderName,
    /// A required value (or an indexed header cell) is absent.
    MissingValue,
    /// The row has no cell where the schema expects one.
    MissingColumn,
    /// The row has more cells than the schema declares.
    ExtraColumn,
    /// Value is shorter than `minLength`.
    MinLength,
    /// Value is longer than `maxLength`.
    MaxLength,
    /// Value does not match `pattern`.
    Pattern,
}

impl DiagnosticKind {
    /// Get a human-readable label for the diagnostic kind.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::HeaderName => "Header Name",
            DiagnosticKind::MissingValue => "Missing Value",
            DiagnosticKind::MissingColumn => "Missing Column",
            DiagnosticKind::ExtraColumn => "Extra Column",
            DiagnosticKind::MinLength => "Minimum Length",
            DiagnosticKind::MaxLength => "Maximum Length",
            DiagnosticKind::Pattern => "Pattern",
        }
    }
}

/// Broad area a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Raised while checking data against a schema.
    Schema,
}

/// A single error or warning.
///
/// `column` is 1-based and always refers to the physical position in the
/// incoming row, never the field's position in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(rename = "type")]
    pub kind: DiagnosticKind,
    pub category: Category,
    /// Row number; absent for header diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub column: usize,
    /// The offending cell text, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Diagnostic {
    /// Create a schema-category diagnostic.
    pub fn schema(kind: DiagnosticKind, row: Option<usize>, column: usize) -> Self {
        Self {
            kind,
            category: Category::Schema,
            row,
            column,
            content: None,
        }
    }

    /// Attach the offending content.
    pub fn with_content(mut self, content: Option<impl Into<String>>) -> Self {
        self.content = content.map(Into::into);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(
                f,
                "{} at row {}, column {}",
                self.kind.label(),
                row,
                self.column
            )?,
            None => write!(
                f,
                "{} at header column {}",
                self.kind.label(),
                self.column
            )?,
        }
        if let Some(content) = &self.content {
            write!(f, " ({:?})", content)?;
        }
        Ok(())
    }
}
