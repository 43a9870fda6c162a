//! Whole-file validation: one header call, then one call per data row.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::input::{Parser, ParserConfig, RawTable, SourceMetadata};
use crate::schema::Schema;

use super::diagnostic::Diagnostic;
use super::outcome::ValidationOutcome;

/// Diagnostics collected across a whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Metadata about the file, when validated from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    /// URI of the schema used.
    pub schema: String,
    /// Number of data rows checked.
    pub rows_checked: usize,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl FileReport {
    /// Whether no errors were found anywhere in the file.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    fn absorb(&mut self, outcome: ValidationOutcome) {
        self.errors.extend(outcome.errors);
        self.warnings.extend(outcome.warnings);
    }
}

/// Drives a [`Schema`] over a parsed file.
///
/// The header is record 1; data rows are numbered by physical record,
/// starting at 2 when a header is present and 1 otherwise.
pub struct TableValidator {
    schema: Schema,
    parser: Parser,
}

impl TableValidator {
    /// Create a validator with default parser configuration.
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, ParserConfig::default())
    }

    pub fn with_config(schema: Schema, config: ParserConfig) -> Self {
        Self {
            schema,
            parser: Parser::with_config(config),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate a file on disk.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<FileReport> {
        let (table, metadata) = self.parser.parse_file(path)?;
        let mut report = self.validate_table(&table);
        report.source = Some(metadata);
        Ok(report)
    }

    /// Validate in-memory CSV bytes.
    pub fn validate_bytes(&self, bytes: &[u8]) -> Result<FileReport> {
        let table = self.parser.parse_bytes(bytes)?;
        Ok(self.validate_table(&table))
    }

    /// Validate already-tokenized records.
    pub fn validate_table(&self, table: &RawTable) -> FileReport {
        let mut report = FileReport {
            source: None,
            schema: self.schema.uri().to_string(),
            rows_checked: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        };

        let first_row = match &table.header {
            Some(header) => {
                report.absorb(self.schema.validate_header(header));
                2
            }
            None => 1,
        };

        for (offset, values) in table.rows.iter().enumerate() {
            report.absorb(self.schema.validate_row(values, Some(first_row + offset)));
            report.rows_checked += 1;
        }

        info!(
            schema = %self.schema.uri(),
            rows = report.rows_checked,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validated table"
        );
        debug!(passed = report.passed(), "file result");
        report
    }
}
