//! Table-level schema and the header/row matching engine.

use tracing::debug;

use crate::validation::{Diagnostic, DiagnosticKind, DiagnosticSink, ValidationOutcome};

use super::field::Field;
use super::resolver::{ColumnResolver, Resolution};

/// An ordered set of fields plus the rules for matching them to columns.
///
/// Validation takes `&self` and returns a fresh [`ValidationOutcome`] per
/// call, so a schema can be shared freely between rows and threads.
#[derive(Debug, Clone)]
pub struct Schema {
    uri: String,
    fields: Vec<Field>,
    title: Option<String>,
    description: Option<String>,
    validate_header_name: bool,
    resolver: ColumnResolver,
}

impl Schema {
    /// Create an order-resolved schema.
    pub fn new(uri: impl Into<String>, fields: Vec<Field>) -> Self {
        let resolver = ColumnResolver::new(&fields, Resolution::ByOrder);
        Self {
            uri: uri.into(),
            fields,
            title: None,
            description: None,
            validate_header_name: false,
            resolver,
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

    /// Select index-based (`true`) or order-based (`false`) resolution.
    pub fn uses_index(mut self, uses_index: bool) -> Self {
        let resolution = if uses_index {
            Resolution::ByIndex
        } else {
            Resolution::ByOrder
        };
        self.resolver = ColumnResolver::new(&self.fields, resolution);
        self
    }

    /// Under index resolution, also require header text to match field names.
    pub fn validate_header_name(mut self, enabled: bool) -> Self {
        self.validate_header_name = enabled;
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolver.resolution()
    }

    pub fn is_index_based(&self) -> bool {
        self.resolution() == Resolution::ByIndex
    }

    pub fn checks_header_names(&self) -> bool {
        self.validate_header_name
    }

    pub fn resolver(&self) -> &ColumnResolver {
        &self.resolver
    }

    /// Get a field by name (case-insensitive).
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.matches_name(name))
    }

    /// Check a header row. Only ever produces errors.
    pub fn validate_header<S: AsRef<str>>(&self, header: &[S]) -> ValidationOutcome {
        let mut sink = DiagnosticSink::new();

        match self.resolution() {
            Resolution::ByOrder => self.check_header_by_order(header, &mut sink),
            Resolution::ByIndex => self.check_header_by_index(header, &mut sink),
        }

        let outcome = sink.finish();
        debug!(
            uri = %self.uri,
            cells = header.len(),
            errors = outcome.errors.len(),
            "validated header"
        );
        outcome
    }

    /// Required fields must see their own name at their position. Other
    /// fields and surplus header cells are not checked.
    fn check_header_by_order<S: AsRef<str>>(&self, header: &[S], sink: &mut DiagnosticSink) {
        for (i, field) in self.fields.iter().enumerate() {
            if !field.is_required() {
                continue;
            }
            let cell = header.get(i).map(AsRef::as_ref);
            if !cell.is_some_and(|name| field.matches_name(name)) {
                sink.error(
                    Diagnostic::schema(DiagnosticKind::HeaderName, None, i + 1)
                        .with_content(cell),
                );
            }
        }
    }

    fn check_header_by_index<S: AsRef<str>>(&self, header: &[S], sink: &mut DiagnosticSink) {
        for (field, &column) in self.fields.iter().zip(self.resolver.columns()) {
            match header.get(column - 1).map(AsRef::as_ref) {
                None => {
                    sink.error(Diagnostic::schema(
                        DiagnosticKind::MissingValue,
                        None,
                        column,
                    ));
                }
                Some(name) if self.validate_header_name && !field.matches_name(name) => {
                    sink.error(
                        Diagnostic::schema(DiagnosticKind::HeaderName, None, column)
                            .with_content(Some(name)),
                    );
                }
                Some(_) => {}
            }
        }
    }

    /// Check a data row.
    ///
    /// Structural warnings come first, then each field's diagnostics in
    /// declaration order. Cells missing from the row are validated as empty
    /// strings.
    pub fn validate_row<S: AsRef<str>>(
        &self,
        values: &[S],
        row: Option<usize>,
    ) -> ValidationOutcome {
        let mut sink = DiagnosticSink::new();

        match self.resolution() {
            Resolution::ByOrder => self.check_columns_by_order(values.len(), row, &mut sink),
            Resolution::ByIndex => self.check_columns_by_index(values.len(), row, &mut sink),
        }

        for (field, &column) in self.fields.iter().zip(self.resolver.columns()) {
            let value = values.get(column - 1).map(AsRef::as_ref).unwrap_or("");
            sink.merge(field.validate(value, row, column));
        }

        let outcome = sink.finish();
        debug!(
            uri = %self.uri,
            ?row,
            cells = values.len(),
            errors = outcome.errors.len(),
            warnings = outcome.warnings.len(),
            "validated row"
        );
        outcome
    }

    fn check_columns_by_order(&self, len: usize, row: Option<usize>, sink: &mut DiagnosticSink) {
        let expected = self.fields.len();
        for column in (len + 1)..=expected {
            sink.warning(Diagnostic::schema(
                DiagnosticKind::MissingColumn,
                row,
                column,
            ));
        }
        for column in (expected + 1)..=len {
            sink.warning(Diagnostic::schema(
                DiagnosticKind::ExtraColumn,
                row,
                column,
            ));
        }
    }

    /// Surplus cells are not reported under index resolution.
    fn check_columns_by_index(&self, len: usize, row: Option<usize>, sink: &mut DiagnosticSink) {
        for &column in self.resolver.columns() {
            if column > len {
                sink.warning(Diagnostic::schema(
                    DiagnosticKind::MissingColumn,
                    row,
                    column,
                ));
            }
        }
    }
}
