//! End-to-end tests: schema documents and CSV files on disk.

use std::io::Write;
use tempfile::NamedTempFile;

use tableschema::{DiagnosticKind, LoadError, ParserConfig, Schema, TableValidator};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const HOUSES_SCHEMA: &str = r#"{
    "title": "Houses",
    "fields": [
        { "name": "ID", "constraints": { "required": true } },
        { "name": "Price", "constraints": { "required": true, "minLength": 1 } },
        { "name": "Postcode", "constraints": { "required": true, "pattern": "[A-Z]{1,2}[0-9][0-9A-Z]? ?[0-9][A-Z]{2}" } }
    ]
}"#;

fn houses_schema() -> (NamedTempFile, Schema) {
    let file = create_test_file(HOUSES_SCHEMA);
    let uri = file.path().to_string_lossy().into_owned();
    let schema = Schema::load_from_json_table(&uri).expect("schema loads");
    (file, schema)
}

// =============================================================================
// File validation
// =============================================================================

#[test]
fn test_valid_file_passes() {
    let (_schema_file, schema) = houses_schema();
    let data = create_test_file("ID,Price,Postcode\n1,250000,SW1A 1AA\n2,180000,M1 1AE\n");

    let report = TableValidator::new(schema)
        .validate_file(data.path())
        .expect("validation runs");

    assert!(report.passed());
    assert_eq!(report.rows_checked, 2);
    assert!(report.warnings.is_empty());

    let source = report.source.expect("file metadata");
    assert_eq!(source.format, "csv");
    assert!(source.hash.starts_with("sha256:"));
}

#[test]
fn test_invalid_values_reported_per_row() {
    let (_schema_file, schema) = houses_schema();
    let data = create_test_file("ID,Price,Postcode\n1,,SW1A 1AA\n2,100,nowhere\n");

    let report = TableValidator::new(schema)
        .validate_file(data.path())
        .expect("validation runs");

    assert!(!report.passed());
    let found: Vec<_> = report
        .errors
        .iter()
        .map(|e| (e.kind, e.row, e.column))
        .collect();
    assert_eq!(
        found,
        vec![
            (DiagnosticKind::MissingValue, Some(2), 2),
            (DiagnosticKind::MinLength, Some(2), 2),
            (DiagnosticKind::Pattern, Some(3), 3),
        ]
    );
    assert_eq!(report.errors[2].content.as_deref(), Some("nowhere"));
}

#[test]
fn test_renamed_header_fails() {
    let (_schema_file, schema) = houses_schema();
    let data = create_test_file("id,Cost,Postcode\n1,5,SW1A 1AA\n");

    let report = TableValidator::new(schema)
        .validate_file(data.path())
        .expect("validation runs");

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, DiagnosticKind::HeaderName);
    assert_eq!(report.errors[0].column, 2);
    assert_eq!(report.errors[0].content.as_deref(), Some("Cost"));
}

#[test]
fn test_tab_separated_with_explicit_delimiter() {
    let (_schema_file, schema) = houses_schema();
    let data = create_test_file("ID\tPrice\tPostcode\n1\t9\tE1 6AN\n");

    let config = ParserConfig {
        delimiter: Some(b'\t'),
        ..ParserConfig::default()
    };
    let report = TableValidator::with_config(schema, config)
        .validate_file(data.path())
        .expect("validation runs");

    assert!(report.passed());
    assert_eq!(report.source.map(|s| s.format), Some("tsv".to_string()));
}

#[test]
fn test_index_schema_against_reordered_file() {
    let schema_file = create_test_file(
        r#"{
            "uses_index": true,
            "validate_header_name": true,
            "fields": [
                { "name": "Postcode", "constraints": { "index": 3, "required": true } },
                { "name": "ID", "constraints": { "index": 1 } }
            ]
        }"#,
    );
    let uri = schema_file.path().to_string_lossy().into_owned();
    let schema = Schema::load_from_json_table(&uri).expect("schema loads");
    let data = create_test_file("ID,Notes\n1,n/a,E1 6AN\n2,none\n");

    let report = TableValidator::new(schema)
        .validate_file(data.path())
        .expect("validation runs");

    // Header has no third cell, and row 3 has no postcode.
    let errors: Vec<_> = report.errors.iter().map(|e| (e.kind, e.row)).collect();
    assert_eq!(
        errors,
        vec![
            (DiagnosticKind::MissingValue, None),
            (DiagnosticKind::MissingValue, Some(3)),
        ]
    );
    let warnings: Vec<_> = report
        .warnings
        .iter()
        .map(|w| (w.kind, w.row, w.column))
        .collect();
    assert_eq!(warnings, vec![(DiagnosticKind::MissingColumn, Some(3), 3)]);
}

#[test]
fn test_missing_data_file_is_error() {
    let (_schema_file, schema) = houses_schema();
    let result = TableValidator::new(schema).validate_file("/no/such/file.csv");
    assert!(result.is_err());
}

// =============================================================================
// Schema loading
// =============================================================================

#[test]
fn test_load_rejects_invalid_field() {
    let file = create_test_file(r#"{ "fields": [ { "constraints": {} } ] }"#);
    let uri = file.path().to_string_lossy().into_owned();

    let err = Schema::load_from_json_table(&uri).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(Schema::load_or_none(&uri).is_none());
}
