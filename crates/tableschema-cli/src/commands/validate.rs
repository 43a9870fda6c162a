//! Validate command - check a data file against a schema.

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use tableschema::{Diagnostic, ParserConfig, Schema, TableValidator};

pub fn run(
    file: PathBuf,
    schema_uri: String,
    delimiter: Option<u8>,
    no_header: bool,
    max_rows: Option<usize>,
    json_output: bool,
    verbose: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let schema = Schema::load_from_json_table(&schema_uri)?;

    let config = ParserConfig {
        delimiter,
        has_header: !no_header,
        max_rows,
        ..ParserConfig::default()
    };
    let report = TableValidator::with_config(schema, config).validate_file(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.passed());
    }

    println!(
        "{} {} {} {}",
        "Validating".cyan().bold(),
        file.display().to_string().white(),
        "against".cyan(),
        schema_uri.white()
    );

    if verbose {
        if let Some(source) = &report.source {
            println!(
                "  format: {}, {} bytes, {}",
                source.format, source.size_bytes, source.hash
            );
        }
    }

    println!();
    for error in &report.errors {
        print_diagnostic(Severity::Error, error);
    }
    for warning in &report.warnings {
        print_diagnostic(Severity::Warning, warning);
    }
    if !report.errors.is_empty() || !report.warnings.is_empty() {
        println!();
    }

    println!(
        "Checked {} rows: {} errors, {} warnings",
        report.rows_checked.to_string().white().bold(),
        report.errors.len().to_string().red(),
        report.warnings.len().to_string().yellow()
    );

    if report.passed() {
        println!("{}", "✓ Valid".green().bold());
    } else {
        println!("{}", "✗ Invalid".red().bold());
    }

    Ok(report.passed())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn tag(self) -> ColoredString {
        match self {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        }
    }
}

fn print_diagnostic(severity: Severity, diagnostic: &Diagnostic) {
    println!("  {:>8} {}", severity.tag(), diagnostic);
}
