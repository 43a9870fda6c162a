//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tableschema: check CSV files against a column schema
#[derive(Parser)]
#[command(name = "tableschema")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. "warn" or "tableschema=trace"
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a data file against a schema
    Validate {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Schema document: a path, file:// URI or http(s) URL
        #[arg(short, long, value_name = "URI")]
        schema: String,

        /// Field delimiter (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<Delimiter>,

        /// The file has no header row
        #[arg(long)]
        no_header: bool,

        /// Maximum data rows to check
        #[arg(long)]
        max_rows: Option<usize>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a schema maps fields to columns
    Inspect {
        /// Schema document: a path, file:// URI or http(s) URL
        #[arg(short, long, value_name = "URI")]
        schema: String,
    },
}

/// A single-byte field delimiter.
#[derive(Clone, Copy, Debug)]
pub struct Delimiter(pub u8);

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" | "\\t" | "\t" => Ok(Delimiter(b'\t')),
            "comma" | "," => Ok(Delimiter(b',')),
            "semicolon" | ";" => Ok(Delimiter(b';')),
            "pipe" | "|" => Ok(Delimiter(b'|')),
            _ if s.len() == 1 && s.is_ascii() => Ok(Delimiter(s.as_bytes()[0])),
            _ => Err(format!(
                "Unknown delimiter: {}. Use a single ASCII character, tab, comma, semicolon, or pipe.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            b'\t' => write!(f, "tab"),
            b => write!(f, "{}", b as char),
        }
    }
}
