//! Error types for the tableschema library.
//!
//! Data-shape problems (short rows, bad values, renamed headers) are never
//! errors here; they are reported as [`Diagnostic`](crate::Diagnostic)s.
//! These types cover schema construction, IO and CSV tokenizing only.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tableschema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field's `pattern` constraint is not a valid regex.
    #[error("Invalid pattern for field '{field}': {source}")]
    Regex {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// The schema document is structurally unusable.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

/// Failure to obtain a schema from a URI.
///
/// Fetch failures (transport, HTTP status, file IO) are kept apart from
/// parse failures (malformed JSON, invalid field definitions).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document could not be retrieved.
    #[error("Failed to fetch schema '{uri}': {message}")]
    Fetch { uri: String, message: String },

    /// The document was retrieved but could not be turned into a schema.
    #[error("Failed to parse schema '{uri}': {source}")]
    Parse {
        uri: String,
        #[source]
        source: SchemaError,
    },
}

impl LoadError {
    /// The URI the load was attempted for.
    pub fn uri(&self) -> &str {
        match self {
            LoadError::Fetch { uri, .. } | LoadError::Parse { uri, .. } => uri,
        }
    }
}

/// Result type alias for tableschema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
