//! tableschema: match tabular rows against a declarative column schema.
//!
//! A [`Schema`] is an ordered list of [`Field`]s, each with a name and a
//! set of [`Constraints`]. Fields are matched to row columns either by
//! declaration order or by an explicit `index` constraint. Every call to
//! [`Schema::validate_header`] or [`Schema::validate_row`] returns its own
//! [`ValidationOutcome`]; nothing accumulates on the schema.
//!
//! # Example
//!
//! ```
//! use tableschema::{Constraints, DiagnosticKind, Field, Schema};
//!
//! let schema = Schema::new(
//!     "http://example.org/houses.json",
//!     vec![
//!         Field::new("id", Constraints::new().required(true)).unwrap(),
//!         Field::new("postcode", Constraints::new().max_length(8)).unwrap(),
//!     ],
//! );
//!
//! assert!(schema.validate_header(&["ID", "postcode"]).passed());
//!
//! let outcome = schema.validate_row(&["", "SW1A 1AA", "extra"], Some(2));
//! assert!(!outcome.passed());
//! assert_eq!(outcome.errors[0].kind, DiagnosticKind::MissingValue);
//! assert_eq!(outcome.warnings[0].kind, DiagnosticKind::ExtraColumn);
//! ```

pub mod error;
pub mod input;
pub mod schema;
pub mod validation;

pub use error::{LoadError, Result, SchemaError};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use schema::{ColumnResolver, Constraints, Field, Resolution, Schema, SchemaDocument};
pub use validation::{
    Category, Diagnostic, DiagnosticKind, FileReport, TableValidator, ValidationOutcome,
};
