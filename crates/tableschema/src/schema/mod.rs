//! Schema definitions and the column matching engine.

mod constraints;
mod field;
mod loader;
mod resolver;
mod table;

pub use constraints::Constraints;
pub use field::Field;
pub use loader::{FieldDocument, SchemaDocument};
pub use resolver::{ColumnResolver, Resolution};
pub use table::Schema;
