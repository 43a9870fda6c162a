//! Fuzz target for header and row matching.
//!
//! Checks that validation never panics and that a call passes exactly when
//! it produced no errors, for arbitrary schemas and rows.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tableschema::{Constraints, Field, Schema};

#[derive(Debug, Arbitrary)]
struct FieldInput {
    name: String,
    required: bool,
    index: Option<u8>,
    min_length: Option<u8>,
    max_length: Option<u8>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    fields: Vec<FieldInput>,
    uses_index: bool,
    check_names: bool,
    header: Vec<String>,
    row: Vec<String>,
}

fuzz_target!(|input: Input| {
    if input.fields.len() > 64 || input.row.len() > 256 {
        return;
    }

    let fields = input
        .fields
        .into_iter()
        .map(|f| {
            let mut c = Constraints::new().required(f.required);
            if let Some(i) = f.index {
                c = c.index(i as usize);
            }
            if let Some(min) = f.min_length {
                c = c.min_length(min as usize);
            }
            if let Some(max) = f.max_length {
                c = c.max_length(max as usize);
            }
            Field::new(f.name, c).expect("no pattern, always valid")
        })
        .collect();

    let schema = Schema::new("fuzz", fields)
        .uses_index(input.uses_index)
        .validate_header_name(input.check_names);

    let header = schema.validate_header(&input.header);
    assert_eq!(header.passed(), header.errors.is_empty());
    assert!(header.warnings.is_empty());

    let row = schema.validate_row(&input.row, Some(2));
    assert_eq!(row.passed(), row.errors.is_empty());
    assert!(row.errors.iter().chain(&row.warnings).all(|d| d.column >= 1));
});
