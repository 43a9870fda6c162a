//! Fuzz target for the CSV tokenizer and file validator.
//!
//! Malformed input may produce an error but must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tableschema::{Constraints, Field, Parser, Schema, TableValidator};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let _ = Parser::new().parse_bytes(data);

    let schema = Schema::new(
        "fuzz",
        vec![
            Field::new("id", Constraints::new().required(true)).expect("valid"),
            Field::new("code", Constraints::new().pattern("^[A-Z]+$")).expect("valid"),
        ],
    );
    let _ = TableValidator::new(schema).validate_bytes(data);
});
