//! Schema matching benchmarks.
//!
//! Measures header and row validation under both resolution strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tableschema::{Constraints, Field, Schema};

/// Sample rows, including ragged and invalid ones.
const ROWS: &[&[&str]] = &[
    &["1", "250000", "SW1A 1AA"],
    &["2", "", "M1 1AE"],
    &["3", "180000"],
    &["4", "99000", "nowhere", "extra"],
    &["", "1", "E1 6AN"],
];

fn houses(uses_index: bool) -> Schema {
    Schema::new(
        "bench",
        vec![
            Field::new("ID", Constraints::new().required(true).index(1)).unwrap(),
            Field::new(
                "Price",
                Constraints::new().min_length(1).max_length(9).index(2),
            )
            .unwrap(),
            Field::new(
                "Postcode",
                Constraints::new()
                    .pattern("[A-Z]{1,2}[0-9][0-9A-Z]? ?[0-9][A-Z]{2}")
                    .index(3),
            )
            .unwrap(),
        ],
    )
    .uses_index(uses_index)
}

/// Benchmark row validation.
fn bench_row_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_validation");

    for (label, uses_index) in [("by_order", false), ("by_index", true)] {
        let schema = houses(uses_index);

        group.bench_function(BenchmarkId::new("batch_5", label), |b| {
            b.iter(|| {
                for (i, row) in ROWS.iter().enumerate() {
                    black_box(schema.validate_row(*row, Some(i + 2)));
                }
            })
        });
    }

    group.finish();
}

/// Benchmark header validation.
fn bench_header_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_validation");
    let by_order = houses(false);
    let by_index = houses(true).validate_header_name(true);

    group.bench_function("by_order", |b| {
        b.iter(|| black_box(by_order.validate_header(&["id", "price", "postcode"])))
    });

    group.bench_function("by_index", |b| {
        b.iter(|| black_box(by_index.validate_header(&["id", "price", "postcode"])))
    });

    group.finish();
}

/// Benchmark validation with varying row widths.
fn bench_row_width_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_width_scaling");

    for width in [10, 50, 100, 500].iter() {
        let fields = (0..*width)
            .map(|i| {
                Field::new(format!("c{}", i), Constraints::new().max_length(4)).unwrap()
            })
            .collect();
        let schema = Schema::new("bench", fields);
        let row: Vec<String> = (0..*width).map(|i| i.to_string()).collect();

        group.bench_with_input(BenchmarkId::new("by_order", width), &row, |b, row| {
            b.iter(|| black_box(schema.validate_row(row, Some(2))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_row_validation,
    bench_header_validation,
    bench_row_width_scaling,
);
criterion_main!(benches);
