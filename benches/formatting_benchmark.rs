// ============================================================================
// Numeral Formatting Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Validation - The numeral validator on accepted and rejected input
// 2. Block Writing - The three-digit leaf renderer
// 3. Full Formatting - End-to-end format() across numeral lengths
// 4. Configured Writer - NumeralWriter with a no-op event handler
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use written_numerals::prelude::*;
use std::sync::Arc;

// ============================================================================
// Validation Benchmarks
// ============================================================================

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for input in ["1234567", "-0.002", "1e5", "05"] {
        group.bench_with_input(BenchmarkId::new("is_valid", input), &input, |b, input| {
            b.iter(|| black_box(is_valid(Some(*input))));
        });
    }

    group.finish();
}

// ============================================================================
// Block Writing Benchmarks
// ============================================================================

fn benchmark_write_block(c: &mut Criterion) {
    c.bench_function("write_block_three_digits", |b| {
        b.iter(|| black_box(write_block(black_box("123"), true, false)));
    });

    c.bench_function("block_partition_18_digits", |b| {
        b.iter(|| black_box(block_partition(black_box("123456789123456789"))));
    });
}

// ============================================================================
// Full Formatting Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    // Integer lengths up to the largest named magnitude
    for digits in [3usize, 18, 60, 126].iter() {
        let input = "7".repeat(*digits);
        group.bench_with_input(BenchmarkId::new("integer", digits), &input, |b, input| {
            b.iter(|| black_box(format(Some(input.as_str()))));
        });
    }

    let fractional = "123456789123456789.123456789123456789".to_string();
    group.bench_with_input(
        BenchmarkId::new("fractional", fractional.len()),
        &fractional,
        |b, input| {
            b.iter(|| black_box(format(Some(input.as_str()))));
        },
    );

    group.finish();
}

// ============================================================================
// Configured Writer Benchmarks
// ============================================================================

fn benchmark_writer(c: &mut Criterion) {
    let writer = NumeralWriterBuilder::new()
        .build(Arc::new(NoOpEventHandler))
        .unwrap();

    c.bench_function("writer_u64_max", |b| {
        b.iter(|| black_box(writer.write(black_box(u64::MAX))));
    });
}

criterion_group!(
    benches,
    benchmark_validation,
    benchmark_write_block,
    benchmark_format,
    benchmark_writer,
);
criterion_main!(benches);
