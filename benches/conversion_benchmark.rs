// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Codec - format/parse round-trips at varying amount widths
// 2. Multiplier - integer-domain rate application
// 3. Approximators - chunked and leading-digit f64 conversion
//
// Cost should scale linearly with digit length; the digit-width axis below
// makes regressions in that scaling visible.
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::{BigInt, BigUint};
use token_units::prelude::*;

/// An amount with `digits` decimal digits, non-trivial digit pattern.
fn sample_amount(digits: u32) -> BigUint {
    let pattern = "987654321".repeat((digits as usize / 9) + 1);
    pattern[..digits as usize].parse().unwrap()
}

// ============================================================================
// Codec Benchmarks
// ============================================================================

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for digits in [9u32, 30, 60].iter() {
        let amount = sample_amount(*digits);
        let text = format_units(&amount, 18);

        group.bench_with_input(BenchmarkId::new("format", digits), &amount, |b, amount| {
            b.iter(|| black_box(format_units(black_box(amount), 18)))
        });

        group.bench_with_input(BenchmarkId::new("parse", digits), &text, |b, text| {
            b.iter(|| black_box(parse_units(black_box(text), 18)))
        });
    }

    group.finish();
}

// ============================================================================
// Multiplier Benchmarks
// ============================================================================

fn benchmark_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for digits in [9u32, 30, 60].iter() {
        let amount = sample_amount(*digits);

        group.bench_with_input(
            BenchmarkId::new("rate_18_decimals", digits),
            &amount,
            |b, amount| {
                b.iter(|| black_box(multiply(black_box(amount), "1.234567890123456789")))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("rate_whole", digits),
            &amount,
            |b, amount| b.iter(|| black_box(multiply(black_box(amount), "3"))),
        );
    }

    group.finish();
}

// ============================================================================
// Approximator Benchmarks
// ============================================================================

fn benchmark_approximators(c: &mut Criterion) {
    let mut group = c.benchmark_group("approximate");

    for digits in [9u32, 30, 60].iter() {
        let amount = sample_amount(*digits);
        let signed = BigInt::from(amount.clone());

        group.bench_with_input(
            BenchmarkId::new("with_factor", digits),
            &amount,
            |b, amount| {
                b.iter(|| black_box(approximate_with_factor(black_box(amount), 0.000123)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("magnitude", digits),
            &signed,
            |b, signed| b.iter(|| black_box(approximate_magnitude(black_box(signed)))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_codec,
    benchmark_multiply,
    benchmark_approximators
);
criterion_main!(benches);
