// ============================================================================
// Numeral Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Codec - Encoding and decoding across the whole numeral range
// 2. Conversion - Tagged dispatch from native kinds into Numeral
// 3. Summation - Generic sum over Numeral vs native integers and decimals
// 4. Parallel Summation - Partitioned sum at different partition counts
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numeral_math::numeric::codec;
use numeral_math::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

// ============================================================================
// Codec Benchmarks
// ============================================================================

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let texts: Vec<String> = (Numeral::MIN_VALUE..=Numeral::MAX_VALUE)
        .map(|m| Numeral::new(m).format().unwrap())
        .collect();

    group.bench_function("encode_full_range", |b| {
        b.iter(|| {
            for m in Numeral::MIN_VALUE..=Numeral::MAX_VALUE {
                black_box(codec::encode(black_box(m)).unwrap());
            }
        });
    });

    group.bench_function("decode_full_range", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(codec::decode(black_box(text)).unwrap());
            }
        });
    });

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_numeral");

    group.bench_function("from_i64", |b| {
        b.iter(|| Numeral::create(black_box(1994_i64)));
    });

    group.bench_function("from_f64", |b| {
        b.iter(|| Numeral::create(black_box(1994.5_f64)));
    });

    group.bench_function("from_decimal", |b| {
        let d = Decimal::new(19945, 1);
        b.iter(|| Numeral::create(black_box(d)));
    });

    group.finish();
}

// ============================================================================
// Summation Benchmarks
// ============================================================================

fn benchmark_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("generic_sum");

    for len in [10, 100, 1000].iter() {
        let numerals = vec![Numeral::ONE; *len];
        let ints = vec![1_i32; *len];
        let decimals = vec![Decimal::ONE; *len];

        group.bench_with_input(BenchmarkId::new("Numeral", len), &numerals, |b, v| {
            b.iter(|| black_box(sum(v.iter().copied())))
        });
        group.bench_with_input(BenchmarkId::new("i32", len), &ints, |b, v| {
            b.iter(|| black_box(sum(v.iter().copied())))
        });
        group.bench_with_input(BenchmarkId::new("Decimal", len), &decimals, |b, v| {
            b.iter(|| black_box(sum(v.iter().copied())))
        });
    }

    group.finish();
}

fn benchmark_parallel_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_sum");
    let values: Vec<i64> = (1..=1_000_000).collect();

    for partitions in [1, 2, 4, 8].iter() {
        let config = SummationConfig::new(*partitions, 1);
        group.bench_with_input(
            BenchmarkId::from_parameter(partitions),
            &config,
            |b, config| b.iter(|| black_box(parallel_sum(&values, config))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_codec,
    benchmark_conversion,
    benchmark_sum,
    benchmark_parallel_sum,
);
criterion_main!(benches);
