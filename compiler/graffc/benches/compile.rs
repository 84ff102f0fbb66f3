//! Compilation benchmarks: tokenize, shunting-yard, arity check.
//!
//! Expressions are compiled once per edit, so this matters far less than
//! evaluation; it is here to catch pathological slowdowns on long input.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graff_compile::compile;

/// `x + sin(x) * 2 - ...` with `n` terms.
fn generate_terms(n: usize) -> String {
    (0..n)
        .map(|i| match i % 4 {
            0 => format!("{i}.5*x"),
            1 => "sin(x)^2".to_string(),
            2 => format!("sqrt(abs(x - {i}))"),
            _ => "-(x/3)".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

fn bench_compile_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/throughput");

    for terms in [1, 10, 100, 1000] {
        let source = generate_terms(terms);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(terms), &source, |b, src| {
            b.iter(|| compile(black_box(src), "x"));
        });
    }

    group.finish();
}

fn bench_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/nesting");

    for depth in [8, 64, 512] {
        let source = format!("{}x{}", "sin(".repeat(depth), ")".repeat(depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &source, |b, src| {
            b.iter(|| compile(black_box(src), "x"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile_throughput, bench_nesting);
criterion_main!(benches);
