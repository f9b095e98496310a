use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion};
use ono::types::{JoinFormatter, MessageFormatter, PrintfFormatter};
use serde_json::{json, Value};
use std::hint::black_box;

/// Benchmarks for printf-style template rendering
pub fn bench_printf(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/printf");

    let plain: [Value; 0] = [];
    let mixed = [json!("alice"), json!(42), json!({ "role": "admin" }), json!(1.5)];

    group.bench_function("verbatim", |b| {
        b.iter(|| black_box(PrintfFormatter.format(black_box("user not found"), &plain)))
    });

    group.bench_function("mixed_placeholders", |b| {
        b.iter(|| {
            black_box(PrintfFormatter.format(black_box("user %s (id %d) has %j, score %f"), &mixed))
        })
    });

    group.bench_function("leftover_arguments", |b| {
        b.iter(|| black_box(PrintfFormatter.format(black_box("user"), &mixed)))
    });

    group.finish();
}

/// Benchmarks for the join formatter as the argument count grows
pub fn bench_join_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/join_scaling");

    for count in [1usize, 4, 16, 64] {
        let args: Vec<Value> = (0..count).map(|i| json!(i)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &args, |b, args| {
            b.iter(|| black_box(JoinFormatter.format(black_box("values:"), args)))
        });
    }

    group.finish();
}

criterion_group! {
    name = formatting_benches;
    config = configure_criterion();
    targets =
        bench_printf,
        bench_join_scaling,
}
