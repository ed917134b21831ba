//! Tree builder benchmarks.
//!
//! Run with: `cargo bench --package fleet-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fleet_par::parse;

fn bench_builder_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder");

    group.bench_function("flat_arithmetic", |b| {
        b.iter(|| parse(black_box("1 + 2 * 3 ^ 4 - 5 / 6")).unwrap())
    });

    group.bench_function("application_chain", |b| {
        b.iter(|| parse(black_box("f a b c d e g h i j k")).unwrap())
    });

    group.bench_function("nested_groups", |b| {
        b.iter(|| parse(black_box("((((((((1 + 2))))))))")).unwrap())
    });

    group.finish();
}

fn bench_builder_long_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_long");

    let source: String = (0..300).map(|i| format!("{} * ", i)).collect::<String>() + "1";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("operator_chain", |b| {
        b.iter(|| parse(black_box(&source)).unwrap())
    });

    let lines: String = (0..200)
        .map(|i| format!("x{} = {}\n", i, i))
        .collect();
    group.bench_function("many_lines", |b| {
        b.iter(|| parse(black_box(&lines)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_builder_shapes, bench_builder_long_input);
criterion_main!(benches);
