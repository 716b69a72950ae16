//! Criterion benchmarks for rust_logger_hierarchy

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_logger_hierarchy::prelude::*;

// ============================================================================
// Lookup Benchmarks
// ============================================================================

fn bench_lookup_existing(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_existing");
    group.throughput(Throughput::Elements(1));

    let hierarchy = Hierarchy::new();
    for i in 0..1_000 {
        hierarchy
            .get_instance(&format!("app.module{}.component{}", i % 20, i))
            .unwrap();
    }

    group.bench_function("hit", |b| {
        b.iter(|| hierarchy.get_instance(black_box("app.module7.component507")))
    });

    group.bench_function("exists_miss", |b| {
        b.iter(|| hierarchy.exists(black_box("app.module7.absent")))
    });

    group.finish();
}

// ============================================================================
// Creation Benchmarks
// ============================================================================

fn bench_create_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_deep");

    for depth in [2usize, 6, 12] {
        let name = (0..depth)
            .map(|i| format!("seg{}", i))
            .collect::<Vec<_>>()
            .join(".");

        group.bench_with_input(BenchmarkId::new("leaf_first", depth), &name, |b, name| {
            b.iter(|| {
                let hierarchy = Hierarchy::new();
                hierarchy.get_instance(name).unwrap();
                black_box(hierarchy.provisioned_names().len())
            });
        });

        group.bench_with_input(BenchmarkId::new("root_first", depth), &name, |b, name| {
            b.iter(|| {
                let hierarchy = Hierarchy::new();
                let mut end = 0;
                for segment in name.split('.') {
                    end += segment.len();
                    hierarchy.get_instance(&name[..end]).unwrap();
                    end += 1;
                }
                black_box(hierarchy.current_loggers().len())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Level Resolution Benchmarks
// ============================================================================

fn bench_level_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_resolution");
    group.throughput(Throughput::Elements(1));

    let hierarchy = Hierarchy::new();
    let mut name = String::from("l0");
    for i in 1..10 {
        hierarchy.get_instance(&name).unwrap();
        name.push_str(&format!(".l{}", i));
    }
    let leaf = hierarchy.get_instance(&name).unwrap();

    group.bench_function("chained_level_depth_10", |b| {
        b.iter(|| black_box(leaf.chained_level()))
    });

    group.bench_function("is_enabled_for_disabled", |b| {
        hierarchy.disable_info();
        b.iter(|| black_box(leaf.is_enabled_for(LogLevel::Debug)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lookup_existing,
    bench_create_deep,
    bench_level_resolution
);
criterion_main!(benches);
