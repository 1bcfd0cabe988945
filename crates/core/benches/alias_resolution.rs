//! Benchmarks for the alias resolution hot path.
//!
//! Resolution runs once per symbol load, so it has to stay cheap even when
//! a root accumulates many nested aliases.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use loam_core::AliasRegistry;

fn registry_with_nested(nested: usize) -> AliasRegistry {
    let mut registry = AliasRegistry::empty();
    registry.register("@app", "/srv/app").unwrap();
    for i in 0..nested {
        registry
            .register(&format!("@app/ext{i}"), &format!("/srv/ext/{i}"))
            .unwrap();
    }
    registry
}

fn benchmark_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_resolution");

    for nested in [0usize, 4, 16, 64].iter() {
        let registry = registry_with_nested(*nested);
        group.bench_with_input(
            BenchmarkId::new("nested_entries", nested),
            nested,
            |b, _| b.iter(|| registry.try_resolve(black_box("@app/views/site/index.yaml"))),
        );
    }
    group.finish();

    let registry = registry_with_nested(16);
    c.bench_function("passthrough", |b| {
        b.iter(|| registry.try_resolve(black_box("views/site/index.yaml")))
    });
    c.bench_function("root_alias_of", |b| {
        b.iter(|| registry.root_alias_of(black_box("@app/ext7/chart.yaml")))
    });
}

criterion_group!(benches, benchmark_resolution);
criterion_main!(benches);
