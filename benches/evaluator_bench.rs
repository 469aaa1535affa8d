//! Benchmark for the evaluator's full-collection rewrite
//!
//! Compares the serial and rayon paths around the parallel threshold.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shadow_swarm::entity::Entity;
use shadow_swarm::soldiers::evaluator::evaluate_population;

fn population(count: usize) -> Vec<Entity> {
    (0..count)
        .map(|i| {
            Entity::new(
                format!("entity {i} with some payload words"),
                0.5 + (i % 10) as f64 * 0.1,
                "primary",
                (i % 7) as u32,
            )
        })
        .collect()
}

fn bench_evaluator(c: &mut Criterion) {
    let entities = population(1000);

    c.bench_function("evaluate_1000_serial", |b| {
        b.iter(|| evaluate_population(black_box(&entities), usize::MAX))
    });

    c.bench_function("evaluate_1000_parallel", |b| {
        b.iter(|| evaluate_population(black_box(&entities), 0))
    });
}

criterion_group!(benches, bench_evaluator);
criterion_main!(benches);
