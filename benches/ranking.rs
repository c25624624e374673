//! Benchmarks for both ranking engines

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagerank::{iterate_rank, quiet_logger, sample_rank, LinkGraph};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// `size` pages, each linking to the next four; every tenth page is a sink
fn ring(size: usize) -> LinkGraph {
    let pages: Vec<(String, Vec<String>)> = (0..size)
        .map(|i| {
            let links = if i % 10 == 9 {
                vec![]
            } else {
                (1..5).map(|k| format!("{}", (i + k) % size)).collect()
            };
            (format!("{}", i), links)
        })
        .collect();
    LinkGraph::new(pages).unwrap()
}

fn benchmark_iterate(c: &mut Criterion) {
    let log = quiet_logger();
    let mut group = c.benchmark_group("iterate_rank");
    for &size in &[10usize, 100, 1000] {
        let graph = ring(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, g| {
            b.iter(|| iterate_rank(black_box(g), 0.85, 0.001, 1000, &log).unwrap())
        });
    }
    group.finish();
}

fn benchmark_sample(c: &mut Criterion) {
    let log = quiet_logger();
    let mut group = c.benchmark_group("sample_rank");
    for &size in &[10usize, 100] {
        let graph = ring(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, g| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| sample_rank(black_box(g), 0.85, 10_000, &mut rng, &log).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_iterate, benchmark_sample);
criterion_main!(benches);
