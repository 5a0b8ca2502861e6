use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_distr::Normal;

use binstats::{Histogram, PairedAggregator};

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn edges(count: usize) -> Vec<f64> {
    (0..count).map(|i| -4.0 + 8.0 * i as f64 / count as f64).collect()
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("Histogram");
    let data = generate_normal_data(100_000, 0.0, 1.0, 42);
    group.throughput(Throughput::Elements(data.len() as u64));

    for bins in [8, 64, 1024] {
        let edges = edges(bins);
        group.bench_with_input(BenchmarkId::new("add_data", bins), &edges, |b, edges| {
            b.iter(|| {
                let mut hist = Histogram::with_bins(edges).unwrap();
                hist.add_data(black_box(&data)).unwrap();
                black_box(hist.total())
            })
        });
    }
    group.finish();
}

fn bench_aggregator(c: &mut Criterion) {
    let mut group = c.benchmark_group("PairedAggregator");
    let xs = generate_normal_data(100_000, 0.0, 1.0, 7);
    let ys = generate_normal_data(100_000, 50.0, 5.0, 8);
    let pairs: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();
    group.throughput(Throughput::Elements(pairs.len() as u64));

    for bins in [8, 64, 1024] {
        let edges = edges(bins);
        group.bench_with_input(BenchmarkId::new("add_data", bins), &edges, |b, edges| {
            b.iter(|| {
                let mut agg = PairedAggregator::with_bins(edges).unwrap();
                agg.add_data(black_box(&pairs)).unwrap();
                black_box(agg.total())
            })
        });
    }

    let edges = edges(1024);
    let exported = PairedAggregator::from_data(&edges, &pairs).unwrap().result();
    group.bench_function("preload_1024", |b| {
        b.iter(|| {
            let mut agg = PairedAggregator::default();
            agg.preload(black_box(&exported)).unwrap();
            black_box(agg.total())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_histogram, bench_aggregator);
criterion_main!(benches);
