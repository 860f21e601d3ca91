//! WLS fitting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M points)
//! - Broadcast scalar weight vs per-observation weights
//! - f32 vs f64 precision
//! - Builder output options (residuals, diagnostics, finite checks)
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;
use wls_rs::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy line with heteroscedastic noise and inverse-variance weights.
fn generate_line_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 1.0).unwrap();
    let x_dist = Uniform::new(0.0, 100.0).unwrap();

    let x: Vec<f64> = (0..size).map(|_| x_dist.sample(&mut rng)).collect();
    let scale: Vec<f64> = x.iter().map(|&xi| 0.5 + xi * 0.05).collect();
    let y: Vec<f64> = x
        .iter()
        .zip(&scale)
        .map(|(&xi, &s)| 3.0 + 0.7 * xi + s * noise_dist.sample(&mut rng))
        .collect();
    let w: Vec<f64> = scale.iter().map(|&s| 1.0 / (s * s)).collect();
    (y, x, w)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (y, x, w) = generate_line_data(size, 42);

        group.bench_with_input(BenchmarkId::new("weighted", size), &size, |b, _| {
            b.iter(|| fit_linear_regression(black_box(&y), black_box(&x), black_box(&w)).unwrap())
        });
    }
    group.finish();
}

fn bench_weight_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_kinds");
    group.sample_size(100);

    let size = 100_000;
    let (y, x, w) = generate_line_data(size, 7);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("scalar", |b| {
        b.iter(|| fit_linear_regression(black_box(&y), black_box(&x), black_box(1.0)).unwrap())
    });
    group.bench_function("sequence", |b| {
        b.iter(|| fit_linear_regression(black_box(&y), black_box(&x), black_box(&w)).unwrap())
    });
    group.finish();
}

fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");
    group.sample_size(100);

    let size = 100_000;
    let (y, x, w) = generate_line_data(size, 11);
    let y32: Vec<f32> = y.iter().map(|&v| v as f32).collect();
    let x32: Vec<f32> = x.iter().map(|&v| v as f32).collect();
    let w32: Vec<f32> = w.iter().map(|&v| v as f32).collect();

    group.bench_function("f64", |b| {
        b.iter(|| fit_linear_regression(black_box(&y), black_box(&x), black_box(&w)).unwrap())
    });
    group.bench_function("f32", |b| {
        b.iter(|| {
            fit_linear_regression(black_box(&y32), black_box(&x32), black_box(&w32)).unwrap()
        })
    });
    group.finish();
}

fn bench_builder_outputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder_outputs");
    group.sample_size(50);

    let size = 100_000;
    let (y, x, w) = generate_line_data(size, 3);

    let plain = Wls::new().build().unwrap();
    let full = Wls::new()
        .return_residuals()
        .return_diagnostics()
        .check_finite()
        .build()
        .unwrap();

    group.bench_function("plain", |b| {
        b.iter(|| plain.fit(black_box(&y), black_box(&x), black_box(&w)).unwrap())
    });
    group.bench_function("full", |b| {
        b.iter(|| full.fit(black_box(&y), black_box(&x), black_box(&w)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_weight_kinds,
    bench_precision,
    bench_builder_outputs,
);
criterion_main!(benches);
