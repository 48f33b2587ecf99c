//! Criterion benchmarks for the naive kernels.
//!
//! Sizes double at each step, so the sequential i-j-k group should show
//! roughly 8× time per step.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dense_matmul::{matmul_naive_ijk, matmul_naive_ijk_mt, matmul_naive_ikj};

type MatmulFn = fn(&[f64], &[f64], &mut [f64], usize);

const SIZES: &[usize] = &[64, 128, 256, 512];

fn make_inputs(n: usize) -> (Vec<f64>, Vec<f64>) {
    let a = (0..n * n).map(|i| (i / n) as f64).collect();
    let b = (0..n * n).map(|i| (i % n) as f64).collect();
    (a, b)
}

fn bench_variant(c: &mut Criterion, name: &str, func: MatmulFn) {
    let mut group = c.benchmark_group(name);
    for &n in SIZES {
        group.throughput(Throughput::Elements((n as u64).pow(3)));

        let (a, b) = make_inputs(n);
        let mut out = vec![0.0; n * n];

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| func(black_box(&a), black_box(&b), black_box(&mut out), n));
        });
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    bench_variant(c, "naive_ijk", matmul_naive_ijk);
    bench_variant(c, "naive_ikj", matmul_naive_ikj);
    bench_variant(c, "naive_ijk_mt4", |a, b, c, n| matmul_naive_ijk_mt(a, b, c, n, 4));
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
