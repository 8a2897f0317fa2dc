//! Benchmarks for the cofactor kernel across ranks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matcalc::generator::{generate, GeneratorConfig};
use matcalc::{CofactorKernel, Matrix};

fn random_square(rank: usize) -> Matrix {
    generate(&GeneratorConfig::new(rank, rank).uniform(-1.0, 1.0).seed(rank as u64)).unwrap()
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");
    let kernel = CofactorKernel::default();

    // factorial growth, keep the top rank modest
    for rank in 3..=8 {
        let m = random_square(rank);
        group.bench_with_input(BenchmarkId::new("cofactor", rank), &m, |b, m| {
            b.iter(|| black_box(kernel.determinant(black_box(m)).unwrap()))
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let kernel = CofactorKernel::default();

    for rank in [2, 4, 6] {
        let m = random_square(rank);
        group.bench_with_input(BenchmarkId::new("cofactor", rank), &m, |b, m| {
            b.iter(|| black_box(kernel.inverse(black_box(m)).unwrap()))
        });
    }

    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let a = random_square(12);
    let b = random_square(12);

    c.bench_function("multiply_12x12", |bench| {
        bench.iter(|| black_box(a.multiply(black_box(&b)).unwrap()))
    });
}

criterion_group!(benches, bench_determinant, bench_inverse, bench_multiply);
criterion_main!(benches);
