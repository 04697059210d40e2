// benches/benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathkit::calculus::integrate;
use mathkit::combinatorics::pascals_triangle;
use mathkit::number_theory::prime_factors;
use num::BigInt;

fn bench_prime_factors(c: &mut Criterion) {
    let n = BigInt::from(600851475143u64);
    c.bench_function("prime_factors 600851475143", |b| {
        b.iter(|| prime_factors(black_box(&n)).unwrap())
    });
}

fn bench_pascals_triangle(c: &mut Criterion) {
    c.bench_function("pascals_triangle 64 rows", |b| {
        b.iter(|| pascals_triangle(black_box(64)))
    });
}

fn bench_integrate(c: &mut Criterion) {
    c.bench_function("integrate gaussian dx=1e-3", |b| {
        b.iter(|| integrate(|x| (-x * x).exp(), -10.0, 10.0, black_box(1e-3)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_prime_factors,
    bench_pascals_triangle,
    bench_integrate
);
criterion_main!(benches);
