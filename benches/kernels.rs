//! Dispatched 4-wide kernels against the scalar path and ndarray.
//!
//! Every kernel is timed twice: once with the dispatch ceiling forced to
//! `none` (the portable reference) and once at the detected level. The 4×4
//! product is also compared with `ndarray`'s general `dot` on the same data.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use linmath::simd::{self, CapabilityLevel};
use linmath::{Mat4, Vec4};

// ================================================================================================
// TEST DATA GENERATION
// ================================================================================================

/// Fixed seed so runs are comparable over time.
const SEED: u64 = 0x5EED;

fn random_mat4(rng: &mut StdRng) -> Mat4 {
    Mat4::from_fn(|_, _| rng.random_range(-1.0..1.0))
}

fn random_vec4(rng: &mut StdRng) -> Vec4 {
    Vec4::from_fn(|_| rng.random_range(-1.0..1.0))
}

fn to_ndarray(m: &Mat4) -> Array2<f32> {
    Array2::from_shape_fn((4, 4), |(r, c)| m[c][r])
}

/// Ceilings worth timing on this host, lowest first.
fn levels() -> Vec<CapabilityLevel> {
    let best = simd::detected();
    if best == CapabilityLevel::None {
        vec![CapabilityLevel::None]
    } else {
        vec![CapabilityLevel::None, best]
    }
}

// ================================================================================================
// BENCHMARKS
// ================================================================================================

fn bench_dot4(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let (a, b) = (random_vec4(&mut rng), random_vec4(&mut rng));

    let mut group = c.benchmark_group("dot4");
    for level in levels() {
        let _guard = simd::override_ceiling(level);
        group.bench_with_input(BenchmarkId::new("linmath", level), &level, |bencher, _| {
            bencher.iter(|| simd::dot4(black_box(&a), black_box(&b)));
        });
    }
    group.finish();
}

fn bench_mat4_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let (a, b) = (random_mat4(&mut rng), random_mat4(&mut rng));

    let mut group = c.benchmark_group("mat4_mul");
    for level in levels() {
        let _guard = simd::override_ceiling(level);
        group.bench_with_input(BenchmarkId::new("linmath", level), &level, |bencher, _| {
            bencher.iter(|| simd::mat4_mul(black_box(&a), black_box(&b)));
        });
    }

    let (a_nd, b_nd) = (to_ndarray(&a), to_ndarray(&b));
    group.bench_function("ndarray_dot", |bencher| {
        bencher.iter(|| black_box(a_nd.dot(&b_nd)));
    });
    group.finish();
}

fn bench_mat4_mul_vec4(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let (m, v) = (random_mat4(&mut rng), random_vec4(&mut rng));

    let mut group = c.benchmark_group("mat4_mul_vec4");
    for level in levels() {
        let _guard = simd::override_ceiling(level);
        group.bench_with_input(BenchmarkId::new("linmath", level), &level, |bencher, _| {
            bencher.iter(|| simd::mat4_mul_vec4(black_box(&m), black_box(&v)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dot4, bench_mat4_mul, bench_mat4_mul_vec4);
criterion_main!(benches);
