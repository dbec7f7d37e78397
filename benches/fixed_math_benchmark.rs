// ============================================================================
// Fixed-Point Math Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Scalar Core - Multiply, reciprocal-based divide, conversions
// 2. Transcendentals - Primitive kernels and derived identities
// 3. Vector Geometry - Magnitudes, normalization, ground-plane distances
// 4. Simulation Step - A representative per-tick workload
//
// The arithmetic path is branch-light integer math; these benchmarks exist
// to catch regressions when kernels or reduction steps change, not to chase
// absolute throughput numbers.
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lockstep_math::prelude::*;
use std::hint::black_box;

// ============================================================================
// Scalar Core Benchmarks
// ============================================================================

fn benchmark_scalar_core(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_core");

    let a = Fixed::from_decimal(1234.5678, 4).unwrap();
    let b = Fixed::from_decimal(-97.531, 3).unwrap();

    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)));
    });

    group.bench_function("reciprocal", |bench| {
        bench.iter(|| black_box(black_box(b).recip()));
    });

    group.bench_function("divide", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)));
    });

    group.bench_function("from_decimal", |bench| {
        bench.iter(|| black_box(Fixed::from_decimal(black_box(1234.5678), 4)));
    });

    group.finish();
}

// ============================================================================
// Transcendental Benchmarks
// ============================================================================

fn benchmark_transcendentals(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcendentals");

    let angle = Fixed::from_decimal(2.5, 1).unwrap();
    let value = Fixed::from_decimal(17.25, 2).unwrap();

    group.bench_function("sin", |bench| {
        bench.iter(|| black_box(black_box(angle).sin()));
    });

    group.bench_function("atan", |bench| {
        bench.iter(|| black_box(black_box(value).atan()));
    });

    group.bench_function("exp", |bench| {
        bench.iter(|| black_box(black_box(angle).exp()));
    });

    group.bench_function("ln", |bench| {
        bench.iter(|| black_box(black_box(value).ln()));
    });

    group.bench_function("sqrt", |bench| {
        bench.iter(|| black_box(black_box(value).sqrt()));
    });

    group.bench_function("pow", |bench| {
        bench.iter(|| black_box(black_box(value).pow(black_box(angle))));
    });

    group.finish();
}

// ============================================================================
// Vector Geometry Benchmarks
// ============================================================================

fn benchmark_vector_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_geometry");

    let a3 = FixedVec3::from_int(123, 45, -678);
    let b3 = FixedVec3::from_int(-90, 12, 345);
    let a2 = FixedVec2::from_int(321, 654);

    group.bench_function("vec3_dot", |bench| {
        bench.iter(|| black_box(black_box(a3).dot(black_box(b3))));
    });

    group.bench_function("vec3_cross", |bench| {
        bench.iter(|| black_box(black_box(a3).cross(black_box(b3))));
    });

    group.bench_function("vec3_magnitude", |bench| {
        bench.iter(|| black_box(black_box(a3).magnitude()));
    });

    group.bench_function("vec3_normalize", |bench| {
        bench.iter(|| black_box(black_box(a3).normalize()));
    });

    group.bench_function("vec2_magnitude", |bench| {
        bench.iter(|| black_box(black_box(a2).magnitude()));
    });

    group.bench_function("ground_plane_distance", |bench| {
        bench.iter(|| black_box(black_box(a3).vec2_distance(black_box(b3))));
    });

    group.finish();
}

// ============================================================================
// Simulation Step Benchmarks
// A coarse model of one tick: integrate positions, check separations
// ============================================================================

fn benchmark_simulation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");

    for num_units in [16, 64, 256].iter() {
        let units: Vec<FixedVec3> = (0..*num_units)
            .map(|i| FixedVec3::from_int(i * 3, 0, 100 - i))
            .collect();
        let velocity = FixedVec2::from_int(1, -2);
        let dt = Fixed::from_decimal(0.05, 2).unwrap();

        group.bench_with_input(
            BenchmarkId::new("integrate_and_separate", num_units),
            &units,
            |bench, units| {
                bench.iter(|| {
                    let mut total = Fixed::ZERO;
                    let mut moved = units.clone();
                    for unit in &mut moved {
                        unit.add_vec2(velocity * dt);
                    }
                    for pair in moved.windows(2) {
                        total = total + pair[0].vec2_distance(pair[1]);
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scalar_core,
    benchmark_transcendentals,
    benchmark_vector_geometry,
    benchmark_simulation_step
);
criterion_main!(benches);
