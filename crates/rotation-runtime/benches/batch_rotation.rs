// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks: sequential vs parallel batch rotation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rotation_runtime::{ExecutionMode, PointGenerator, Rotator, DEFAULT_BOUND};

fn bench_batch_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_rotation");
    let sequential = Rotator::new(37.5f32, ExecutionMode::Sequential).unwrap();
    let parallel = Rotator::new(37.5f32, ExecutionMode::Parallel { threads: 4 }).unwrap();

    for n in [1_000usize, 100_000] {
        let points = PointGenerator::new(Some(1)).generate(n, DEFAULT_BOUND).unwrap();
        group.bench_with_input(BenchmarkId::new("sequential", n), &points, |b, p| {
            b.iter(|| sequential.rotate(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("parallel_x4", n), &points, |b, p| {
            b.iter(|| parallel.rotate(black_box(p)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_batch_rotation);
criterion_main!(benches);
