// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use growbuf::GrowBuffer;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench grow_buffer
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs GrowBuffer: push
// =============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowBuffer", size), &size, |b, &s| {
            b.iter(|| {
                let mut buffer = GrowBuffer::new();
                for i in 0..s {
                    buffer.push(i as u32).expect("Failed to push()");
                }
                black_box(buffer)
            });
        });
    }

    group.finish();
}

fn bench_push_preallocated(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_preallocated");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::with_capacity(s);
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowBuffer", size), &size, |b, &s| {
            b.iter(|| {
                let mut buffer = GrowBuffer::new();
                buffer.reserve(s).expect("Failed to reserve()");
                for i in 0..s {
                    buffer.push(i as u32).expect("Failed to push()");
                }
                black_box(buffer)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs GrowBuffer: construction with fill
// =============================================================================

fn bench_filled(c: &mut Criterion) {
    let mut group = c.benchmark_group("filled");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("vec_macro", size), &size, |b, &s| {
            b.iter(|| black_box(vec![42u32; s]));
        });

        group.bench_with_input(BenchmarkId::new("GrowBuffer", size), &size, |b, &s| {
            b.iter(|| black_box(GrowBuffer::filled(s, 42u32).expect("Failed to filled()")));
        });
    }

    group.finish();
}

// =============================================================================
// Preserving vs non-preserving resize
// =============================================================================

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    configure_group(&mut group);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("preserving", size), &size, |b, &s| {
            b.iter_batched(
                || GrowBuffer::filled(s / 2, 1u32).expect("Failed to filled()"),
                |mut buffer| {
                    buffer.resize(s).expect("Failed to resize()");
                    black_box(buffer)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("non_preserving", size), &size, |b, &s| {
            b.iter_batched(
                || GrowBuffer::filled(s / 2, 1u32).expect("Failed to filled()"),
                |mut buffer| {
                    buffer.resize_discard(s).expect("Failed to resize_discard()");
                    black_box(buffer)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    grow_buffer_benches,
    bench_push,
    bench_push_preallocated,
    bench_filled,
    bench_resize
);

criterion_main!(grow_buffer_benches);
