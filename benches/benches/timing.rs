// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use interlude_timing::TimerQueue;

fn bench_schedule_supersede(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/schedule");

    // Controllers in practice carry a handful of kinds; each schedule scans
    // for a same-kind entry to supersede.
    for kinds in [2usize, 8, 32] {
        group.throughput(Throughput::Elements(kinds as u64));

        group.bench_with_input(
            BenchmarkId::new("resupersede_all_kinds", kinds),
            &kinds,
            |b, &kinds| {
                b.iter_batched(
                    || {
                        let mut queue = TimerQueue::new();
                        for kind in 0..(kinds as u32) {
                            queue.schedule(kind, 1_000, kind, 0);
                        }
                        queue
                    },
                    |mut queue| {
                        for kind in 0..(kinds as u32) {
                            queue.schedule(kind, 2_000, kind, 100);
                        }
                        black_box(queue);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_drain_due(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/drain_due");

    for len in [4usize, 32, 256] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("all_due", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut queue = TimerQueue::new();
                    // Distinct kinds so nothing supersedes; staggered deadlines.
                    for kind in 0..(len as u32) {
                        queue.schedule(kind, u64::from(kind % 16), kind, 0);
                    }
                    queue
                },
                |mut queue| {
                    let fired: Vec<_> = queue.drain_due(1_000).collect();
                    black_box((queue, fired));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schedule_supersede, bench_drain_due);
criterion_main!(benches);
