// Copyright 2025 the Interlude Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use interlude_selection::StagedSelection;

fn bench_toggle_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/toggle_churn");

    // Hypothesis: toggling is O(n) per call from the equality scan, so the
    // churn is O(n^2) overall. Fine at grid scale, worth watching beyond it.
    for len in [16usize, 128, 1_024] {
        let keys: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("select_all", len), &keys, |b, keys| {
            b.iter_batched(
                StagedSelection::<u32>::new,
                |mut sel| {
                    for key in keys {
                        sel.toggle(*key);
                    }
                    black_box(sel);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("select_then_deselect_all", len),
            &keys,
            |b, keys| {
                b.iter_batched(
                    StagedSelection::<u32>::new,
                    |mut sel| {
                        for key in keys {
                            sel.toggle(*key);
                        }
                        for key in keys {
                            sel.toggle(*key);
                        }
                        black_box(sel);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_retain_present(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/retain_present");

    // Half the universe vanishes; the selection spans all of it.
    for len in [128usize, 1_024, 8_192] {
        let mut sel = StagedSelection::new();
        for key in 0..(len as u32) {
            sel.toggle(key);
        }
        let universe: Vec<u32> = (0..(len as u32)).filter(|key| key % 2 == 0).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("scan", len),
            &(&sel, &universe),
            |b, (sel, universe)| {
                b.iter_batched(
                    || (*sel).clone(),
                    |mut sel| {
                        sel.retain_present(universe);
                        black_box(sel);
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hashed", len),
            &(&sel, &universe),
            |b, (sel, universe)| {
                b.iter_batched(
                    || (*sel).clone(),
                    |mut sel| {
                        sel.retain_present_hashed(universe);
                        black_box(sel);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_toggle_churn, bench_retain_present);
criterion_main!(benches);
