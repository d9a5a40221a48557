// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_limit::debounce_with_args;
use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::sleep;

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_burst");
    let bursts = [1_u64, 100, 10_000];

    for &burst in &bursts {
        group.throughput(Throughput::Elements(burst));
        group.bench_with_input(BenchmarkId::from_parameter(burst), &burst, |bencher, &burst| {
            bencher.iter(|| {
                let rt = Builder::new_current_thread()
                    .enable_time()
                    .start_paused(true)
                    .build()
                    .unwrap();

                rt.block_on(async {
                    let debounced =
                        debounce_with_args(sink, Duration::from_millis(50)).unwrap();

                    for n in 0..burst {
                        debounced.call(n);
                    }

                    // Let the single trailing call fire
                    sleep(Duration::from_millis(60)).await;
                });
            });
        });
    }

    group.finish();
}

fn sink(n: u64) {
    black_box(n);
}
