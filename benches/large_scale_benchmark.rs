use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use dsasort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Strings");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60)); // Cloning 1M strings dominates setup

    let mut rng = rand::rng();
    let count = 1_000_000;

    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(8..24);
            (0..len).map(|_| rng.random_range('a'..='z')).collect()
        })
        .collect();

    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("merge_sort", |b| {
        b.iter(|| merge_sort(black_box(&random_strings)))
    });

    group.bench_function("quick_sort", |b| {
        b.iter(|| quick_sort(black_box(&random_strings)))
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter(|| {
            let mut data = random_strings.clone();
            data.sort();
            data
        })
    });

    group.finish();
}

criterion_group!(benches, bench_1m_strings);
criterion_main!(benches);
