use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use prime_shamir::{Config, ShamirShare, SplitMode};

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    // Benchmark different share counts, threshold at a majority
    for n in [5usize, 50, 250].iter() {
        let mut shamir = ShamirShare::new(*n, n / 2 + 1).unwrap();

        group.bench_function(format!("split_{}_shares", n), |b| {
            b.iter(|| {
                black_box(shamir.split(black_box(0xDEAD_BEEF)).unwrap());
            });
        });
    }

    for n in [50usize, 250].iter() {
        let config = Config::new().with_mode(SplitMode::Parallel);
        let mut shamir = ShamirShare::builder(*n, n / 2 + 1)
            .with_config(config)
            .build()
            .unwrap();

        group.bench_function(format!("split_parallel_{}_shares", n), |b| {
            b.iter(|| {
                black_box(shamir.split(black_box(0xDEAD_BEEF)).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");

    for t in [3usize, 26, 126].iter() {
        let mut shamir = ShamirShare::new(t * 2, *t).unwrap();
        let shares = shamir.split(0xDEAD_BEEF).unwrap();

        group.bench_function(format!("reconstruct_threshold_{}", t), |b| {
            b.iter(|| {
                black_box(shamir.reconstruct(black_box(&shares[..*t])).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_full_workflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_workflow");

    for n in [5usize, 50].iter() {
        let t = n / 2 + 1;

        group.bench_function(format!("workflow_{}_shares", n), |b| {
            b.iter(|| {
                let mut shamir = ShamirShare::new(*n, t).unwrap();
                let shares = shamir.split(black_box(42)).unwrap();
                black_box(shamir.reconstruct(&shares[..t]).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split, bench_reconstruct, bench_full_workflow);
criterion_main!(benches);
