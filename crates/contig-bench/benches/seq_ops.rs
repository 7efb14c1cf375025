//! Criterion micro-benchmarks for append growth, mid-sequence mutation,
//! and storage reuse.

use contig::Contig;
use contig_bench::{insert_positions, ramp};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_10k_with_growth", |b| {
        b.iter(|| {
            let mut seq = Contig::new();
            for i in 0..10_000u64 {
                seq.push(black_box(i));
            }
            black_box(seq.len())
        })
    });

    c.bench_function("append_10k_preallocated", |b| {
        b.iter(|| {
            let mut seq = Contig::with_capacity(10_000);
            for i in 0..10_000u64 {
                seq.push(black_box(i));
            }
            black_box(seq.len())
        })
    });
}

fn bench_mid_sequence(c: &mut Criterion) {
    let positions = insert_positions(1_000, 42);

    c.bench_function("insert_1k_random_positions", |b| {
        b.iter(|| {
            let mut seq = Contig::new();
            for (i, &pos) in positions.iter().enumerate() {
                seq.insert(pos, black_box(i as u64));
            }
            black_box(seq.len())
        })
    });

    c.bench_function("insert_1k_front", |b| {
        b.iter(|| {
            let mut seq = Contig::new();
            for i in 0..1_000u64 {
                seq.insert(0, black_box(i));
            }
            black_box(seq.len())
        })
    });

    c.bench_function("drain_1k_front_by_remove", |b| {
        b.iter(|| {
            let mut seq = ramp(1_000);
            while !seq.is_empty() {
                black_box(seq.remove(0));
            }
        })
    });
}

fn bench_storage_reuse(c: &mut Criterion) {
    let source = ramp(10_000);

    c.bench_function("clone_10k", |b| {
        b.iter(|| black_box(source.clone()))
    });

    c.bench_function("clone_from_10k_reusing_storage", |b| {
        let mut dest = ramp(10_000);
        b.iter(|| {
            dest.clone_from(&source);
            black_box(dest.len())
        })
    });
}

criterion_group!(benches, bench_append, bench_mid_sequence, bench_storage_reuse);
criterion_main!(benches);
