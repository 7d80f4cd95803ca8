//! Benchmarks for the Myers diff engine.
//!
//! Performance-critical paths:
//! - `search` + `reconstruct` on inputs with a few scattered edits
//! - worst-case disjoint inputs, where the depth equals N + M
//! - the identical-text fast path (SHA-256 digests)

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use diff_engine::{MyersDiff, content_digest, diff, diff_text};

fn lines(count: usize, tag: &str) -> Vec<String> {
    (0..count).map(|i| format!("{tag} line {i}")).collect()
}

/// Copy of `base` with every `stride`-th line replaced.
fn edited(base: &[String], stride: usize) -> Vec<String> {
    base.iter()
        .enumerate()
        .map(|(i, line)| {
            if i % stride == 0 {
                format!("{line} (edited)")
            } else {
                line.clone()
            }
        })
        .collect()
}

fn bench_similar(c: &mut Criterion) {
    let mut group = c.benchmark_group("myers_diff/similar");

    for size in [100usize, 1_000, 10_000] {
        let old = lines(size, "text");
        let new = edited(&old, 50);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| diff(black_box(&old), black_box(&new)));
        });
    }

    group.finish();
}

fn bench_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("myers_diff/disjoint");
    group.sample_size(10);

    for size in [50usize, 200, 800] {
        let old = lines(size, "old");
        let new = lines(size, "new");

        group.throughput(Throughput::Elements(size as u64 * 2));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| diff(black_box(&old), black_box(&new)));
        });
    }

    group.finish();
}

fn bench_identical_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("myers_diff/identical_text");
    let algorithm = MyersDiff::new();

    for size in [1_000usize, 100_000] {
        let text = lines(size, "same").join("\n");

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("diff_text", size), &size, |b, _| {
            b.iter(|| diff_text(black_box(&text), black_box(&text), &algorithm));
        });
        group.bench_with_input(BenchmarkId::new("digest", size), &size, |b, _| {
            b.iter(|| content_digest(black_box(&text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_similar, bench_disjoint, bench_identical_text);
criterion_main!(benches);
