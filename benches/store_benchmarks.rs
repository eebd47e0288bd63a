//! Record store benchmarks
//!
//! - Add with uniqueness check
//! - Lookup by id
//! - Save/load of the JSON data file

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use student_db::codec;
use student_db::record::{StudentPatch, StudentRecord};
use student_db::store::RecordStore;
use tempfile::TempDir;

fn make_record(id: i64) -> StudentRecord {
    StudentRecord::new(
        id,
        format!("Student {id}"),
        18 + u32::try_from(id % 10).unwrap_or(0),
        "A",
        ["Math", "Physics"],
    )
}

fn make_store(n: i64) -> RecordStore {
    RecordStore::from_records((0..n).map(make_record).collect())
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_add");

    for size in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut store = RecordStore::new();
                for id in 0..size {
                    store.add(make_record(id)).unwrap();
                }
                black_box(store.len())
            });
        });
    }

    group.finish();
}

fn bench_find_and_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_lookup");
    let mut store = make_store(1_000);

    group.bench_function("find_last", |b| {
        b.iter(|| black_box(store.find(black_box(999))));
    });

    group.bench_function("update_last", |b| {
        b.iter(|| {
            store
                .update(black_box(999), StudentPatch::new().grade("B"))
                .unwrap();
        });
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let dir = TempDir::new().unwrap();

    for size in [10, 1_000] {
        let store = make_store(size);
        let path = dir.path().join(format!("students-{size}.txt"));

        group.bench_with_input(BenchmarkId::new("save", size), &store, |b, store| {
            b.iter(|| codec::save(store, &path).unwrap());
        });

        codec::save(&store, &path).unwrap();
        group.bench_with_input(BenchmarkId::new("load", size), &path, |b, path| {
            b.iter(|| black_box(codec::load(path).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_find_and_update, bench_codec);
criterion_main!(benches);
