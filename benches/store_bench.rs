//! Benchmarks for docstore write and read paths

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use docstore::{doc, key, DataStore};

const DOCS: i64 = 10_000;

fn populated_store(capacity: usize) -> DataStore {
    let store = DataStore::with_primary_key(["id0", "id1"], capacity).unwrap();
    for i in 0..DOCS {
        store
            .add(doc! { "id0" => i, "id1" => i + 1, "first_name" => "Marko", "last_name" => "Tasic" })
            .unwrap();
    }
    store
}

fn store_benchmarks(c: &mut Criterion) {
    c.bench_function("sequential_writes_10k", |b| {
        b.iter_batched(
            || DataStore::with_primary_key(["id0", "id1"], 1024).unwrap(),
            |store| {
                for i in 0..DOCS {
                    store
                        .add(doc! { "id0" => i, "id1" => i + 1, "first_name" => "Milica" })
                        .unwrap();
                }
                store
            },
            BatchSize::LargeInput,
        )
    });

    let store = populated_store(1024);
    c.bench_function("point_reads_10k", |b| {
        b.iter(|| {
            for i in 0..DOCS {
                black_box(store.get(&key![i, i + 1]).unwrap());
            }
        })
    });

    c.bench_function("missing_key_reads_10k", |b| {
        b.iter(|| {
            for i in DOCS..DOCS * 2 {
                black_box(store.has(&key![i, i + 1]).unwrap());
            }
        })
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
