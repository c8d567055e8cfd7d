use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use echocache::Cache;
use echostore::MemoryStore;
use std::sync::Arc;

fn bench_instrumented_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("store_1kb_instrumented", |b| {
        let cache = Cache::new(Arc::new(MemoryStore::new())).unwrap();
        let data = vec![b'x'; 1024];

        b.iter(|| {
            black_box(cache.store(data.clone()).unwrap());
        });
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb", |b| {
        let cache = Cache::new(Arc::new(MemoryStore::new())).unwrap();
        let data = vec![b'x'; 1024];

        let mut keys = Vec::new();
        for _ in 0..100 {
            keys.push(cache.store(data.clone()).unwrap());
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&keys[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_instrumented_store, bench_get);
criterion_main!(benches);
