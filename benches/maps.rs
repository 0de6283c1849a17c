#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use primehash::{ChainedMap, OpenAddressingMap, positional_hash};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;
const INITIAL_CAPACITY: usize = 11;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    group.bench_function("open addressing put", |b| {
        b.iter(|| {
            let mut map = OpenAddressingMap::new(INITIAL_CAPACITY, positional_hash);
            for (key, value) in items.clone() {
                map.put(key, value);
            }
            map
        });
    });
    group.bench_function("chained put", |b| {
        b.iter(|| {
            let mut map = ChainedMap::new(INITIAL_CAPACITY, positional_hash);
            for (key, value) in items.clone() {
                map.put(key, value);
            }
            map
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut map = HashMap::with_capacity(INITIAL_CAPACITY);
            for (key, value) in items.clone() {
                map.insert(key, value);
            }
            map
        });
    });

    let mut open_map = OpenAddressingMap::new(INITIAL_CAPACITY, positional_hash);
    let mut chained_map = ChainedMap::new(INITIAL_CAPACITY, positional_hash);
    let mut rust_map = HashMap::new();
    for (key, value) in items.clone() {
        open_map.put(key.clone(), value.clone());
        chained_map.put(key.clone(), value.clone());
        rust_map.insert(key, value);
    }

    group.bench_function("open addressing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = std::hint::black_box(open_map.get(key));
            }
        });
    });
    group.bench_function("chained get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = std::hint::black_box(chained_map.get(key));
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = std::hint::black_box(rust_map.get(key));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
