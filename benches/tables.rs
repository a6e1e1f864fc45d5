#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use collide::{ChainedTable, Item, OpenAddressingTable};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;
const BUCKETS: usize = 101;

fn hash_table_benches(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let keys: Vec<usize> = (0..ITEMS_AMOUNT).map(|_| rng.random_range(0..1_000_000)).collect();

    let mut group = c.benchmark_group("Collision resolution comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    group.bench_function("open addressing insert", |b| {
        b.iter(|| {
            let mut table = OpenAddressingTable::new();
            for &key in &keys {
                table.insert(Item::from(key));
            }
            table
        });
    });
    group.bench_function("chained insert", |b| {
        b.iter(|| {
            let mut table = ChainedTable::with_buckets(BUCKETS).unwrap();
            for &key in &keys {
                table.insert(Item::from(key));
            }
            table
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for &key in &keys {
                map.insert(key, ());
            }
            map
        });
    });

    let open: OpenAddressingTable = keys.iter().copied().map(Item::from).collect();
    let mut chained = ChainedTable::with_buckets(BUCKETS).unwrap();
    chained.extend(keys.iter().copied().map(Item::from));
    let rust_map: HashMap<usize, ()> = keys.iter().map(|&key| (key, ())).collect();

    group.bench_function("open addressing find", |b| {
        b.iter(|| keys.iter().filter(|&&key| open.find(key).is_some()).count());
    });
    group.bench_function("chained find", |b| {
        b.iter(|| keys.iter().filter(|&&key| chained.find(key).is_some()).count());
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| keys.iter().filter(|&&key| rust_map.contains_key(&key)).count());
    });

    group.bench_function("open addressing delete and reinsert", |b| {
        let mut table = open.clone();
        b.iter(|| {
            for &key in &keys {
                if let Ok(item) = table.delete(key) {
                    table.insert(item);
                }
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches);

criterion_main!(benches);
