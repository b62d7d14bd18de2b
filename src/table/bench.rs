use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use rand::Rng;

// Import the table, wrappers and interface from the crate
use chainstore::table::{HashMapInterface, HashTable, LinkedHashMapWrapper, StdHashMapWrapper};

// Test configuration
const THREAD_COUNT: usize = 8;
const OPERATIONS_PER_THREAD: usize = 10_000;

// Insert, read back, then remove every key through the shared interface
fn run_single_threaded<M: HashMapInterface<u32, &'static str>>() {
    let mut map = M::new();

    for i in 0..OPERATIONS_PER_THREAD {
        map.insert(i as u32, "bench_value");
    }

    for i in 0..OPERATIONS_PER_THREAD {
        assert!(map.get(&(i as u32)).is_some());
    }

    for i in 0..OPERATIONS_PER_THREAD {
        map.remove(&(i as u32));
    }
}

// 90% reads, 10% writes against a pre-populated map
fn run_read_heavy<M: HashMapInterface<u32, &'static str>>() {
    let mut map = M::new();
    for i in 0..OPERATIONS_PER_THREAD {
        map.insert(i as u32, "bench_value");
    }

    for i in 0..OPERATIONS_PER_THREAD {
        if i % 10 == 0 {
            map.insert(i as u32, "updated_value");
        } else {
            assert!(map.get(&(i as u32)).is_some());
        }
    }
}

// Benchmark single-threaded operations for each implementation
pub fn bench_single_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("SingleThreaded");

    group.bench_function("ChainedHashTable", |b| {
        b.iter(run_single_threaded::<HashTable<u32, &'static str>>)
    });
    group.bench_function("StdHashMap", |b| {
        b.iter(run_single_threaded::<StdHashMapWrapper<u32, &'static str>>)
    });
    group.bench_function("LinkedHashMap", |b| {
        b.iter(run_single_threaded::<LinkedHashMapWrapper<u32, &'static str>>)
    });

    group.finish();
}

// Benchmark read-heavy workloads for each implementation
pub fn bench_read_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("ReadHeavy");

    group.bench_function("ChainedHashTable", |b| {
        b.iter(run_read_heavy::<HashTable<u32, &'static str>>)
    });
    group.bench_function("StdHashMap", |b| {
        b.iter(run_read_heavy::<StdHashMapWrapper<u32, &'static str>>)
    });
    group.bench_function("LinkedHashMap", |b| {
        b.iter(run_read_heavy::<LinkedHashMapWrapper<u32, &'static str>>)
    });

    group.finish();
}

// Benchmark random point lookups against a pre-populated table
pub fn bench_random_gets(c: &mut Criterion) {
    let mut table = HashTable::new();
    for i in 0..OPERATIONS_PER_THREAD {
        table.set(i as u32, i as u64);
    }

    let mut group = c.benchmark_group("RandomGets");

    group.bench_function("ChainedHashTable", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let key = rng.gen_range(0..OPERATIONS_PER_THREAD as u32);
            black_box(table.get(&key).ok())
        });
    });

    group.finish();
}

// Benchmark concurrent insertions through an external mutex
//
// The table itself is single-threaded; callers sharing it across threads
// must serialize access, which is exactly what this scenario measures.
pub fn bench_external_locking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ExternalLocking");

    group.bench_function("ChainedHashTable", |b| {
        b.iter(|| {
            let table = Arc::new(Mutex::new(HashTable::new()));

            // Spawn threads for concurrent insertions
            let handles: Vec<_> = (0..THREAD_COUNT)
                .map(|thread_id| {
                    let table = Arc::clone(&table);
                    thread::spawn(move || {
                        for i in 0..OPERATIONS_PER_THREAD {
                            let key = (thread_id * OPERATIONS_PER_THREAD + i) as u32;
                            table.lock().set(key, "bench_value");
                        }
                    })
                })
                .collect();

            // Wait for all threads to complete
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(
    benches,
    bench_single_threaded,
    bench_read_heavy,
    bench_random_gets,
    bench_external_locking
);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
