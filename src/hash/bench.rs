use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

// Import the hash functions from the main crate
use chainstore::hash::{crc32_hash, djb2_hash, fnv1a_hash, hash_key, xxh64_hash};

// Generate a random string of specified length
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let mut s = String::with_capacity(length);

    for _ in 0..length {
        let idx = rng.gen_range(0..CHARSET.len());
        s.push(CHARSET[idx] as char);
    }

    s
}

// Benchmark hash functions with short strings
pub fn bench_short_strings(c: &mut Criterion) {
    let s = generate_random_string(10);

    let mut group = c.benchmark_group("ShortStrings");

    group.bench_function("fnv1a_hash", |b| b.iter(|| fnv1a_hash(black_box(&s))));
    group.bench_function("djb2_hash", |b| b.iter(|| djb2_hash(black_box(&s))));
    group.bench_function("xxh64_hash", |b| b.iter(|| xxh64_hash(black_box(&s))));
    group.bench_function("crc32_hash", |b| b.iter(|| crc32_hash(black_box(&s))));

    group.finish();
}

// Benchmark hash functions with long strings
pub fn bench_long_strings(c: &mut Criterion) {
    let s = generate_random_string(1000);

    let mut group = c.benchmark_group("LongStrings");

    group.bench_function("fnv1a_hash", |b| b.iter(|| fnv1a_hash(black_box(&s))));
    group.bench_function("djb2_hash", |b| b.iter(|| djb2_hash(black_box(&s))));
    group.bench_function("xxh64_hash", |b| b.iter(|| xxh64_hash(black_box(&s))));
    group.bench_function("crc32_hash", |b| b.iter(|| crc32_hash(black_box(&s))));

    group.finish();
}

// Benchmark hash functions with formatted keys, the shape the table sees
pub fn bench_formatted_keys(c: &mut Criterion) {
    let count = 1000;

    let mut group = c.benchmark_group("FormattedKeys");

    group.bench_function("fnv1a_hash", |b| {
        b.iter(|| {
            let mut rng = rand::thread_rng();
            for _ in 0..count {
                let id = rng.gen_range(0..u32::MAX);
                let s = format!("key-{}", id);
                fnv1a_hash(&s);
            }
        })
    });

    group.bench_function("xxh64_hash", |b| {
        b.iter(|| {
            let mut rng = rand::thread_rng();
            for _ in 0..count {
                let id = rng.gen_range(0..u32::MAX);
                let s = format!("key-{}", id);
                xxh64_hash(&s);
            }
        })
    });

    group.finish();
}

// Benchmark the generic key entry point the bucket index is computed from
pub fn bench_generic_keys(c: &mut Criterion) {
    let s = generate_random_string(16);

    let mut group = c.benchmark_group("GenericKeys");

    group.bench_function("hash_key_u64", |b| b.iter(|| hash_key(black_box(&42u64))));
    group.bench_function("hash_key_str", |b| b.iter(|| hash_key(black_box(s.as_str()))));

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(
    benches,
    bench_short_strings,
    bench_long_strings,
    bench_formatted_keys,
    bench_generic_keys
);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
