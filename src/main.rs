//! Chainstore demo entry

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use chainstore::HashTable;

fn main() {
    println!("Chainstore chained hash table demo");

    let mut table = HashTable::with_buckets(4);
    println!("table: {}", table);

    println!("Setting entries:");
    table.set("I", 1);
    println!("set(I, 1): {}", table);
    table.set("V", 5);
    println!("set(V, 5): {}", table);
    table.set("X", 10);
    println!("set(X, 10): {}", table);
    println!("buckets: {}", table.bucket_count());
    println!("load_factor: {}", table.load_factor());

    // The fourth insertion pushes the load factor past the threshold
    table.set("L", 50);
    println!("set(L, 50): {}", table);
    println!("buckets: {}", table.bucket_count());
    println!("load_factor: {}", table.load_factor());

    println!("Getting entries:");
    for key in ["I", "V", "X", "L"] {
        match table.get(&key) {
            Ok(value) => println!("get({}): {}", key, value),
            Err(err) => println!("get({}): {}", key, err),
        }
    }

    println!("Deleting entries:");
    for key in ["I", "V", "X", "L"] {
        match table.delete(&key) {
            Ok(_) => println!("delete({}): {}", key, table),
            Err(err) => println!("delete({}): {}", key, err),
        }
    }
    println!("buckets: {}", table.bucket_count());
    println!("load_factor: {}", table.load_factor());
}
