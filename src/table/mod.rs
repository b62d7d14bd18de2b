// Hash table implementation with separate chaining

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::mem;

use linked_hash_map::LinkedHashMap;

use crate::chain::Chain;
use crate::hash::hash_key;
use crate::types::{DEFAULT_BUCKET_COUNT, GROWTH_FACTOR, LOAD_FACTOR_THRESHOLD};

pub mod error;

pub use error::{TableError, TableResult};

/// Hash table structure
///
/// Keys are distributed over a bucket array by hash-and-modulo indexing,
/// with one `Chain` per bucket resolving collisions. Every stored key lives
/// in exactly one bucket, the one its hash selects under the current bucket
/// count; the array is grown and every entry rehashed whenever an insertion
/// pushes the load factor past `LOAD_FACTOR_THRESHOLD`.
#[derive(Debug)]
pub struct HashTable<K, V> {
    /// Bucket array, each bucket owning one chain of entries
    buckets: Vec<Chain<K, V>>,
    /// Number of entries across all buckets
    size: usize,
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Create a hash table with the default bucket count
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create a hash table with the specified number of buckets
    ///
    /// `bucket_count` must be at least 1; the index function divides by it.
    pub fn with_buckets(bucket_count: usize) -> Self {
        assert!(bucket_count >= 1, "bucket count must be at least 1");
        HashTable {
            buckets: (0..bucket_count).map(|_| Chain::new()).collect(),
            size: 0,
        }
    }

    /// Calculate the bucket index where the given key would be stored
    ///
    /// Deterministic for a fixed bucket count. Recomputed, never cached,
    /// whenever the bucket count changes.
    fn bucket_index(&self, key: &K) -> usize {
        (hash_key(key) as usize) % self.buckets.len()
    }

    /// Number of buckets currently allocated
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Ratio of stored entries to buckets
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Get a reference to the value associated with the given key
    ///
    /// Best case O(1) when the key is at the front of its bucket; worst case
    /// O(n) if every key collides into one bucket.
    pub fn get(&self, key: &K) -> TableResult<&V> {
        let index = self.bucket_index(key);

        match self.buckets[index].find(key) {
            Some(entry) => Ok(&entry.value),
            None => Err(TableError::KeyNotFound),
        }
    }

    /// Insert or update the given key with its associated value
    ///
    /// An existing key has its value replaced in place; that path never
    /// changes the size and never triggers a resize. A new key is appended
    /// to its bucket's chain, and if the load factor then exceeds the
    /// threshold the bucket array is doubled before returning, rehashing
    /// the entry that tipped the balance along with the rest.
    pub fn set(&mut self, key: K, value: V) {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.find_mut(&key) {
            entry.value = value;
            return;
        }

        bucket.append(key, value);
        self.size += 1;

        if self.load_factor() > LOAD_FACTOR_THRESHOLD {
            self.resize(self.buckets.len() * GROWTH_FACTOR);
        }
    }

    /// Remove the entry with the given key
    ///
    /// Returns the removed value, or `KeyNotFound` if no entry matches.
    /// The bucket array is never shrunk.
    pub fn delete(&mut self, key: &K) -> TableResult<V> {
        let index = self.bucket_index(key);

        match self.buckets[index].remove(key) {
            Some(value) => {
                self.size -= 1;
                Ok(value)
            }
            None => Err(TableError::KeyNotFound),
        }
    }

    /// Collect all entries, in bucket order then intra-bucket insertion order
    ///
    /// The order is not guaranteed stable across resizes.
    pub fn items(&self) -> Vec<(&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .map(|entry| (&entry.key, &entry.value))
            .collect()
    }

    /// Rehash every entry into a fresh bucket array
    ///
    /// The old array is consumed whole and replaced, never mutated bucket by
    /// bucket; each entry is re-inserted under the index function computed
    /// against the new bucket count. Runs to completion before any other
    /// operation can observe the table.
    fn resize(&mut self, new_bucket_count: usize) {
        let old_buckets = mem::replace(
            &mut self.buckets,
            (0..new_bucket_count).map(|_| Chain::new()).collect(),
        );

        for entry in old_buckets.into_iter().flat_map(Chain::into_entries) {
            let index = self.bucket_index(&entry.key);
            self.buckets[index].append(entry.key, entry.value);
        }
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Display for HashTable<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.items().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// A trait that defines a unified interface for key/value maps
///
/// Lets the chained table run under the same workloads as off-the-shelf
/// maps in the comparison benches.
pub trait HashMapInterface<K, V> {
    /// Creates an empty map
    fn new() -> Self;

    /// Inserts a new key or updates an existing one
    fn insert(&mut self, key: K, value: V);

    /// Looks up a key
    fn get(&self, key: &K) -> Option<&V>;

    /// Removes a key, returning its value
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of stored entries
    fn len(&self) -> usize;
}

impl<K, V> HashMapInterface<K, V> for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn new() -> Self {
        HashTable::new()
    }

    fn insert(&mut self, key: K, value: V) {
        self.set(key, value);
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashTable::get(self, key).ok()
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.delete(key).ok()
    }

    fn len(&self) -> usize {
        self.size
    }
}

/// std HashMap wrapper
pub struct StdHashMapWrapper<K, V> {
    inner: HashMap<K, V>,
}

impl<K, V> HashMapInterface<K, V> for StdHashMapWrapper<K, V>
where
    K: Eq + Hash,
{
    fn new() -> Self {
        StdHashMapWrapper {
            inner: HashMap::new(),
        }
    }

    fn insert(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// linked-hash-map wrapper preserving insertion order
pub struct LinkedHashMapWrapper<K, V> {
    inner: LinkedHashMap<K, V>,
}

impl<K, V> HashMapInterface<K, V> for LinkedHashMapWrapper<K, V>
where
    K: Eq + Hash,
{
    fn new() -> Self {
        LinkedHashMapWrapper {
            inner: LinkedHashMap::new(),
        }
    }

    fn insert(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
