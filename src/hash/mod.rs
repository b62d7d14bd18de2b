// Hash functions for bucket indexing

use crate::types::HashValue;
use std::hash::{Hash, Hasher};

/// FNV-1a offset basis
const FNV_OFFSET_BASIS: u64 = 14695981039346656037;

/// FNV-1a prime
const FNV_PRIME: u64 = 1099511628211;

/// Incremental FNV-1a hasher
///
/// Implements `std::hash::Hasher` so any `Hash` key can be folded through
/// it. Unlike `RandomState`, the result is deterministic across runs, which
/// keeps bucket placement reproducible for a fixed key set.
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    /// Create a hasher initialized with the FNV offset basis
    pub fn new() -> Self {
        FnvHasher {
            hash: FNV_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // Process each byte with wrapping arithmetic
        for byte in bytes {
            self.hash ^= *byte as u64;
            self.hash = self.hash.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Hash an arbitrary key through the default FNV-1a hasher
///
/// This is the table's sole hashing entry point; the bucket index is this
/// value reduced modulo the bucket count.
pub fn hash_key<K: Hash + ?Sized>(key: &K) -> HashValue {
    let mut hasher = FnvHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// FNV-1a hash over a string's raw bytes
/// Returns a 64-bit integer hash value
pub fn fnv1a_hash(s: &str) -> HashValue {
    let mut hash = FNV_OFFSET_BASIS;

    for byte in s.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    hash
}

/// djb2 hash over a string's raw bytes
/// Returns a 64-bit integer hash value
pub fn djb2_hash(s: &str) -> HashValue {
    // djb2 magic seed
    let mut hash: u64 = 5381;

    for byte in s.as_bytes() {
        // hash * 33 + c, with wrapping operations to handle overflow safely
        hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(*byte as u64);
    }

    hash
}

/// xxHash64 over a string's raw bytes
/// Returns a 64-bit integer hash value
pub fn xxh64_hash(s: &str) -> HashValue {
    xxhash_rust::xxh64::xxh64(s.as_bytes(), 0)
}

/// CRC32 over a string's raw bytes, widened to 64 bits
pub fn crc32_hash(s: &str) -> HashValue {
    crc32fast::hash(s.as_bytes()) as HashValue
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
