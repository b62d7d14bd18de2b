use super::*;

#[test]
fn test_fnv1a_hash_consistency() {
    // The same string always produces the same hash
    let s = "hello world";
    assert_eq!(fnv1a_hash(s), fnv1a_hash(s));

    // The empty string folds nothing and yields the offset basis
    assert_eq!(fnv1a_hash(""), FNV_OFFSET_BASIS);
}

#[test]
fn test_fnv1a_hash_different_strings() {
    let hash1 = fnv1a_hash("hello");
    let hash2 = fnv1a_hash("world");
    let hash3 = fnv1a_hash("hello world");

    assert_ne!(hash1, hash2);
    assert_ne!(hash2, hash3);
    assert_ne!(hash1, hash3);
}

#[test]
fn test_djb2_hash_consistency() {
    let s = "hello world";
    assert_eq!(djb2_hash(s), djb2_hash(s));
    assert_ne!(djb2_hash("hello"), djb2_hash("world"));
}

#[test]
fn test_xxh64_hash_consistency() {
    let s = "hello world";
    assert_eq!(xxh64_hash(s), xxh64_hash(s));
    assert_ne!(xxh64_hash("hello"), xxh64_hash("world"));
}

#[test]
fn test_crc32_hash_consistency() {
    let s = "hello world";
    assert_eq!(crc32_hash(s), crc32_hash(s));
    assert_ne!(crc32_hash("hello"), crc32_hash("world"));

    // CRC32 is 32 bits wide even after widening
    assert!(crc32_hash(s) <= u32::MAX as u64);
}

#[test]
fn test_hash_key_determinism() {
    // hash_key is pure for any Hash key type
    assert_eq!(hash_key(&42u64), hash_key(&42u64));
    assert_eq!(hash_key("separate chaining"), hash_key("separate chaining"));
    assert_eq!(
        hash_key(&String::from("bucket")),
        hash_key(&String::from("bucket"))
    );
}

#[test]
fn test_hash_key_different_keys() {
    assert_ne!(hash_key(&1u64), hash_key(&2u64));
    assert_ne!(hash_key("left"), hash_key("right"));
}

#[test]
fn test_fnv_hasher_incremental() {
    // Feeding bytes in pieces matches feeding them at once
    let mut split = FnvHasher::new();
    split.write(b"hello ");
    split.write(b"world");

    let mut whole = FnvHasher::new();
    whole.write(b"hello world");

    assert_eq!(split.finish(), whole.finish());
    assert_eq!(whole.finish(), fnv1a_hash("hello world"));
}
