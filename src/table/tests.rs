use super::*;

#[test]
fn test_round_trip() {
    let mut table = HashTable::new();

    table.set("one", 1);
    table.set("two", 2);
    table.set("three", 3);

    assert_eq!(table.len(), 3);
    assert_eq!(table.get(&"one"), Ok(&1));
    assert_eq!(table.get(&"two"), Ok(&2));
    assert_eq!(table.get(&"three"), Ok(&3));
}

#[test]
fn test_get_missing_key() {
    let mut table = HashTable::new();

    // Missing on an empty table
    assert_eq!(table.get(&"absent"), Err(TableError::KeyNotFound));

    // Missing on a non-empty table
    table.set("present", 1);
    assert_eq!(table.get(&"absent"), Err(TableError::KeyNotFound));
    assert_eq!(table.get(&"present"), Ok(&1));
}

#[test]
fn test_update_not_duplicate() {
    let mut table = HashTable::new();

    table.set("key", 1);
    table.set("key", 2);

    // One entry, latest value, no growth
    assert_eq!(table.len(), 1);
    assert_eq!(table.items().len(), 1);
    assert_eq!(table.get(&"key"), Ok(&2));
}

#[test]
fn test_delete() {
    let mut table = HashTable::new();

    table.set("a", 1);
    table.set("b", 2);
    table.set("c", 3);

    // Delete an existing key
    assert_eq!(table.delete(&"b"), Ok(2));
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&"b"), Err(TableError::KeyNotFound));

    // Delete a missing key
    assert_eq!(table.delete(&"b"), Err(TableError::KeyNotFound));
    assert_eq!(table.delete(&"z"), Err(TableError::KeyNotFound));
    assert_eq!(table.len(), 2);

    // A deleted key can be set again
    table.set("b", 20);
    assert_eq!(table.get(&"b"), Ok(&20));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_delete_keeps_size_consistent() {
    let mut table = HashTable::new();

    for i in 0..20u32 {
        table.set(i, i * 10);
    }
    for i in 0..20u32 {
        assert_eq!(table.delete(&i), Ok(i * 10));
    }

    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert!(table.items().is_empty());

    // Deleting never shrinks the bucket array
    assert!(table.bucket_count() > DEFAULT_BUCKET_COUNT);
}

#[test]
fn test_resize_trigger_scenario() {
    let mut table = HashTable::with_buckets(4);

    table.set("I", 1);
    table.set("V", 5);
    table.set("X", 10);

    // Exactly at the threshold: the trigger is strict, so no resize yet
    assert_eq!(table.bucket_count(), 4);
    assert_eq!(table.load_factor(), 0.75);

    // The fourth insertion pushes past the threshold and doubles the array
    table.set("L", 50);
    assert_eq!(table.bucket_count(), 8);
    assert_eq!(table.load_factor(), 0.5);

    // The entry that triggered the resize was rehashed with the rest
    assert_eq!(table.get(&"I"), Ok(&1));
    assert_eq!(table.get(&"V"), Ok(&5));
    assert_eq!(table.get(&"X"), Ok(&10));
    assert_eq!(table.get(&"L"), Ok(&50));
}

#[test]
fn test_resize_preserves_all_entries() {
    let mut table = HashTable::with_buckets(4);

    for i in 0..100u32 {
        table.set(format!("key-{}", i), i);
    }

    // Every insertion survived the resizes
    assert_eq!(table.len(), 100);
    assert_eq!(table.items().len(), 100);
    for i in 0..100u32 {
        assert_eq!(table.get(&format!("key-{}", i)), Ok(&i));
    }

    // Doubling schedule: 4 -> 8 -> 16 -> 32 -> 64 -> 128 -> 256
    assert_eq!(table.bucket_count(), 256);
}

#[test]
fn test_load_factor_bound_after_set() {
    let mut table = HashTable::with_buckets(2);

    for i in 0..1000u32 {
        table.set(i, i);
        // set never returns with the table persistently above the threshold
        assert!(table.load_factor() <= LOAD_FACTOR_THRESHOLD);
    }
}

#[test]
fn test_update_never_triggers_resize() {
    let mut table = HashTable::with_buckets(4);

    table.set("I", 1);
    table.set("V", 5);
    table.set("X", 10);
    assert_eq!(table.load_factor(), 0.75);

    // Pure updates at the threshold must not grow the array
    for _ in 0..10 {
        table.set("X", 11);
    }
    assert_eq!(table.bucket_count(), 4);
    assert_eq!(table.load_factor(), 0.75);
    assert_eq!(table.get(&"X"), Ok(&11));
}

#[test]
fn test_bucket_index_determinism() {
    let table: HashTable<String, u32> = HashTable::with_buckets(16);

    for key in ["", "a", "bucket", "separate chaining"] {
        let key = key.to_string();
        let index = table.bucket_index(&key);
        assert_eq!(table.bucket_index(&key), index);
        assert!(index < table.bucket_count());
    }
}

#[test]
fn test_items_collects_every_bucket() {
    let mut table = HashTable::with_buckets(8);

    table.set("a", 1);
    table.set("b", 2);
    table.set("c", 3);

    let mut items: Vec<(&str, i32)> = table
        .items()
        .into_iter()
        .map(|(key, value)| (*key, *value))
        .collect();
    items.sort();
    assert_eq!(items, vec![("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_display_formatting() {
    let empty: HashTable<&str, i32> = HashTable::new();
    assert_eq!(empty.to_string(), "{}");

    let mut table = HashTable::new();
    table.set("A", 1);
    assert_eq!(table.to_string(), "{\"A\": 1}");

    table.set("B", 2);
    let rendered = table.to_string();
    assert!(rendered.starts_with('{') && rendered.ends_with('}'));
    assert!(rendered.contains("\"A\": 1"));
    assert!(rendered.contains("\"B\": 2"));
    assert!(rendered.contains(", "));
}

#[test]
#[should_panic(expected = "bucket count must be at least 1")]
fn test_zero_buckets_panics() {
    let _ = HashTable::<u32, u32>::with_buckets(0);
}

#[test]
fn test_mixed_workload() {
    let mut table = HashTable::new();

    for i in 0..500u32 {
        table.set(i, i * 2);
    }
    for i in (0..500u32).filter(|i| i % 3 == 0) {
        assert_eq!(table.delete(&i), Ok(i * 2));
    }

    assert_eq!(table.len(), 333);
    for i in 0..500u32 {
        if i % 3 == 0 {
            assert_eq!(table.get(&i), Err(TableError::KeyNotFound));
        } else {
            assert_eq!(table.get(&i), Ok(&(i * 2)));
        }
    }
}

// Run one workload through every HashMapInterface implementation
fn exercise_interface<M: HashMapInterface<u32, String>>() {
    let mut map = M::new();

    for i in 0..50u32 {
        map.insert(i, format!("value-{}", i));
    }
    assert_eq!(map.len(), 50);

    map.insert(7, String::from("updated"));
    assert_eq!(map.len(), 50);
    assert_eq!(map.get(&7).map(String::as_str), Some("updated"));

    assert_eq!(map.remove(&7), Some(String::from("updated")));
    assert_eq!(map.get(&7), None);
    assert_eq!(map.remove(&7), None);
    assert_eq!(map.len(), 49);
}

#[test]
fn test_hash_map_interface_implementations() {
    exercise_interface::<HashTable<u32, String>>();
    exercise_interface::<StdHashMapWrapper<u32, String>>();
    exercise_interface::<LinkedHashMapWrapper<u32, String>>();
}
