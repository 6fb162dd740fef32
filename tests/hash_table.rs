use chain_table::hash::FnvBuildHasher;
use chain_table::{fnv_hash64, CursorStep, HashTable, InsertOutcome, KeyValue};
use std::cell::Cell;
use std::hash::BuildHasher;
use std::rc::Rc;

#[test]
fn chained_bucket_scenario() {
    // Declared ahead of the table, which borrows the names as values.
    let more: Vec<(u64, String)> = (100..109u64).map(|k| (k, format!("v{k}"))).collect();
    let names: Vec<&str> = more.iter().map(|(_, s)| s.as_str()).collect();

    let mut t = HashTable::with_buckets(4).expect("allocate");
    for (k, v) in [(1u64, "a"), (5, "b"), (9, "c")] {
        assert_eq!(t.insert(k, v), InsertOutcome::Inserted);
    }
    assert_eq!(t.len(), 3);
    assert_eq!(t.get(5), Some(&"b"));

    let removed = t.remove(1).expect("present");
    assert_eq!(removed, KeyValue { key: 1, value: "a" });
    assert_eq!(t.len(), 2);

    for (&(k, _), &name) in more.iter().zip(&names) {
        let _ = t.insert(k, name);
    }
    // Growth is checked before each insert against len >= 3 * buckets, so
    // eleven pairs still fit in four buckets.
    assert_eq!(t.len(), 11);
    assert_eq!(t.bucket_count(), 4);

    let _ = t.insert(200, "x");
    assert_eq!(t.bucket_count(), 4);
    let _ = t.insert(201, "y");
    assert_eq!(t.bucket_count(), 36);
    assert_eq!(t.len(), 13);

    assert_eq!(t.get(5), Some(&"b"));
    assert_eq!(t.get(9), Some(&"c"));
    assert!(t.get(1).is_none());
    for (&(k, _), &name) in more.iter().zip(&names) {
        assert_eq!(t.get(k), Some(&name));
    }
}

#[test]
fn replace_hands_back_previous_value() {
    let mut t = HashTable::with_buckets(8).unwrap();
    let _ = t.insert(42, vec![1, 2]);
    match t.insert(42, vec![3]) {
        InsertOutcome::Replaced(old) => {
            assert_eq!(old.key, 42);
            assert_eq!(old.value, vec![1, 2]);
        }
        InsertOutcome::Inserted => panic!("expected replacement"),
    }
    assert_eq!(t.len(), 1);
    assert_eq!(t.get(42), Some(&vec![3]));
}

#[test]
fn prehashed_string_keys() {
    let mut t = HashTable::with_buckets(16).unwrap();
    for word in ["alpha", "beta", "gamma", "delta"] {
        let _ = t.insert(fnv_hash64(word.as_bytes()), word);
    }
    assert_eq!(t.get(fnv_hash64(b"gamma")), Some(&"gamma"));
    assert!(t.get(fnv_hash64(b"epsilon")).is_none());

    let key = FnvBuildHasher.hash_one(("tuple", 7u32));
    let _ = t.insert(key, "tuple");
    assert_eq!(t.get(FnvBuildHasher.hash_one(("tuple", 7u32))), Some(&"tuple"));
}

/// Values are released exactly once whether the table is freed with a
/// release function, dropped, or the pair is removed and dropped by the caller.
#[test]
fn values_released_exactly_once() {
    struct Tracked(Rc<Cell<usize>>);
    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let drops = Rc::new(Cell::new(0));
    let mut t = HashTable::with_buckets(2).unwrap();
    for k in 0..20u64 {
        let _ = t.insert(k, Tracked(drops.clone()));
    }
    drop(t.remove(3));
    assert_eq!(drops.get(), 1);

    let released = Cell::new(0);
    t.free(|v| {
        released.set(released.get() + 1);
        drop(v);
    });
    assert_eq!(released.get(), 19);
    assert_eq!(drops.get(), 20);

    let mut t = HashTable::with_buckets(3).unwrap();
    for k in 0..5u64 {
        let _ = t.insert(k, Tracked(drops.clone()));
    }
    drop(t);
    assert_eq!(drops.get(), 25);
}

#[test]
fn cursor_delete_drains_table() {
    let mut t = HashTable::with_buckets(4).unwrap();
    for k in 0..30u64 {
        let _ = t.insert(k * 3, k);
    }
    let mut out = Vec::new();
    let mut c = t.cursor();
    loop {
        match c.delete() {
            Some((kv, CursorStep::Advanced)) => out.push(kv.key),
            Some((kv, CursorStep::Exhausted)) => {
                out.push(kv.key);
                assert!(c.is_past_end());
                break;
            }
            None => panic!("cursor went past the end without reporting exhaustion"),
        }
    }
    out.sort_unstable();
    assert_eq!(out, (0..30u64).map(|k| k * 3).collect::<Vec<_>>());
    assert!(t.is_empty());
    assert_eq!(t.iter().count(), 0);
}
