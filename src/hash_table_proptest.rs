#![cfg(test)]

// Property tests for HashTable kept inside the crate so bucket placement can
// be checked directly.

use crate::hash_table::{HashTable, InsertOutcome, KeyValue};
use crate::CursorStep;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug)]
enum Op {
    Insert(u64, i32),
    Remove(u64),
    Lookup(u64),
    // Walk with a cursor, deleting pairs whose key matches the modulus.
    SweepDelete(u64),
    Iterate,
}

fn arb_op(key_space: u64) -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..key_space, any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => (0..key_space).prop_map(Op::Remove),
        2 => (0..key_space).prop_map(Op::Lookup),
        1 => (2u64..7).prop_map(Op::SweepDelete),
        1 => Just(Op::Iterate),
    ]
}

fn check_structure<V>(t: &HashTable<V>) -> Result<(), TestCaseError> {
    let n = t.bucket_count() as u64;
    let mut total = 0;
    let mut keys = BTreeSet::new();
    for (i, chain) in t.buckets.iter().enumerate() {
        for kv in chain.iter() {
            prop_assert_eq!(kv.key % n, i as u64, "pair in wrong bucket");
            prop_assert!(keys.insert(kv.key), "duplicate key {}", kv.key);
            total += 1;
        }
    }
    prop_assert_eq!(total, t.len());
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// - Insert reports Inserted for new keys and Replaced(old pair) otherwise.
// - Lookup/remove match the model; a miss is plain `None`.
// - `len` equals distinct keys inserted minus distinct keys removed.
// - Every pair sits in bucket `key % bucket_count`; keys are unique; chain
//   lengths sum to `len`, across any number of resizes.
// - A cursor sweep that deletes as it goes visits every pair exactly once.
proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]
    #[test]
    fn prop_table_state_machine(
        buckets in 1usize..5,
        ops in (8u64..200).prop_flat_map(|ks| proptest::collection::vec(arb_op(ks), 1..120)),
    ) {
        let mut sut: HashTable<i32> = HashTable::with_buckets(buckets).unwrap();
        let mut model: HashMap<u64, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let expected = match model.insert(k, v) {
                        None => InsertOutcome::Inserted,
                        Some(old) => InsertOutcome::Replaced(KeyValue { key: k, value: old }),
                    };
                    prop_assert_eq!(sut.insert(k, v), expected);
                }
                Op::Remove(k) => {
                    let expected = model.remove(&k).map(|value| KeyValue { key: k, value });
                    prop_assert_eq!(sut.remove(k), expected);
                }
                Op::Lookup(k) => {
                    prop_assert_eq!(sut.get(k), model.get(&k));
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
                }
                Op::SweepDelete(m) => {
                    let before = sut.len();
                    let mut seen = BTreeSet::new();
                    let mut c = sut.cursor();
                    while let Some(kv) = c.get() {
                        let key = kv.key;
                        prop_assert!(seen.insert(key), "cursor revisited {}", key);
                        if key % m == 0 {
                            let (kv, step) = c.delete().unwrap();
                            prop_assert_eq!(kv.key, key);
                            prop_assert_eq!(Some(kv.value), model.remove(&key));
                            prop_assert_eq!(step == CursorStep::Exhausted, c.is_past_end());
                        } else {
                            c.advance();
                        }
                    }
                    prop_assert_eq!(seen.len(), before);
                }
                Op::Iterate => {
                    let got: HashMap<u64, i32> = sut.iter().map(|kv| (kv.key, kv.value)).collect();
                    prop_assert_eq!(&got, &model);
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            check_structure(&sut)?;
        }
    }
}

// Property: growth keeps every pair reachable. Inserting more than
// `3 * initial` distinct keys resizes at least once and all values survive.
proptest! {
    #[test]
    fn prop_resize_transparency(initial in 1usize..8, keys in proptest::collection::btree_set(any::<u64>(), 1..200)) {
        let mut t = HashTable::with_buckets(initial).unwrap();
        for &k in &keys {
            prop_assert_eq!(t.insert(k, !k), InsertOutcome::Inserted);
        }
        if keys.len() > 3 * initial {
            prop_assert!(t.bucket_count() > initial);
        }
        prop_assert_eq!(t.len(), keys.len());
        for &k in &keys {
            prop_assert_eq!(t.get(k), Some(&!k));
        }
        check_structure(&t)?;

        // A fresh cursor visits exactly the inserted keys.
        let mut visited = BTreeSet::new();
        let mut c = t.cursor();
        while let Some(kv) = c.get() {
            prop_assert!(visited.insert(kv.key));
            c.advance();
        }
        prop_assert_eq!(visited, keys);
    }
}
