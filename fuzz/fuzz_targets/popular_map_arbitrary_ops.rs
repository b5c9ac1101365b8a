#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;
use popmap::PopularMap;

// Fuzz arbitrary operation sequences on PopularMap
//
// Every charged operation is mirrored into plain HashMap counters, and the
// map's reported popularity must agree with them after each step.
fuzz_target!(|data: &[u8]| {
    let mut map: PopularMap<u8, u8> = PopularMap::new();
    let mut key_counts: HashMap<u8, u64> = HashMap::new();
    let mut value_counts: HashMap<u8, u64> = HashMap::new();

    for chunk in data.chunks_exact(3) {
        let (op, key, value) = (chunk[0] % 8, chunk[1] % 32, chunk[2] % 16);

        match op {
            0 => {
                let old = map.insert(key, value);
                *key_counts.entry(key).or_default() += 1;
                *value_counts.entry(value).or_default() += 1;
                if let Some(old) = old {
                    *value_counts.entry(old).or_default() += 1;
                }
            }
            1 => {
                if let Some(v) = map.get(&key).copied() {
                    *value_counts.entry(v).or_default() += 1;
                }
                *key_counts.entry(key).or_default() += 1;
            }
            2 => {
                if let Some(v) = map.remove(&key) {
                    *value_counts.entry(v).or_default() += 1;
                }
                *key_counts.entry(key).or_default() += 1;
            }
            3 => {
                map.contains_key(&key);
                *key_counts.entry(key).or_default() += 1;
            }
            4 => {
                map.contains_value(&value);
                *value_counts.entry(value).or_default() += 1;
            }
            5 => {
                // bulk insert is free
                map.insert_all([(key, value), (value, key)]);
            }
            6 => {
                let len = map.len();
                map.clear();
                assert!(map.is_empty() || len == 0);
            }
            7 => {
                let drained: Vec<(u8, u64)> = {
                    let mut iter = map.popular_iter();
                    std::iter::from_fn(|| iter.next_with_count()).collect()
                };
                assert_eq!(drained.len(), value_counts.len());
                assert!(drained.windows(2).all(|w| w[0].1 <= w[1].1));
            }
            _ => unreachable!(),
        }

        assert_eq!(map.key_popularity(&key), key_counts.get(&key).copied().unwrap_or(0));
        assert_eq!(
            map.value_popularity(&value),
            value_counts.get(&value).copied().unwrap_or(0)
        );

        match map.popular_key() {
            Ok(top) => assert_eq!(key_counts[top], key_counts.values().copied().max().unwrap()),
            Err(_) => assert!(key_counts.is_empty()),
        }
        match map.popular_value() {
            Ok(top) => {
                assert_eq!(value_counts[top], value_counts.values().copied().max().unwrap())
            }
            Err(_) => assert!(value_counts.is_empty()),
        }
    }

    map.check_invariants().unwrap();
});
