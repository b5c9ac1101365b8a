#![no_main]

use libfuzzer_sys::fuzz_target;
use popmap::ds::PopularityCounter;

// Fuzz PopularityCounter record sequences
//
// Checks that the leader is the first item to reach the maximum count and
// that ascending() is sorted with ties in first-recorded order.
fuzz_target!(|data: &[u8]| {
    let mut counter: PopularityCounter<u8> = PopularityCounter::new();
    let mut first_seen: Vec<u8> = Vec::new();

    for &byte in data {
        let item = byte % 24;
        if counter.count(&item) == 0 {
            first_seen.push(item);
        }
        counter.record(&item);
    }

    assert_eq!(counter.len(), first_seen.len());
    assert_eq!(counter.total(), data.len() as u64);

    let ascending = counter.ascending();
    for pair in ascending.windows(2) {
        assert!(pair[0].1 <= pair[1].1);
        if pair[0].1 == pair[1].1 {
            let a = first_seen.iter().position(|x| *x == pair[0].0);
            let b = first_seen.iter().position(|x| *x == pair[1].0);
            assert!(a < b);
        }
    }

    if let Some((_, count)) = counter.most_popular() {
        assert_eq!(Some(count), ascending.last().map(|(_, c)| *c));
    } else {
        assert!(data.is_empty());
    }

    counter.check_invariants().unwrap();
});
