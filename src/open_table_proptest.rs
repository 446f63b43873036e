#![cfg(test)]

// Property tests for the probe sequences kept inside the crate so they can
// drive `OpenTable::probe` directly without widening the public surface.

use crate::open_table::OpenTable;
use crate::probe::ProbeKey;
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = i64> {
    // Any non-reserved key, including negatives.
    i64::MIN + 1..=i64::MAX
}

proptest! {
    // Property: a linear probe sequence is one full cycle — a permutation
    // of every slot index, starting at the key's home.
    #[test]
    fn linear_probe_covers_every_slot(key in arb_key(), capacity in 1usize..64) {
        let t: OpenTable<i64> = OpenTable::linear(capacity);
        let seq: Vec<usize> = t.probe(key).collect();
        prop_assert_eq!(seq.len(), capacity);
        prop_assert_eq!(seq[0], key.home(capacity));
        let mut sorted = seq.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), capacity, "sequence must not repeat a slot");
    }

    // Property: quadratic offsets grow strictly and never wrap — every
    // yielded position is in bounds, begins at home, and the sequence is
    // cut off at the array boundary rather than continuing modulo capacity.
    #[test]
    fn quadratic_probe_stays_in_bounds(key in arb_key(), capacity in 1usize..64) {
        let t: OpenTable<i64> = OpenTable::quadratic(capacity);
        let seq: Vec<usize> = t.probe(key).collect();
        let home = key.home(capacity);
        prop_assert!(!seq.is_empty());
        prop_assert_eq!(seq[0], home);
        for (k, &pos) in seq.iter().enumerate() {
            prop_assert_eq!(pos, home + k * k);
            prop_assert!(pos < capacity);
        }
    }

    // Property: double hashing starts at home, advances by a fixed nonzero
    // stride, and stays bounded by one full cycle.
    #[test]
    fn double_hash_probe_uses_fixed_stride(key in arb_key(), capacity in 2usize..64) {
        let t: OpenTable<i64> = OpenTable::double_hash(capacity);
        let seq: Vec<usize> = t.probe(key).collect();
        prop_assert_eq!(seq.len(), capacity);
        prop_assert_eq!(seq[0], key.home(capacity));
        let stride = (seq[1] + capacity - seq[0]) % capacity;
        prop_assert!(stride >= 1 || capacity == 1);
        for w in seq.windows(2) {
            prop_assert_eq!((w[1] + capacity - w[0]) % capacity, stride);
        }
    }

    // Property: whatever the strategy, a key accepted by insert is found by
    // search and gone after remove — the round-trip contract holds on a
    // table that never fills.
    #[test]
    fn round_trip_on_half_empty_table(keys in proptest::collection::hash_set(-500i64..500, 1..16)) {
        for table in [OpenTable::linear(64), OpenTable::quadratic(64), OpenTable::double_hash(64)] {
            let mut t = table;
            let mut accepted = Vec::new();
            for &k in &keys {
                if t.insert(k) {
                    accepted.push(k);
                }
            }
            for &k in &accepted {
                prop_assert!(t.search(k));
            }
            for &k in &accepted {
                prop_assert!(t.remove(k));
                prop_assert!(!t.search(k));
                prop_assert!(!t.remove(k), "second remove must fail");
            }
            prop_assert!(t.is_empty());
        }
    }
}
