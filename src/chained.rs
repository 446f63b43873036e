//! Separate-chaining companion to the open-addressing tables.
//!
//! Collisions land in a per-home bucket instead of probing onward, so
//! inserts of non-reserved keys cannot fail and duplicates are permitted —
//! the chain simply grows. Kept alongside the probing tables to compare
//! collision-resolution behavior on the same key contract.

use crate::probe::ProbeKey;

#[derive(Clone, Debug)]
pub struct ChainedTable<K> {
    buckets: Vec<Vec<K>>,
    len: usize,
}

impl<K: ProbeKey> ChainedTable<K> {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "table capacity must be nonzero");
        Self {
            buckets: vec![Vec::new(); capacity],
            len: 0,
        }
    }

    /// Number of home buckets, fixed at construction. Chains grow without
    /// bound, so this is not an item limit.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored keys, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `key` to its home bucket. Fails only for the reserved
    /// sentinel; duplicates are accepted.
    pub fn insert(&mut self, key: K) -> bool {
        if key.is_reserved() {
            return false;
        }
        let home = key.home(self.buckets.len());
        self.buckets[home].push(key);
        self.len += 1;
        true
    }

    pub fn search(&self, key: K) -> bool {
        if key.is_reserved() {
            return false;
        }
        let home = key.home(self.buckets.len());
        self.buckets[home].contains(&key)
    }

    /// Remove the first stored copy of `key`, preserving chain order.
    pub fn remove(&mut self, key: K) -> bool {
        if key.is_reserved() {
            return false;
        }
        let home = key.home(self.buckets.len());
        match self.buckets[home].iter().position(|k| *k == key) {
            Some(at) => {
                self.buckets[home].remove(at);
                self.len -= 1;
                true
            }
            None => false,
        }
    }
}
