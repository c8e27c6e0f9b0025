//! Frequency tables with deterministic top-N extraction
//!
//! [`FrequencyTable`] is a counting map that remembers the order in which
//! each key first appeared. Top-N selection sorts by count descending and
//! breaks ties by that first-seen order, so the same inputs always produce
//! the same ranked list — reproducibility is part of the contract, not an
//! accident of hash iteration order.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::types::RankedList;

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: u64,
    first_seen: usize,
}

/// A mapping from key to non-negative count, with insertion-order memory.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    slots: FxHashMap<K, Slot>,
    next_seen: usize,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            slots: FxHashMap::default(),
            next_seen: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` occurrences of `key`. A key's first-seen index is assigned
    /// on its first insertion and never changes.
    pub fn add(&mut self, key: K, n: u64) {
        let next = self.next_seen;
        let slot = self.slots.entry(key).or_insert_with(|| {
            Slot {
                count: 0,
                first_seen: next,
            }
        });
        if slot.first_seen == next {
            self.next_seen += 1;
        }
        slot.count += n;
    }

    /// Count one occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// The count recorded for `key`, zero if absent.
    pub fn count(&self, key: &K) -> u64 {
        self.slots.get(key).map_or(0, |s| s.count)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.slots.values().map(|s| s.count).sum()
    }

    /// Merge `other` into `self`, adding counts key-wise.
    ///
    /// The source is replayed in its own first-seen order, so keys new to
    /// `self` receive first-seen indices in a deterministic sequence and
    /// the tie-break survives merging.
    pub fn merge(&mut self, other: &FrequencyTable<K>) {
        for (key, count) in other.iter_ordered() {
            self.add(key.clone(), count);
        }
    }

    /// Iterate entries in first-seen order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&K, u64)> {
        let mut entries: Vec<_> = self.slots.iter().collect();
        entries.sort_by_key(|(_, slot)| slot.first_seen);
        entries.into_iter().map(|(k, slot)| (k, slot.count))
    }

    /// Extract the top `n` entries: count descending, first-seen ascending
    /// under equal counts.
    pub fn top(&self, n: usize) -> RankedList<K> {
        let mut entries: Vec<(&K, &Slot)> = self.slots.iter().collect();
        entries.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        entries.truncate(n);
        entries
            .into_iter()
            .map(|(k, slot)| (k.clone(), slot.count))
            .collect()
    }
}
