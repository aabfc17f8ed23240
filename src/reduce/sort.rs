// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Sort-then-scan reduction.
//!
//! # Algorithm
//!
//! 1. Extract `(key, rank)` once per record and sort all records by
//!    key descending, then rank descending, then input index ascending.
//! 2. Walk the sorted run. The first record of each run of equal keys is the
//!    representative; everything after it in the run is dominated.
//!
//! The index is part of the sort key, so ties resolve to the earliest record
//! whether or not the sort is stable. That lets us use `sort_unstable_by`.
//!
//! Step 1 happens eagerly inside `reduce`. Step 2 is the returned
//! `SortedScan`, which yields representatives on demand. It is single-pass:
//! to scan again, reduce again.
//!
//! Cost: O(n log n) sort, O(n) scan, O(n) for the sorted buffer.

use std::iter::FusedIterator;

use crate::compare::{Comparator, KeyEquality, NaturalOrder, Structural};
use crate::error::{require_source, Result};
use crate::reduce::Reducer;

/// Reduces by sorting the whole input.
#[derive(Clone, Copy, Debug)]
pub struct SortReducer<KF, SF, RC = NaturalOrder, KE = Structural, KC = NaturalOrder> {
    key_of: KF,
    rank_of: SF,
    rank_cmp: RC,
    key_eq: KE,
    key_cmp: KC,
}

impl<KF, SF> SortReducer<KF, SF> {
    /// Create a reducer with natural key and rank order and structural key
    /// equality.
    pub fn new(key_of: KF, rank_of: SF) -> SortReducer<KF, SF> {
        return SortReducer {
            key_of,
            rank_of,
            rank_cmp: NaturalOrder,
            key_eq: Structural,
            key_cmp: NaturalOrder,
        };
    }
}

impl<KF, SF, RC, KE, KC> SortReducer<KF, SF, RC, KE, KC> {
    pub fn with_rank_cmp<C>(self, rank_cmp: C) -> SortReducer<KF, SF, C, KE, KC> {
        return SortReducer {
            key_of: self.key_of,
            rank_of: self.rank_of,
            rank_cmp,
            key_eq: self.key_eq,
            key_cmp: self.key_cmp,
        };
    }

    pub fn with_key_eq<E>(self, key_eq: E) -> SortReducer<KF, SF, RC, E, KC> {
        return SortReducer {
            key_of: self.key_of,
            rank_of: self.rank_of,
            rank_cmp: self.rank_cmp,
            key_eq,
            key_cmp: self.key_cmp,
        };
    }

    /// Order keys for scanning. Must agree with the key equality.
    pub fn with_key_cmp<C>(self, key_cmp: C) -> SortReducer<KF, SF, RC, KE, C> {
        return SortReducer {
            key_of: self.key_of,
            rank_of: self.rank_of,
            rank_cmp: self.rank_cmp,
            key_eq: self.key_eq,
            key_cmp,
        };
    }

    /// Sort a present source and return the scan over it.
    pub fn reduce_slice<'s, 'a, T, K, S>(
        &'s self,
        source: &'a [T],
    ) -> SortedScan<'a, T, K, S, &'s KE>
    where
        KF: Fn(&T) -> K,
        SF: Fn(&T) -> S,
        RC: Comparator<S>,
        KE: KeyEquality<K>,
        KC: Comparator<K>,
    {
        return SortedScan::new(
            source,
            &self.key_of,
            &self.rank_of,
            &self.key_cmp,
            &self.rank_cmp,
            &self.key_eq,
        );
    }
}

impl<T, K, S, KF, SF, RC, KE, KC> Reducer<T, K, S> for SortReducer<KF, SF, RC, KE, KC>
where
    KF: Fn(&T) -> K,
    SF: Fn(&T) -> S,
    RC: Comparator<S>,
    KE: KeyEquality<K>,
    KC: Comparator<K>,
{
    type Iter<'s, 'a>
        = SortedScan<'a, T, K, S, &'s KE>
    where
        Self: 's,
        T: 'a;

    fn name(&self) -> &'static str {
        return "sort";
    }

    fn reduce<'s, 'a>(&'s self, source: Option<&'a [T]>) -> Result<Self::Iter<'s, 'a>> {
        let source = require_source(source, "sort")?;
        return Ok(self.reduce_slice(source));
    }
}

/// A record with its extracted keys and input position.
struct Entry<'a, T, K, S> {
    key: K,
    rank: S,
    index: usize,
    record: &'a T,
}

/// Lazy scan over a sorted buffer, yielding the head of each key run.
pub struct SortedScan<'a, T, K, S, E> {
    sorted: std::vec::IntoIter<Entry<'a, T, K, S>>,
    /// Key of the last record yielded; `None` before the first.
    previous: Option<K>,
    key_eq: E,
}

impl<'a, T, K, S, E> SortedScan<'a, T, K, S, E>
where
    E: KeyEquality<K>,
{
    /// Sort `source` and position the scan before the first record.
    pub(crate) fn new<KF, SF, KC, RC>(
        source: &'a [T],
        key_of: &KF,
        rank_of: &SF,
        key_cmp: &KC,
        rank_cmp: &RC,
        key_eq: E,
    ) -> SortedScan<'a, T, K, S, E>
    where
        KF: Fn(&T) -> K,
        SF: Fn(&T) -> S,
        KC: Comparator<K>,
        RC: Comparator<S>,
    {
        let mut entries: Vec<Entry<'a, T, K, S>> = source
            .iter()
            .enumerate()
            .map(|(index, record)| Entry {
                key: key_of(record),
                rank: rank_of(record),
                index,
                record,
            })
            .collect();

        entries.sort_unstable_by(|a, b| {
            return key_cmp
                .compare(&b.key, &a.key)
                .then_with(|| rank_cmp.compare(&b.rank, &a.rank))
                .then_with(|| a.index.cmp(&b.index));
        });

        #[cfg(debug_assertions)]
        assert_key_order_agrees(&entries, key_cmp, &key_eq);

        tracing::debug!(strategy = "sort", input = source.len(), "sorted");
        return SortedScan { sorted: entries.into_iter(), previous: None, key_eq };
    }

    /// Records not yet looked at, representatives and dominated alike.
    pub fn remaining(&self) -> usize {
        return self.sorted.len();
    }
}

impl<'a, T, K, S, E> Iterator for SortedScan<'a, T, K, S, E>
where
    E: KeyEquality<K>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        for entry in self.sorted.by_ref() {
            if let Some(previous) = &self.previous {
                if self.key_eq.equals(previous, &entry.key) {
                    continue;
                }
            }
            self.previous = Some(entry.key);
            return Some(entry.record);
        }
        return None;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sorted.len();
        // Before the first yield, a non-empty buffer holds at least one key.
        let lower = match self.previous {
            None => remaining.min(1),
            Some(_) => 0,
        };
        return (lower, Some(remaining));
    }
}

impl<T, K, S, E: KeyEquality<K>> FusedIterator for SortedScan<'_, T, K, S, E> {}

/// Panics unless every key's records form one contiguous run of keys that
/// compare `Equal`. A key order that disagrees with the key equality either
/// splits a key across runs (it is emitted twice) or orders its records by
/// key before rank (the wrong one is emitted).
#[cfg(debug_assertions)]
fn assert_key_order_agrees<T, K, S, KC, E>(entries: &[Entry<'_, T, K, S>], key_cmp: &KC, key_eq: &E)
where
    KC: Comparator<K>,
    E: KeyEquality<K>,
{
    use std::hash::Hasher;

    // Run heads bucketed by key hash.
    let mut heads: rustc_hash::FxHashMap<u64, Vec<usize>> = rustc_hash::FxHashMap::default();
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 && key_eq.equals(&entries[index - 1].key, &entry.key) {
            assert!(
                key_cmp.compare(&entries[index - 1].key, &entry.key) == std::cmp::Ordering::Equal,
                "key order disagrees with key equality: equal keys compare unequal"
            );
            continue;
        }
        let mut hasher = rustc_hash::FxHasher::default();
        key_eq.hash(&entry.key, &mut hasher);
        let bucket = heads.entry(hasher.finish()).or_default();
        assert!(
            !bucket.iter().any(|&head| key_eq.equals(&entries[head].key, &entry.key)),
            "key order disagrees with key equality: one key sorted into several runs"
        );
        bucket.push(index);
    }
}
