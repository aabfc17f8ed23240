// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Slice methods for the common case: default comparators, present source.

use std::hash::Hash;

use crate::compare::{NaturalOrder, Structural};
use crate::reduce::{GroupingReducer, HashMapReducer, SortedScan};

/// Distinct-by-key, keeping the record with the maximum rank.
pub trait DistinctMaxExt<T> {
    /// Group, then pick each group's maximum. First-occurrence key order.
    fn distinct_by_max<K, S>(&self, key_of: impl Fn(&T) -> K, rank_of: impl Fn(&T) -> S) -> Vec<&T>
    where
        K: Eq + Hash,
        S: Ord;

    /// Sort, then lazily scan. Descending key order.
    fn distinct_by_max_sorted<K, S>(
        &self,
        key_of: impl Fn(&T) -> K,
        rank_of: impl Fn(&T) -> S,
    ) -> SortedScan<'_, T, K, S, Structural>
    where
        K: Ord + Hash,
        S: Ord;

    /// Single pass with a best-so-far map. First-occurrence key order.
    fn distinct_by_max_hash<K, S>(
        &self,
        key_of: impl Fn(&T) -> K,
        rank_of: impl Fn(&T) -> S,
    ) -> Vec<&T>
    where
        K: Eq + Hash,
        S: Ord;
}

impl<T> DistinctMaxExt<T> for [T] {
    fn distinct_by_max<K, S>(&self, key_of: impl Fn(&T) -> K, rank_of: impl Fn(&T) -> S) -> Vec<&T>
    where
        K: Eq + Hash,
        S: Ord,
    {
        return GroupingReducer::new(key_of, rank_of).reduce_slice(self);
    }

    fn distinct_by_max_sorted<K, S>(
        &self,
        key_of: impl Fn(&T) -> K,
        rank_of: impl Fn(&T) -> S,
    ) -> SortedScan<'_, T, K, S, Structural>
    where
        K: Ord + Hash,
        S: Ord,
    {
        return SortedScan::new(self, &key_of, &rank_of, &NaturalOrder, &NaturalOrder, Structural);
    }

    fn distinct_by_max_hash<K, S>(
        &self,
        key_of: impl Fn(&T) -> K,
        rank_of: impl Fn(&T) -> S,
    ) -> Vec<&T>
    where
        K: Eq + Hash,
        S: Ord,
    {
        return HashMapReducer::new(key_of, rank_of).reduce_slice(self);
    }
}
