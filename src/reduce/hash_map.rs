// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Single-pass best-so-far reduction.
//!
//! Keeps one slot per distinct key. A later record replaces the slot only
//! when its rank is strictly greater, so a tie never displaces the earlier
//! record. No sorting, stable or otherwise, is involved.
//!
//! Cost: O(n) expected, O(u) extra space for u distinct keys.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::compare::{Comparator, KeyEquality, Keyed, NaturalOrder, Structural};
use crate::error::{require_source, Result};
use crate::reduce::Reducer;

/// Reduces with a map from key to the best record seen so far.
#[derive(Clone, Copy, Debug)]
pub struct HashMapReducer<KF, SF, RC = NaturalOrder, KE = Structural> {
    key_of: KF,
    rank_of: SF,
    rank_cmp: RC,
    key_eq: KE,
}

impl<KF, SF> HashMapReducer<KF, SF> {
    pub fn new(key_of: KF, rank_of: SF) -> HashMapReducer<KF, SF> {
        return HashMapReducer { key_of, rank_of, rank_cmp: NaturalOrder, key_eq: Structural };
    }
}

impl<KF, SF, RC, KE> HashMapReducer<KF, SF, RC, KE> {
    pub fn with_rank_cmp<C>(self, rank_cmp: C) -> HashMapReducer<KF, SF, C, KE> {
        return HashMapReducer {
            key_of: self.key_of,
            rank_of: self.rank_of,
            rank_cmp,
            key_eq: self.key_eq,
        };
    }

    pub fn with_key_eq<E>(self, key_eq: E) -> HashMapReducer<KF, SF, RC, E> {
        return HashMapReducer {
            key_of: self.key_of,
            rank_of: self.rank_of,
            rank_cmp: self.rank_cmp,
            key_eq,
        };
    }

    /// Reduce a present source. Representatives come out in first-occurrence
    /// order of their keys.
    pub fn reduce_slice<'a, T, K, S>(&self, source: &'a [T]) -> Vec<&'a T>
    where
        KF: Fn(&T) -> K,
        SF: Fn(&T) -> S,
        RC: Comparator<S>,
        KE: KeyEquality<K>,
    {
        // Map values index into `best` so output keeps first-occurrence order.
        let mut slots: FxHashMap<Keyed<'_, K, KE>, usize> = FxHashMap::default();
        let mut best: Vec<(S, &'a T)> = Vec::new();
        let mut replaced = 0usize;

        for record in source {
            let key = Keyed::new((self.key_of)(record), &self.key_eq);
            let rank = (self.rank_of)(record);
            match slots.entry(key) {
                Entry::Occupied(slot) => {
                    let current = &mut best[*slot.get()];
                    if self.rank_cmp.compare(&rank, &current.0) == Ordering::Greater {
                        *current = (rank, record);
                        replaced += 1;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(best.len());
                    best.push((rank, record));
                }
            }
        }

        tracing::debug!(
            strategy = "hash_map",
            input = source.len(),
            output = best.len(),
            replaced,
            "reduced"
        );
        return best.into_iter().map(|(_, record)| record).collect();
    }
}

impl<T, K, S, KF, SF, RC, KE> Reducer<T, K, S> for HashMapReducer<KF, SF, RC, KE>
where
    KF: Fn(&T) -> K,
    SF: Fn(&T) -> S,
    RC: Comparator<S>,
    KE: KeyEquality<K>,
{
    type Iter<'s, 'a>
        = std::vec::IntoIter<&'a T>
    where
        Self: 's,
        T: 'a;

    fn name(&self) -> &'static str {
        return "hash_map";
    }

    fn reduce<'s, 'a>(&'s self, source: Option<&'a [T]>) -> Result<Self::Iter<'s, 'a>> {
        let source = require_source(source, "hash_map")?;
        return Ok(self.reduce_slice(source).into_iter());
    }
}
