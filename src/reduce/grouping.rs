// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Group-then-pick reduction.
//!
//! Records are partitioned by distinguishing key, in order of first
//! occurrence. Each group is then stable-sorted by rank, descending, and its
//! head is the representative. Stability is what makes the earliest of
//! several tied maxima win.
//!
//! Cost: O(n) to group, O(g log g) per group of size g, O(n) extra space.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::compare::{Comparator, KeyEquality, Keyed, NaturalOrder, Structural};
use crate::error::{require_source, Result};
use crate::reduce::Reducer;

/// Most groups in deduplication workloads are tiny.
type Group<'a, T, S> = SmallVec<[(S, &'a T); 4]>;

/// Reduces by materializing every group.
#[derive(Clone, Copy, Debug)]
pub struct GroupingReducer<KF, SF, RC = NaturalOrder, KE = Structural> {
    key_of: KF,
    rank_of: SF,
    rank_cmp: RC,
    key_eq: KE,
}

impl<KF, SF> GroupingReducer<KF, SF> {
    /// Create a reducer with natural rank order and structural key equality.
    pub fn new(key_of: KF, rank_of: SF) -> GroupingReducer<KF, SF> {
        return GroupingReducer { key_of, rank_of, rank_cmp: NaturalOrder, key_eq: Structural };
    }
}

impl<KF, SF, RC, KE> GroupingReducer<KF, SF, RC, KE> {
    pub fn with_rank_cmp<C>(self, rank_cmp: C) -> GroupingReducer<KF, SF, C, KE> {
        return GroupingReducer {
            key_of: self.key_of,
            rank_of: self.rank_of,
            rank_cmp,
            key_eq: self.key_eq,
        };
    }

    pub fn with_key_eq<E>(self, key_eq: E) -> GroupingReducer<KF, SF, RC, E> {
        return GroupingReducer {
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
        let mut slots: FxHashMap<Keyed<'_, K, KE>, usize> = FxHashMap::default();
        let mut groups: Vec<Group<'a, T, S>> = Vec::new();

        for record in source {
            let key = Keyed::new((self.key_of)(record), &self.key_eq);
            let slot = *slots.entry(key).or_insert_with(|| {
                groups.push(SmallVec::new());
                groups.len() - 1
            });
            groups[slot].push(((self.rank_of)(record), record));
        }

        let representatives: Vec<&'a T> = groups
            .into_iter()
            .map(|mut group| {
                // Stable, so equal ranks keep input order.
                group.sort_by(|a, b| self.rank_cmp.compare(&b.0, &a.0));
                return group[0].1;
            })
            .collect();

        tracing::debug!(
            strategy = "grouping",
            input = source.len(),
            output = representatives.len(),
            "reduced"
        );
        return representatives;
    }
}

impl<T, K, S, KF, SF, RC, KE> Reducer<T, K, S> for GroupingReducer<KF, SF, RC, KE>
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
        return "grouping";
    }

    fn reduce<'s, 'a>(&'s self, source: Option<&'a [T]>) -> Result<Self::Iter<'s, 'a>> {
        let source = require_source(source, "grouping")?;
        return Ok(self.reduce_slice(source).into_iter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Projected;
    use crate::error::ReduceError;

    #[derive(Debug, PartialEq)]
    struct Row {
        key: &'static str,
        rank: u32,
        id: u32,
    }

    fn row(key: &'static str, rank: u32, id: u32) -> Row {
        return Row { key, rank, id };
    }

    type RowReducer = GroupingReducer<fn(&Row) -> &'static str, fn(&Row) -> u32>;

    fn key_of(r: &Row) -> &'static str {
        return r.key;
    }

    fn rank_of(r: &Row) -> u32 {
        return r.rank;
    }

    fn reducer() -> RowReducer {
        return GroupingReducer::new(key_of as fn(&Row) -> &'static str, rank_of as fn(&Row) -> u32);
    }

    #[test]
    fn picks_group_maximum() {
        let rows = [row("a", 1, 0), row("a", 5, 1), row("a", 3, 2)];
        let best = reducer().reduce_slice(&rows);
        assert_eq!(best, vec![&rows[1]]);
    }

    #[test]
    fn groups_in_first_occurrence_order() {
        let rows = [row("b", 1, 0), row("a", 2, 1), row("b", 4, 2), row("c", 0, 3)];
        let ids: Vec<u32> = reducer().reduce_slice(&rows).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn tie_goes_to_earliest() {
        let rows = [row("a", 5, 1), row("a", 2, 2), row("a", 5, 3), row("a", 5, 4)];
        let best = reducer().reduce_slice(&rows);
        assert_eq!(best, vec![&rows[0]]);
    }

    #[test]
    fn groups_spill_past_inline_capacity() {
        let rows: Vec<Row> = (0..20).map(|i| row("a", (i * 7) % 13, i)).collect();
        let best = reducer().reduce_slice(&rows);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].rank, 12);
        assert_eq!(best[0].id, 11);
    }

    #[test]
    fn custom_key_equality_merges_groups() {
        let rows = [row("Ada", 1, 0), row("ADA", 9, 1), row("bob", 3, 2)];
        let reducer = GroupingReducer::new(|r: &Row| r.key, |r: &Row| r.rank)
            .with_key_eq(Projected(|k: &&str| k.to_lowercase()));
        let best = reducer.reduce_slice(&rows);
        assert_eq!(best, vec![&rows[1], &rows[2]]);
    }

    #[test]
    fn absent_source() {
        let source: Option<&[Row]> = None;
        let result = Reducer::reduce(&reducer(), source);
        assert_eq!(result.unwrap_err(), ReduceError::InvalidArgument("source is absent"));
    }
}
