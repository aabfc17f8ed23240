// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! The reduction contract and its three implementations.
//!
//! Every reducer keeps exactly one record per distinguishing key: the one
//! with the greatest ordering key, and among tied ranks the one that came
//! first in the input.
//!
//! | Reducer | Approach | Output | Needs on `K` |
//! |---------|----------|--------|--------------|
//! | `GroupingReducer` | group, then sort each group | eager | equality + hash |
//! | `SortReducer` | sort everything, scan run boundaries | lazy | equality + order |
//! | `HashMapReducer` | one pass, best-so-far per key | eager | equality + hash |
//!
//! Only set equality of outputs is guaranteed across reducers. Grouping and
//! HashMap happen to emit keys in first-occurrence order; Sort emits them in
//! descending key order.

use std::fmt;
use std::str::FromStr;

use crate::compare::{Comparator, KeyEquality, NaturalOrder, Structural};
use crate::error::{ReduceError, Result};

pub mod grouping;
pub mod hash_map;
pub mod sort;

pub use grouping::GroupingReducer;
pub use hash_map::HashMapReducer;
pub use sort::{SortReducer, SortedScan};

/// Reduces a borrowed sequence of `T` to one representative per key `K`,
/// chosen by maximum rank `S`.
///
/// Implementors must agree on the output set for the same input and
/// comparators, and must break rank ties in favour of the earliest record.
pub trait Reducer<T, K, S> {
    /// The sequence of representatives. May borrow the reducer for `'s`;
    /// items borrow the source for `'a`.
    type Iter<'s, 'a>: Iterator<Item = &'a T>
    where
        Self: 's,
        T: 'a;

    /// Short name used in logs and benchmark ids.
    fn name(&self) -> &'static str;

    /// Reduce `source`.
    ///
    /// Returns `ReduceError::InvalidArgument` if `source` is `None`; no
    /// extractor or comparator is called in that case.
    fn reduce<'s, 'a>(&'s self, source: Option<&'a [T]>) -> Result<Self::Iter<'s, 'a>>;
}

/// Comparator configuration for a reduction.
///
/// `rank_cmp` picks the winner within a key, `key_eq` decides which records
/// share a key, and `key_cmp` orders keys for the sort strategy. `key_cmp`
/// must be consistent with `key_eq` (equal keys compare `Equal`), otherwise
/// the sort strategy can see one key split across several runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReduceConfig<RC = NaturalOrder, KE = Structural, KC = NaturalOrder> {
    pub rank_cmp: RC,
    pub key_eq: KE,
    pub key_cmp: KC,
}

impl ReduceConfig {
    pub fn new() -> ReduceConfig {
        return ReduceConfig::default();
    }
}

impl<RC, KE, KC> ReduceConfig<RC, KE, KC> {
    pub fn with_rank_cmp<C>(self, rank_cmp: C) -> ReduceConfig<C, KE, KC> {
        return ReduceConfig { rank_cmp, key_eq: self.key_eq, key_cmp: self.key_cmp };
    }

    pub fn with_key_eq<E>(self, key_eq: E) -> ReduceConfig<RC, E, KC> {
        return ReduceConfig { rank_cmp: self.rank_cmp, key_eq, key_cmp: self.key_cmp };
    }

    pub fn with_key_cmp<C>(self, key_cmp: C) -> ReduceConfig<RC, KE, C> {
        return ReduceConfig { rank_cmp: self.rank_cmp, key_eq: self.key_eq, key_cmp };
    }
}

/// Selects a reducer by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Grouping,
    Sort,
    HashMap,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Grouping, Strategy::Sort, Strategy::HashMap];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Grouping => "grouping",
            Strategy::Sort => "sort",
            Strategy::HashMap => "hash_map",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FromStr for Strategy {
    type Err = ReduceError;

    fn from_str(s: &str) -> Result<Strategy> {
        match s {
            "grouping" | "group" | "linq" => Ok(Strategy::Grouping),
            "sort" | "sorted" => Ok(Strategy::Sort),
            "hash_map" | "hashmap" | "hash" => Ok(Strategy::HashMap),
            _ => Err(ReduceError::InvalidArgument("unknown strategy")),
        }
    }
}

/// Reduce `source` with the named strategy and the given comparators,
/// collecting the representatives.
///
/// Because the strategy is picked at runtime this demands everything any
/// strategy needs: `key_eq` for all three and `key_cmp` for Sort. With the
/// default config that means `K: Ord + Hash` and `S: Ord`.
///
/// A custom `key_eq` needs a matching `key_cmp`. Left at `NaturalOrder`,
/// Sort can split one key across several runs and return it more than once:
/// with a case-insensitive `key_eq`, `[("AB", 1), ("aa", 2), ("ab", 3)]`
/// gives `[("ab", 3), ("aa", 2)]` from Grouping and HashMap but also yields
/// `("AB", 1)` from Sort. Debug builds panic when the two disagree.
///
/// ```
/// use distinct_max::reduce::{reduce_max_by, ReduceConfig, Strategy};
///
/// let rows = [("a", 1), ("a", 5), ("a", 3)];
/// for strategy in Strategy::ALL {
///     let best = reduce_max_by(strategy, Some(&rows[..]), |r| r.0, |r| r.1, ReduceConfig::new());
///     assert_eq!(best.unwrap(), vec![&("a", 5)]);
/// }
/// ```
pub fn reduce_max_by<'a, T, K, S, KF, SF, RC, KE, KC>(
    strategy: Strategy,
    source: Option<&'a [T]>,
    key_of: KF,
    rank_of: SF,
    config: ReduceConfig<RC, KE, KC>,
) -> Result<Vec<&'a T>>
where
    KF: Fn(&T) -> K,
    SF: Fn(&T) -> S,
    RC: Comparator<S>,
    KE: KeyEquality<K>,
    KC: Comparator<K>,
{
    let ReduceConfig { rank_cmp, key_eq, key_cmp } = config;
    match strategy {
        Strategy::Grouping => {
            let reducer = GroupingReducer::new(key_of, rank_of)
                .with_rank_cmp(rank_cmp)
                .with_key_eq(key_eq);
            return Ok(reducer.reduce(source)?.collect());
        }
        Strategy::Sort => {
            let reducer = SortReducer::new(key_of, rank_of)
                .with_rank_cmp(rank_cmp)
                .with_key_eq(key_eq)
                .with_key_cmp(key_cmp);
            return Ok(reducer.reduce(source)?.collect());
        }
        Strategy::HashMap => {
            let reducer = HashMapReducer::new(key_of, rank_of)
                .with_rank_cmp(rank_cmp)
                .with_key_eq(key_eq);
            return Ok(reducer.reduce(source)?.collect());
        }
    }
}
