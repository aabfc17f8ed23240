// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Distinct-by-key reduction that keeps the record with the maximum rank.
//!
//! Given records, a distinguishing key and an ordering key ("rank"), every
//! reducer returns exactly one record per distinct key: the one with the
//! greatest rank, or the earliest of several tied for greatest.
//!
//! # Quick Start
//!
//! ```
//! use distinct_max::DistinctMaxExt;
//!
//! let scores = [("ada", 3), ("bob", 7), ("ada", 9), ("bob", 7)];
//! let best = scores.distinct_by_max(|s| s.0, |s| s.1);
//! assert_eq!(best, vec![&("ada", 9), &("bob", 7)]);
//! ```
//!
//! # Strategies
//!
//! | Reducer | Approach | Cost |
//! |---------|----------|------|
//! | `GroupingReducer` | group, stable-sort each group | O(n + Σ g log g) |
//! | `SortReducer` | sort all, scan run heads lazily | O(n log n) |
//! | `HashMapReducer` | one pass, replace on strictly greater | O(n) expected |
//!
//! All three implement `reduce::Reducer` and agree on the output set. Pick one
//! by type, or by name with `reduce::reduce_max_by`.

pub mod compare;
pub mod error;
pub mod ext;
pub mod reduce;

#[cfg(feature = "bench")]
pub mod batch;

pub use error::{ReduceError, Result};
pub use ext::DistinctMaxExt;
pub use reduce::{GroupingReducer, HashMapReducer, ReduceConfig, Reducer, SortReducer, Strategy};
