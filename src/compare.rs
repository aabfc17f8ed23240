// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Comparators for distinguishing keys and ordering keys.
//!
//! Reducers never call `Ord` or `Eq` on keys directly. They go through one of
//! two traits so callers can swap in their own notion of order or sameness:
//!
//! - `Comparator<S>`: a total order. `NaturalOrder` uses `Ord`; any
//!   `Fn(&S, &S) -> Ordering` closure also works.
//! - `KeyEquality<K>`: an equivalence plus a hash consistent with it.
//!   `Structural` uses `Eq + Hash`; `Projected` compares keys through a
//!   projection (e.g. lowercasing).

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A total order over `S`.
pub trait Comparator<S> {
    fn compare(&self, a: &S, b: &S) -> Ordering;
}

/// The order given by `S: Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<S: Ord> Comparator<S> for NaturalOrder {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        return a.cmp(b);
    }
}

impl<S, F> Comparator<S> for F
where
    F: Fn(&S, &S) -> Ordering,
{
    fn compare(&self, a: &S, b: &S) -> Ordering {
        return self(a, b);
    }
}

/// Inverts the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<S, C: Comparator<S>> Comparator<S> for Reversed<C> {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        return self.0.compare(b, a);
    }
}

/// An equivalence relation over `K`, together with a hash that agrees with
/// it: `equals(a, b)` implies `hash(a) == hash(b)`.
pub trait KeyEquality<K> {
    fn equals(&self, a: &K, b: &K) -> bool;

    fn hash<H: Hasher>(&self, key: &K, state: &mut H);
}

/// Equality given by `K: Eq + Hash`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Structural;

impl<K: Eq + Hash> KeyEquality<K> for Structural {
    fn equals(&self, a: &K, b: &K) -> bool {
        return a == b;
    }

    fn hash<H: Hasher>(&self, key: &K, state: &mut H) {
        key.hash(state);
    }
}

/// Keys are equal when their projections are equal.
///
/// ```
/// use distinct_max::compare::{KeyEquality, Projected};
///
/// let ignore_case = Projected(|k: &String| k.to_lowercase());
/// assert!(ignore_case.equals(&"Ada".to_string(), &"ADA".to_string()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Projected<F>(pub F);

impl<K, P, F> KeyEquality<K> for Projected<F>
where
    F: Fn(&K) -> P,
    P: Eq + Hash,
{
    fn equals(&self, a: &K, b: &K) -> bool {
        return (self.0)(a) == (self.0)(b);
    }

    fn hash<H: Hasher>(&self, key: &K, state: &mut H) {
        (self.0)(key).hash(state);
    }
}

impl<K, E: KeyEquality<K>> KeyEquality<K> for &E {
    fn equals(&self, a: &K, b: &K) -> bool {
        return (**self).equals(a, b);
    }

    fn hash<H: Hasher>(&self, key: &K, state: &mut H) {
        (**self).hash(key, state);
    }
}

/// A key paired with the equality it should be hashed and compared under,
/// so it can live in an ordinary hash map.
pub(crate) struct Keyed<'e, K, E> {
    pub key: K,
    equality: &'e E,
}

impl<'e, K, E> Keyed<'e, K, E> {
    pub fn new(key: K, equality: &'e E) -> Keyed<'e, K, E> {
        return Keyed { key, equality };
    }
}

impl<K, E: KeyEquality<K>> PartialEq for Keyed<'_, K, E> {
    fn eq(&self, other: &Self) -> bool {
        return self.equality.equals(&self.key, &other.key);
    }
}

impl<K, E: KeyEquality<K>> Eq for Keyed<'_, K, E> {}

impl<K, E: KeyEquality<K>> Hash for Keyed<'_, K, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.equality.hash(&self.key, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn natural_order_matches_ord() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&7u64, &7u64), Ordering::Equal);
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
    }

    #[test]
    fn reversed_inverts() {
        let rev = Reversed(NaturalOrder);
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert_eq!(rev.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn keyed_uses_projected_equality_in_sets() {
        let ignore_case = Projected(|k: &&str| k.to_lowercase());
        let mut seen = FxHashSet::default();
        assert!(seen.insert(Keyed::new("Ada", &ignore_case)));
        assert!(!seen.insert(Keyed::new("ADA", &ignore_case)));
        assert!(seen.insert(Keyed::new("Bob", &ignore_case)));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn structural_through_reference() {
        let eq = &Structural;
        assert!(KeyEquality::<(u8, u8)>::equals(&eq, &(1, 2), &(1, 2)));
        assert!(!KeyEquality::<(u8, u8)>::equals(&eq, &(1, 2), &(2, 1)));
    }
}
