//! Comparator builders for `sort_by` and friends.
//!
//! `comparing` turns a key extraction closure into an `Ordering`
//! function. Multi-key sorts chain with `Ordering::then_with`;
//! `comparing2` covers the common two-key case directly.

use std::cmp::Ordering;

/// Compare two values by an extracted key, ascending.
///
/// ```
/// use comb_ops::comparing;
///
/// let mut words = vec!["kiwi", "fig", "banana"];
/// words.sort_by(comparing(|w: &&str| w.len()));
/// assert_eq!(words, ["fig", "kiwi", "banana"]);
/// ```
pub fn comparing<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
    K: Ord,
{
    move |a, b| key(a).cmp(&key(b))
}

/// Compare two values by an extracted key, descending.
pub fn comparing_desc<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
    K: Ord,
{
    move |a, b| key(b).cmp(&key(a))
}

/// Compare by a primary key, breaking ties with a secondary key.
pub fn comparing2<T, K1, K2, F, G>(primary: F, secondary: G) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K1,
    G: Fn(&T) -> K2,
    K1: Ord,
    K2: Ord,
{
    move |a, b| primary(a).cmp(&primary(b)).then_with(|| secondary(a).cmp(&secondary(b)))
}
