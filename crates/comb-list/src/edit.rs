//! In-place insertion and deletion.
//!
//! These mutate the vector they are given. That is the point: sorted
//! insertion and first-occurrence removal without rebuilding the
//! vector.

use std::cmp::Ordering;

/// Insert into a sorted vector, keeping it sorted.
///
/// The element lands before the first existing element that compares
/// greater, so equal elements keep insertion order.
pub fn insert<T: Ord>(xs: &mut Vec<T>, x: T) {
    insert_by(xs, T::cmp, x);
}

/// Sorted insertion under a custom comparator.
///
/// Linear scan; the vector is assumed sorted under `cmp`.
pub fn insert_by<T, F>(xs: &mut Vec<T>, cmp: F, x: T)
where
    F: Fn(&T, &T) -> Ordering,
{
    let pos = xs
        .iter()
        .position(|y| cmp(y, &x) == Ordering::Greater)
        .unwrap_or(xs.len());
    xs.insert(pos, x);
}

/// Remove the first occurrence of `x`. Returns whether anything was
/// removed.
pub fn delete<T: PartialEq>(xs: &mut Vec<T>, x: &T) -> bool {
    delete_by(xs, |y| y == x)
}

/// Remove the first element satisfying the predicate. Returns whether
/// anything was removed.
pub fn delete_by<T, F>(xs: &mut Vec<T>, pred: F) -> bool
where
    F: Fn(&T) -> bool,
{
    match xs.iter().position(|y| pred(y)) {
        Some(pos) => {
            xs.remove(pos);
            true
        }
        None => false,
    }
}
