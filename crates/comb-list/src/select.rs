//! Element selection. Absence is an `Option`, never a panic.

use std::cmp::Ordering;

/// First element of a slice.
pub fn first<T>(xs: &[T]) -> Option<&T> {
    xs.first()
}

/// Last element of a slice.
pub fn last<T>(xs: &[T]) -> Option<&T> {
    xs.last()
}

/// First element satisfying the predicate.
pub fn first_by<T, F>(pred: F, xs: &[T]) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    xs.iter().find(|x| pred(x))
}

/// Last element satisfying the predicate.
pub fn last_by<T, F>(pred: F, xs: &[T]) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    xs.iter().rev().find(|x| pred(x))
}

/// Largest element under the given comparator. Ties go to the
/// latest occurrence.
pub fn maximum_by<T, F>(cmp: F, xs: &[T]) -> Option<&T>
where
    F: Fn(&T, &T) -> Ordering,
{
    xs.iter().max_by(|a, b| cmp(a, b))
}

/// Smallest element under the given comparator. Ties go to the
/// earliest occurrence.
pub fn minimum_by<T, F>(cmp: F, xs: &[T]) -> Option<&T>
where
    F: Fn(&T, &T) -> Ordering,
{
    xs.iter().min_by(|a, b| cmp(a, b))
}

/// Membership predicate: `elem(xs)` tests whether a value occurs in
/// `xs`.
///
/// ```
/// use comb_list::elem;
///
/// let xs: Vec<i64> = [1, 2, 3, 4, 3].into_iter().filter(elem(vec![1, 3])).collect();
/// assert_eq!(xs, [1, 3, 3]);
/// ```
pub fn elem<T: PartialEq>(xs: Vec<T>) -> impl Fn(&T) -> bool {
    move |x| xs.contains(x)
}

/// Negated membership predicate.
pub fn not_elem<T: PartialEq>(xs: Vec<T>) -> impl Fn(&T) -> bool {
    move |x| !xs.contains(x)
}
