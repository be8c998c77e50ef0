//! Order-preserving set operations via linear scan.
//!
//! These keep the member order of their first argument and resolve
//! duplicates by first occurrence, so they behave predictably on
//! unsorted input. The `_by` variants take the equivalence relation as
//! a predicate; `nub_by` passes the already-kept element first, which
//! permits asymmetric relations (see the coprimality example below).

/// Remove duplicates, keeping the first occurrence of each element.
///
/// Idempotent: `nub(&nub(xs)) == nub(xs)`.
pub fn nub<T>(xs: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    nub_by(|kept, x| kept == x, xs)
}

/// Remove "duplicates" under an arbitrary relation.
///
/// A candidate is dropped when `pred(kept, candidate)` holds for any
/// element already kept. With an equivalence predicate this is plain
/// de-duplication; with a coarser relation it acts as a sieve:
///
/// ```
/// use comb_list::nub_by;
/// use comb_ops::gcd;
///
/// let candidates: Vec<i64> = (2..=20).collect();
/// let primes = nub_by(|&kept, &x| gcd(kept, x) > 1, &candidates);
/// assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19]);
/// ```
pub fn nub_by<T, F>(pred: F, xs: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut kept: Vec<T> = Vec::new();
    for x in xs {
        if !kept.iter().any(|k| pred(k, x)) {
            kept.push(x.clone());
        }
    }
    kept
}

/// List union: `xs` followed by the members of `ys` not already
/// present.
///
/// Duplicates in `xs` survive; `ys` is de-duplicated against both `xs`
/// and itself.
pub fn union<T>(xs: &[T], ys: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    union_by(|a, b| a == b, xs, ys)
}

/// `union` under an arbitrary equivalence predicate.
pub fn union_by<T, F>(pred: F, xs: &[T], ys: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut out = xs.to_vec();
    for y in ys {
        if !out.iter().any(|o| pred(o, y)) {
            out.push(y.clone());
        }
    }
    out
}

/// List intersection: the members of `xs` that also occur in `ys`.
///
/// Duplicates in `xs` survive when matched.
pub fn intersect<T>(xs: &[T], ys: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    intersect_by(|a, b| a == b, xs, ys)
}

/// `intersect` under an arbitrary equivalence predicate.
pub fn intersect_by<T, F>(pred: F, xs: &[T], ys: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    xs.iter()
        .filter(|x| ys.iter().any(|y| pred(x, y)))
        .cloned()
        .collect()
}

/// List difference: `xs` with the first occurrence of each member of
/// `ys` removed.
pub fn difference<T>(xs: &[T], ys: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut out = xs.to_vec();
    for y in ys {
        if let Some(pos) = out.iter().position(|x| x == y) {
            out.remove(pos);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nub_keeps_first_occurrence() {
        assert_eq!(nub(&[1, 2, 1, 3, 2]), [1, 2, 3]);
        assert_eq!(nub(&Vec::<i64>::new()), Vec::<i64>::new());
    }

    #[test]
    fn nub_is_idempotent() {
        let once = nub(&[3, 1, 3, 2, 1, 2]);
        assert_eq!(nub(&once), once);
    }

    #[test]
    fn union_preserves_left_duplicates() {
        assert_eq!(union(&[1, 2, 2, 3], &[3, 4, 4, 5]), [1, 2, 2, 3, 4, 5]);
        assert_eq!(union(&[], &[2, 2, 1]), [2, 1]);
    }

    #[test]
    fn intersect_keeps_left_order_and_duplicates() {
        assert_eq!(intersect(&[1, 2, 2, 3, 4], &[4, 2]), [2, 2, 4]);
        assert_eq!(intersect(&[1, 3], &[2, 4]), Vec::<i64>::new());
    }

    #[test]
    fn intersect_by_relation() {
        let same_len = |a: &&str, b: &&str| a.len() == b.len();
        assert_eq!(intersect_by(same_len, &["ab", "abc", "a"], &["xy"]), ["ab"]);
    }

    #[test]
    fn difference_removes_first_occurrences() {
        assert_eq!(difference(&[1, 2, 1, 3], &[1, 3]), [2, 1]);
        assert_eq!(difference(&[1, 2], &[5]), [1, 2]);
    }
}
