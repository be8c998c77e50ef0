//! Adjacent grouping.
//!
//! Only neighbouring equal elements are grouped, so concatenating the
//! groups always restores the input. Sort first for a full partition
//! by key.

/// Group adjacent equal elements into runs.
///
/// ```
/// use comb_list::group;
///
/// assert_eq!(group(&[1, 1, 2, 1]), [vec![1, 1], vec![2], vec![1]]);
/// ```
pub fn group<T>(xs: &[T]) -> Vec<Vec<T>>
where
    T: PartialEq + Clone,
{
    group_by(|a, b| a == b, xs)
}

/// Group adjacent elements related to the first element of the current
/// run.
pub fn group_by<T, F>(pred: F, xs: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut out: Vec<Vec<T>> = Vec::new();
    for x in xs {
        match out.last_mut() {
            Some(run) if pred(&run[0], x) => run.push(x.clone()),
            _ => out.push(vec![x.clone()]),
        }
    }
    out
}
