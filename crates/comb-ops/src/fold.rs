//! Reductions: folds of the associative operators over a whole
//! collection.
//!
//! Named after "take the ... of the list": `sum`, `product`,
//! `maximum`, `minimum`, `flatten`. All accept anything iterable so
//! they compose with adapter chains without an intermediate collect.

/// Sum of all elements. Empty input sums to zero.
pub fn sum<T, I>(xs: I) -> T
where
    I: IntoIterator<Item = T>,
    T: std::iter::Sum<T>,
{
    xs.into_iter().sum()
}

/// Product of all elements. Empty input multiplies to one.
pub fn product<T, I>(xs: I) -> T
where
    I: IntoIterator<Item = T>,
    T: std::iter::Product<T>,
{
    xs.into_iter().product()
}

/// Largest element, or `None` for empty input.
pub fn maximum<T, I>(xs: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    xs.into_iter().max()
}

/// Smallest element, or `None` for empty input.
pub fn minimum<T, I>(xs: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    xs.into_iter().min()
}

/// Concatenate a collection of vectors into one.
pub fn flatten<T, I>(xs: I) -> Vec<T>
where
    I: IntoIterator<Item = Vec<T>>,
{
    xs.into_iter().flatten().collect()
}

/// Logical AND over a collection of booleans. Empty input is `true`.
pub fn all_of<I: IntoIterator<Item = bool>>(xs: I) -> bool {
    xs.into_iter().all(|b| b)
}

/// Logical OR over a collection of booleans. Empty input is `false`.
pub fn any_of<I: IntoIterator<Item = bool>>(xs: I) -> bool {
    xs.into_iter().any(|b| b)
}
