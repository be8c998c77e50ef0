//! Multi-list zips. All variants truncate to the shortest input.
//!
//! The two-list tuple zip is `Iterator::zip`; these cover the
//! combining-function and three-list cases the standard library stops
//! short of.

/// Combine two lists elementwise: `[f(x1, y1), f(x2, y2), …]`.
pub fn zip_with<A, B, C, F, IA, IB>(mut f: F, xs: IA, ys: IB) -> Vec<C>
where
    F: FnMut(A, B) -> C,
    IA: IntoIterator<Item = A>,
    IB: IntoIterator<Item = B>,
{
    xs.into_iter()
        .zip(ys)
        .map(|(x, y)| f(x, y))
        .collect()
}

/// Combine three lists elementwise.
pub fn zip_with3<A, B, C, D, F, IA, IB, IC>(mut f: F, xs: IA, ys: IB, zs: IC) -> Vec<D>
where
    F: FnMut(A, B, C) -> D,
    IA: IntoIterator<Item = A>,
    IB: IntoIterator<Item = B>,
    IC: IntoIterator<Item = C>,
{
    let mut xs = xs.into_iter();
    let mut ys = ys.into_iter();
    let mut zs = zs.into_iter();
    let mut out = Vec::new();
    while let (Some(x), Some(y), Some(z)) = (xs.next(), ys.next(), zs.next()) {
        out.push(f(x, y, z));
    }
    out
}

/// Zip three lists into triples.
pub fn zip3<A, B, C, IA, IB, IC>(xs: IA, ys: IB, zs: IC) -> Vec<(A, B, C)>
where
    IA: IntoIterator<Item = A>,
    IB: IntoIterator<Item = B>,
    IC: IntoIterator<Item = C>,
{
    zip_with3(|x, y, z| (x, y, z), xs, ys, zs)
}
