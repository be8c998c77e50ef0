//! Core combinators: identity, constants, predicate lifting,
//! composition, and guarded application.

/// The identity function.
pub fn id<T>(x: T) -> T {
    x
}

/// A function that ignores its (absent) arguments and returns a fixed
/// value.
pub fn constant<V: Clone>(v: V) -> impl Fn() -> V {
    move || v.clone()
}

/// Negate a predicate.
pub fn not<T, P>(pred: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |x| !pred(x)
}

/// Lift an element predicate to "every element satisfies it".
///
/// Empty slices satisfy `all`.
pub fn all<T, P>(pred: P) -> impl Fn(&[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    move |xs| xs.iter().all(|x| pred(x))
}

/// Lift an element predicate to "some element satisfies it".
pub fn any<T, P>(pred: P) -> impl Fn(&[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    move |xs| xs.iter().any(|x| pred(x))
}

/// Lift an element predicate to "no element satisfies it".
pub fn none<T, P>(pred: P) -> impl Fn(&[T]) -> bool
where
    P: Fn(&T) -> bool,
{
    move |xs| !xs.iter().any(|x| pred(x))
}

/// Right-to-left composition: `compose(f, g)` is `x ↦ f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Left-to-right pipeline of two functions: `x ↦ g(f(x))`.
pub fn seq2<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x| g(f(x))
}

/// Left-to-right pipeline of three functions.
pub fn seq3<A, B, C, D, F, G, H>(f: F, g: G, h: H) -> impl Fn(A) -> D
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
    H: Fn(C) -> D,
{
    move |x| h(g(f(x)))
}

/// Left-to-right pipeline of four functions.
pub fn seq4<A, B, C, D, E, F, G, H, K>(f: F, g: G, h: H, k: K) -> impl Fn(A) -> E
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
    H: Fn(C) -> D,
    K: Fn(D) -> E,
{
    move |x| k(h(g(f(x))))
}

/// Thread a value through a pipeline of functions, left to right.
///
/// ```
/// use comb_func::pipe;
///
/// let n = pipe!(2, |x: i64| x + 3, |x: i64| x * 2);
/// assert_eq!(n, 10);
/// ```
#[macro_export]
macro_rules! pipe {
    ($x:expr $(, $f:expr)+ $(,)?) => {{
        let v = $x;
        $( let v = ($f)(v); )+
        v
    }};
}

/// Apply `f` only when `cond` holds, otherwise `None`.
///
/// `guard(fib, lt(100))` is a fib that refuses large inputs.
pub fn guard<A, R, F, C>(f: F, cond: C) -> impl Fn(A) -> Option<R>
where
    F: Fn(A) -> R,
    C: Fn(&A) -> bool,
{
    move |x| if cond(&x) { Some(f(x)) } else { None }
}

/// Unwrap a guarded function, producing the fallback on `None`.
pub fn recover<A, R, F, D>(guarded: F, fallback: D) -> impl Fn(A) -> R
where
    F: Fn(A) -> Option<R>,
    D: Fn() -> R,
{
    move |x| guarded(x).unwrap_or_else(|| fallback())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_constant() {
        assert_eq!(id(10), 10);
        let five = constant(5);
        assert_eq!(five(), 5);
        assert_eq!(five(), 5);
    }

    #[test]
    fn predicate_lifters() {
        let even = |x: &i64| x % 2 == 0;
        assert!(not(even)(&3));
        assert!(all(even)(&[2, 4, 6]));
        assert!(all(even)(&[]));
        assert!(any(even)(&[1, 2, 3]));
        assert!(!any(even)(&[1, 3]));
        assert!(none(even)(&[1, 3]));

        let nested = [vec![1, 3, 2], vec![2, 2], vec![1, 4, 2, 3]];
        let is_all_twos = all(|x: &i64| *x == 2);
        let all_twos: Vec<&Vec<i64>> =
            nested.iter().filter(|v| is_all_twos(v.as_slice())).collect();
        assert_eq!(all_twos, [&vec![2, 2]]);
    }

    #[test]
    fn composition() {
        let f = compose(|x: i64| x * 2, |x: i64| x + 3);
        assert_eq!(f(2), 10); // (2 + 3) * 2

        let g = seq2(|x: i64| x * 2, |x: i64| x + 3);
        assert_eq!(g(2), 7); // 2 * 2 + 3

        let h = seq3(|x: i64| x + 2, |x: i64| x + 3, |x: i64| x * 2);
        assert_eq!(h(2), 14);

        let k = seq4(|x: i64| x + 1, |x: i64| x * 2, |x: i64| x - 3, |x: i64| x * x);
        assert_eq!(k(3), 25);
    }

    #[test]
    fn pipe_macro_threads_left_to_right() {
        let n = pipe!(2i64, |x: i64| x + 2, |x: i64| x + 3, |x: i64| x * 2);
        assert_eq!(n, 14);
        assert_eq!(pipe!(5i64, |x: i64| x - 1), 4);
    }

    #[test]
    fn guard_and_recover() {
        let safe_double = guard(|x: i64| x * 2, |x: &i64| *x < 100);
        assert_eq!(safe_double(4), Some(8));
        assert_eq!(safe_double(1000), None);

        let total = recover(safe_double, || -1);
        assert_eq!(total(4), 8);
        assert_eq!(total(1000), -1);
    }
}
