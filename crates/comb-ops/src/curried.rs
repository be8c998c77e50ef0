//! Curried operator sections.
//!
//! Each builder fixes the right-hand operand of a binary operator and
//! returns the resulting unary closure. `plus(3)` is the function
//! `x + 3`, `gt(3)` is the predicate `x > 3`.
//!
//! Arithmetic sections take and return owned values; comparison
//! sections take a reference so they slot into `Iterator::filter`
//! without an extra closure.

use std::ops::{Add, Div, Mul, Sub};

/// The section `x + y` with `y` fixed.
pub fn plus<T>(y: T) -> impl Fn(T) -> T
where
    T: Add<Output = T> + Copy,
{
    move |x| x + y
}

/// The section `x - y` with `y` fixed.
pub fn minus<T>(y: T) -> impl Fn(T) -> T
where
    T: Sub<Output = T> + Copy,
{
    move |x| x - y
}

/// The section `x * y` with `y` fixed.
pub fn times<T>(y: T) -> impl Fn(T) -> T
where
    T: Mul<Output = T> + Copy,
{
    move |x| x * y
}

/// The section `x / y` with `y` fixed.
pub fn divide<T>(y: T) -> impl Fn(T) -> T
where
    T: Div<Output = T> + Copy,
{
    move |x| x / y
}

/// Floor division by a fixed divisor.
///
/// Rounds toward negative infinity, so `div(2)(-3) == -2`. Panics on a
/// zero divisor, like integer `/`.
pub fn div(y: i64) -> impl Fn(i64) -> i64 {
    move |x| {
        let q = x / y;
        let r = x % y;
        if r != 0 && (r < 0) != (y < 0) { q - 1 } else { q }
    }
}

/// Floored remainder by a fixed divisor.
///
/// Takes the sign of the divisor, so `div` and `modulo` satisfy
/// `x == div(y)(x) * y + modulo(y)(x)`. Panics on a zero divisor,
/// like integer `%`.
pub fn modulo(y: i64) -> impl Fn(i64) -> i64 {
    move |x| ((x % y) + y) % y
}

/// Raise to a fixed exponent.
pub fn pow(exponent: f64) -> impl Fn(f64) -> f64 {
    move |x| x.powf(exponent)
}

/// Logarithm in a fixed base.
pub fn log_base(base: f64) -> impl Fn(f64) -> f64 {
    move |x| x.ln() / base.ln()
}

/// Base-2 logarithm.
pub fn log2(x: f64) -> f64 {
    x.log2()
}

/// Append a fixed suffix: `append(ys)(xs)` is `xs ++ ys`.
pub fn append<T: Clone>(ys: Vec<T>) -> impl Fn(Vec<T>) -> Vec<T> {
    move |mut xs| {
        xs.extend_from_slice(&ys);
        xs
    }
}

/// Prepend a fixed prefix: `prepend(ys)(xs)` is `ys ++ xs`.
pub fn prepend<T: Clone>(ys: Vec<T>) -> impl Fn(Vec<T>) -> Vec<T> {
    move |xs| {
        let mut out = ys.clone();
        out.extend(xs);
        out
    }
}

/// The predicate `x > y` with `y` fixed.
pub fn gt<T: PartialOrd>(y: T) -> impl Fn(&T) -> bool {
    move |x| *x > y
}

/// The predicate `x < y` with `y` fixed.
pub fn lt<T: PartialOrd>(y: T) -> impl Fn(&T) -> bool {
    move |x| *x < y
}

/// The predicate `x >= y` with `y` fixed.
pub fn gte<T: PartialOrd>(y: T) -> impl Fn(&T) -> bool {
    move |x| *x >= y
}

/// The predicate `x <= y` with `y` fixed.
pub fn lte<T: PartialOrd>(y: T) -> impl Fn(&T) -> bool {
    move |x| *x <= y
}

/// The predicate `x == y` with `y` fixed.
pub fn eq<T: PartialEq>(y: T) -> impl Fn(&T) -> bool {
    move |x| *x == y
}

/// The predicate `x != y` with `y` fixed.
pub fn neq<T: PartialEq>(y: T) -> impl Fn(&T) -> bool {
    move |x| *x != y
}
