//! Small integer math helpers.

/// Greatest common divisor via Euclid's algorithm.
///
/// Arguments are taken by absolute value, so the result is always
/// non-negative. `gcd(0, 0)` is `0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.abs();
    let mut b = b.abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple. Zero when either argument is zero.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        0
    } else {
        (a / gcd(a, b) * b).abs()
    }
}

/// True for even integers.
pub fn even(n: i64) -> bool {
    n % 2 == 0
}

/// True for odd integers.
pub fn odd(n: i64) -> bool {
    n % 2 != 0
}
