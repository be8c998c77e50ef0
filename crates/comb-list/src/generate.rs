//! Range and sequence generation.

/// The first `n` positive integers, `[1, 2, …, n]`.
///
/// One-indexed and inclusive, so `range(5)` has five elements.
/// `n < 1` yields the empty vector.
pub fn range(n: i64) -> Vec<i64> {
    range_step(1, n, 1)
}

/// Inclusive integer range `[start, start + 1, …, stop]`.
pub fn range_from(start: i64, stop: i64) -> Vec<i64> {
    range_step(start, stop, 1)
}

/// Inclusive integer range with a custom step.
///
/// The range walks from `start` toward `stop` in increments of `step`
/// and includes `stop` when the step lands on it exactly. A negative
/// step counts down; a step of `0` behaves as `1`. An empty vector is
/// returned when `stop` lies behind `start` in the step direction.
pub fn range_step(start: i64, stop: i64, step: i64) -> Vec<i64> {
    let step = if step == 0 { 1 } else { step };
    let len = if step > 0 {
        if stop < start { 0 } else { (stop - start) / step + 1 }
    } else if stop > start {
        0
    } else {
        (start - stop) / (-step) + 1
    };
    let mut out = Vec::with_capacity(len as usize);
    let mut cur = start;
    for _ in 0..len {
        out.push(cur);
        cur += step;
    }
    out
}

/// `n` clones of `x`.
pub fn replicate<T: Clone>(n: usize, x: T) -> Vec<T> {
    vec![x; n]
}

/// Repeated application: `[init, f(init), f(f(init)), …]`.
///
/// Returns exactly `times` elements; `times == 0` yields the empty
/// vector.
pub fn iterate<T, F>(times: usize, init: T, mut f: F) -> Vec<T>
where
    F: FnMut(&T) -> T,
{
    if times == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(times);
    out.push(init);
    for i in 1..times {
        let next = f(&out[i - 1]);
        out.push(next);
    }
    out
}

/// Left scan: every intermediate accumulator state, `init` included.
///
/// `scan(xs, z, f)` is `[z, f(z, x1), f(f(z, x1), x2), …]` and always
/// has `xs.len() + 1` elements.
pub fn scan<T, A, I, F>(xs: I, init: A, mut f: F) -> Vec<A>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&A, T) -> A,
{
    let mut out = vec![init];
    for x in xs {
        let next = f(&out[out.len() - 1], x);
        out.push(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_one_indexed_inclusive() {
        assert_eq!(range(5), [1, 2, 3, 4, 5]);
        assert_eq!(range(1), [1]);
        assert_eq!(range(0), Vec::<i64>::new());
        assert_eq!(range(-3), Vec::<i64>::new());
    }

    #[test]
    fn range_from_inclusive() {
        assert_eq!(range_from(2, 5), [2, 3, 4, 5]);
        assert_eq!(range_from(3, 3), [3]);
        assert_eq!(range_from(4, 3), Vec::<i64>::new());
    }

    #[test]
    fn range_step_walks() {
        assert_eq!(range_step(1, 9, 3), [1, 4, 7]);
        assert_eq!(range_step(1, 7, 3), [1, 4, 7]);
        assert_eq!(range_step(5, 1, -2), [5, 3, 1]);
        assert_eq!(range_step(1, 5, -1), Vec::<i64>::new());
    }

    #[test]
    fn range_step_zero_behaves_as_one() {
        assert_eq!(range_step(1, 4, 0), [1, 2, 3, 4]);
    }

    #[test]
    fn replicate_clones() {
        assert_eq!(replicate(3, 'x'), ['x', 'x', 'x']);
        assert_eq!(replicate(0, 'x'), Vec::<char>::new());
    }

    #[test]
    fn iterate_powers_of_two() {
        let powers = iterate(8, 2i64, |x| x * 2);
        assert_eq!(powers, [2, 4, 8, 16, 32, 64, 128, 256]);
        assert_eq!(iterate(1, 7i64, |x| x + 1), [7]);
        assert_eq!(iterate(0, 7i64, |x| x + 1), Vec::<i64>::new());
    }

    #[test]
    fn scan_keeps_every_state() {
        let states = scan([1, 2, 3], 0i64, |acc, x| acc + x);
        assert_eq!(states, [0, 1, 3, 6]);
        assert_eq!(states.len(), 3 + 1);
        assert_eq!(scan(Vec::<i64>::new(), 5i64, |acc, x| acc + x), [5]);
    }
}
