//! # Comb operators
//!
//! Operator sections and reductions for composing with iterator
//! adapters:
//!
//! - **Curried builders**: `plus(3)` is the function `x + 3`, `gt(&3)`
//!   is the predicate `x > 3`. Pass them straight to `map`/`filter`.
//! - **Reductions**: `sum`, `product`, `maximum`, `minimum`, `flatten`
//!   collapse an iterator the way a fold over the matching binary
//!   operator would.
//! - **Comparators**: `comparing(key)` builds an `Ordering` function
//!   for `sort_by` from a key extraction closure.
//! - **Math**: `gcd`, `lcm`, `even`, `odd`.
//!
//! ```
//! use comb_ops::{gt, plus, comparing};
//!
//! let big: Vec<i64> = [1, 4, 2, 5, 2, 3].into_iter().filter(gt(3)).collect();
//! assert_eq!(big, [4, 5]);
//!
//! let shifted: Vec<i64> = big.into_iter().map(plus(10)).collect();
//! assert_eq!(shifted, [14, 15]);
//!
//! let mut nested = vec![vec![1, 3, 2], vec![2, 2], vec![1, 4, 2, 3]];
//! nested.sort_by(comparing(|v: &Vec<i64>| v.len()));
//! assert_eq!(nested[0], [2, 2]);
//! ```

pub mod cmp;
pub mod curried;
pub mod fold;
pub mod math;

pub use cmp::{comparing, comparing_desc, comparing2};
pub use curried::{
    append, div, divide, eq, gt, gte, log2, log_base, lt, lte, minus, modulo, neq, plus, pow,
    prepend, times,
};
pub use fold::{all_of, any_of, flatten, maximum, minimum, product, sum};
pub use math::{even, gcd, lcm, odd};
