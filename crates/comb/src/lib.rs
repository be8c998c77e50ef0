//! # Comb
//!
//! Small functional utilities that compose with the standard iterator
//! adapters instead of replacing them. One import, four layers:
//!
//! - [`ops`]: curried operator sections, reductions, comparators, math
//! - [`list`]: ranges, zips, scans, set operations, grouping, sorted
//!   editing
//! - [`func`]: combinators and wrappers (compose, guard, memoize,
//!   once, trace)
//! - [`record`]: accessors and comparators for open-shaped JSON
//!   records
//!
//! The two-list tuple zip is deliberately absent: that is
//! `Iterator::zip`. Everything here covers what the standard library
//! stops short of.
//!
//! ## Composition examples
//!
//! Pascal's triangle, each row zipped from the previous one:
//!
//! ```
//! use comb::prelude::*;
//!
//! let next = |row: &Vec<i64>| {
//!     zip_with(
//!         |x, y| x + y,
//!         append(vec![0])(row.clone()),
//!         prepend(vec![0])(row.clone()),
//!     )
//! };
//! let pascal = iterate(6, vec![1], next);
//! assert_eq!(pascal[5], [1, 5, 10, 10, 5, 1]);
//! ```
//!
//! Primes as a coprimality sieve over `nub_by`:
//!
//! ```
//! use comb::prelude::*;
//!
//! let candidates: Vec<i64> = (2..=20).collect();
//! let primes = nub_by(|&kept, &x| gcd(kept, x) > 1, &candidates);
//! assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19]);
//! ```

pub use comb_func as func;
pub use comb_list as list;
pub use comb_ops as ops;
pub use comb_record as record;

pub use comb_func::pipe;

/// Everything at once, for gluing in examples and tests.
pub mod prelude {
    pub use comb_func::pipe;
    pub use comb_func::{
        Memo, MemoBy, Once, Trace, all, any, compose, constant, guard, id, memoize, memoize_by,
        none, not, once, recover, seq2, seq3, seq4, trace, trace_with,
    };
    pub use comb_list::{
        delete, delete_by, difference, elem, first, first_by, group, group_by, insert, insert_by,
        intersect, intersect_by, iterate, last, last_by, maximum_by, minimum_by, not_elem, nub,
        nub_by, range, range_from, range_step, replicate, scan, union, union_by, zip3, zip_with,
        zip_with3,
    };
    pub use comb_ops::{
        all_of, any_of, append, comparing, comparing2, comparing_desc, div, divide, eq, even,
        flatten, gcd, gt, gte, lcm, log2, log_base, lt, lte, maximum, minimum, minus, modulo, neq,
        odd, plus, pow, prepend, product, sum, times,
    };
    pub use comb_record::{
        RecordError, comparing_keys, content_hash, get, get_path, pluck, set, set_each, value_cmp,
    };
}
