//! # Comb combinators
//!
//! Higher-order building blocks:
//!
//! - [`combinator`]: `id`, `constant`, predicate lifters (`not`,
//!   `all`, `any`, `none`), composition (`compose`, `seq2`..`seq4`,
//!   the [`pipe!`] macro), and guarded application (`guard`,
//!   `recover`).
//! - [`memo`]: [`Memo`] — cache a function's results per argument.
//! - [`once`]: [`Once`] — compute on first call, replay afterwards.
//! - [`trace`]: [`Trace`] — log `(args) -> result` per call through a
//!   pluggable sink.
//!
//! The wrappers are structs with a `call` method rather than boxed
//! closures: the state they carry (cache, captured result, sink) is
//! then inspectable and the types stay nameable.

pub mod combinator;
pub mod memo;
pub mod once;
pub mod trace;

pub use combinator::{
    all, any, compose, constant, guard, id, none, not, recover, seq2, seq3, seq4,
};
pub use memo::{Memo, MemoBy, memoize, memoize_by};
pub use once::{Once, once};
pub use trace::{Trace, trace, trace_with};
