//! Memoization: cache a function's results per argument.
//!
//! Every computed value is cached, including defaults like `0` or
//! `""` — a lookup hit is a hit regardless of what was stored.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// A memoized function keyed directly by its argument.
///
/// ```
/// use comb_func::memoize;
///
/// let mut calls = 0u32;
/// let mut square = memoize(|x: &i64| { calls += 1; x * x });
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.call(4), 16);
/// assert_eq!(square.len(), 1);
/// ```
pub struct Memo<K, V, F> {
    f: F,
    store: HashMap<K, V>,
}

impl<K, V, F> Memo<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(&K) -> V,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            store: HashMap::new(),
        }
    }

    /// Apply the function, consulting the cache first.
    pub fn call(&mut self, key: K) -> V {
        if let Some(v) = self.store.get(&key) {
            return v.clone();
        }
        let v = (self.f)(&key);
        self.store.insert(key, v.clone());
        v
    }

    /// Number of distinct arguments seen so far.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Memoize a function of one hashable argument.
pub fn memoize<K, V, F>(f: F) -> Memo<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(&K) -> V,
{
    Memo::new(f)
}

/// A memoized function whose cache key is derived by a hasher
/// function.
///
/// Use when the argument itself is not hashable (or too big to store):
/// the hasher extracts the cache key, the wrapped function receives
/// the original argument.
pub struct MemoBy<A, K, V, F, H> {
    f: F,
    hasher: H,
    store: HashMap<K, V>,
    _arg: PhantomData<fn(A)>,
}

impl<A, K, V, F, H> MemoBy<A, K, V, F, H>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(A) -> V,
    H: Fn(&A) -> K,
{
    pub fn new(hasher: H, f: F) -> Self {
        Self {
            f,
            hasher,
            store: HashMap::new(),
            _arg: PhantomData,
        }
    }

    /// Apply the function, consulting the cache under the derived key.
    pub fn call(&mut self, arg: A) -> V {
        let key = (self.hasher)(&arg);
        if let Some(v) = self.store.get(&key) {
            return v.clone();
        }
        let v = (self.f)(arg);
        self.store.insert(key, v.clone());
        v
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Memoize under a caller-supplied key extraction.
pub fn memoize_by<A, K, V, F, H>(hasher: H, f: F) -> MemoBy<A, K, V, F, H>
where
    K: Eq + Hash,
    V: Clone,
    F: FnMut(A) -> V,
    H: Fn(&A) -> K,
{
    MemoBy::new(hasher, f)
}
