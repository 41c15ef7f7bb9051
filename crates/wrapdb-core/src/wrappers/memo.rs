//! Result memoization
//!
//! `Memoized` wraps a function and remembers its result for every distinct
//! argument value it has seen. A cached key is never recomputed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Hit/miss counters for a memoized function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// A function wrapped with an unbounded result cache
///
/// Use a tuple for `A` when the function takes several arguments.
///
/// # Example
///
/// ```
/// use wrapdb_core::Memoized;
///
/// let mut double = Memoized::new(|n: &u64| n * 2);
/// assert_eq!(double.call(5), 10);
/// assert_eq!(double.call(5), 10);
/// assert_eq!(double.stats().misses, 1);
/// ```
pub struct Memoized<A, R, F> {
    func: F,
    cache: HashMap<A, R>,
    stats: CacheStats,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash,
    R: Clone,
    F: FnMut(&A) -> R,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Return the cached result for `args`, computing it on first sight
    pub fn call(&mut self, args: A) -> R {
        match self.cache.entry(args) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let result = (self.func)(entry.key());
                entry.insert(result).clone()
            }
        }
    }

    /// Whether a result for `args` is already cached
    pub fn contains(&self, args: &A) -> bool {
        self.cache.contains_key(args)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every cached result; counters are kept
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Unwrap the original function
    pub fn into_inner(self) -> F {
        self.func
    }
}
