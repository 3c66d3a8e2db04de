//! Memoizing wrapper around a selector compile function.
//!
//! Compiling a selector is pure: the same text always produces the
//! same output, so results can be cached keyed on the raw text.
//! [`CachingCompiler`] wraps any `&str -> Result<T, E>` compile
//! function with a lookup table; the table policy lives behind
//! [`CacheTable`], so callers can swap in their own sharing or
//! eviction scheme. The default [`FoldedTable`] treats selector text
//! case-insensitively, shares safely across threads, and never evicts.
//!
//! Failures are never cached: an error propagates to the caller and
//! the next identical call compiles from scratch.

use std::marker::PhantomData;

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

/// Lookup table used by [`CachingCompiler`].
///
/// Both operations take `&self`: a table shared by concurrent callers
/// decides its own synchronization. Two callers may miss on the same
/// selector simultaneously and both compile; the last insert wins,
/// which is harmless because compilation is pure.
pub trait CacheTable<T> {
    /// Look up a previously stored result.
    fn get(&self, selector: &str) -> Option<T>;

    /// Store a result for `selector`.
    fn insert(&self, selector: &str, value: T);
}

impl<T, C: CacheTable<T>> CacheTable<T> for &C {
    fn get(&self, selector: &str) -> Option<T> {
        (**self).get(selector)
    }

    fn insert(&self, selector: &str, value: T) {
        (**self).insert(selector, value);
    }
}

/// Concurrent table keyed by the ASCII-case-folded selector text, so
/// `"DIV"` and `"div"` share one entry. No eviction; entries live as
/// long as the table.
#[derive(Debug, Default)]
pub struct FoldedTable<T> {
    entries: DashMap<Box<str>, T, FxBuildHasher>,
}

impl<T> FoldedTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        FoldedTable {
            entries: DashMap::default(),
        }
    }

    /// Number of cached selectors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> CacheTable<T> for FoldedTable<T> {
    fn get(&self, selector: &str) -> Option<T> {
        self.entries
            .get(selector.to_ascii_lowercase().as_str())
            .map(|entry| entry.value().clone())
    }

    fn insert(&self, selector: &str, value: T) {
        self.entries
            .insert(selector.to_ascii_lowercase().into_boxed_str(), value);
    }
}

/// A compile function with a memoizing front.
///
/// The first call for a selector invokes the wrapped function and
/// stores the result; later calls for text equal under the table's
/// comparer return the stored result without recompiling.
pub struct CachingCompiler<F, T, C = FoldedTable<T>> {
    compile: F,
    table: C,
    marker: PhantomData<fn() -> T>,
}

impl<F, T> CachingCompiler<F, T> {
    /// Wrap `compile` with a fresh default table.
    pub fn new(compile: F) -> Self {
        Self::with_table(compile, FoldedTable::new())
    }
}

impl<F, T, C> CachingCompiler<F, T, C> {
    /// Wrap `compile` with a caller-supplied table.
    pub fn with_table(compile: F, table: C) -> Self {
        CachingCompiler {
            compile,
            table,
            marker: PhantomData,
        }
    }
}

impl<F, T, C> CachingCompiler<F, T, C>
where
    T: Clone,
    C: CacheTable<T>,
{
    /// Compile `selector`, reusing a cached result when one exists.
    ///
    /// A failed compile is not stored; the error propagates and the
    /// next identical call retries.
    pub fn compile<E>(&self, selector: &str) -> Result<T, E>
    where
        F: Fn(&str) -> Result<T, E>,
    {
        if let Some(hit) = self.table.get(selector) {
            return Ok(hit);
        }
        let value = (self.compile)(selector)?;
        self.table.insert(selector, value.clone());
        Ok(value)
    }
}
