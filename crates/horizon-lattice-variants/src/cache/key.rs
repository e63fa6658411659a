//! Cache keys.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::resolve::VariantProps;

/// Cache key for computed styles.
///
/// Built from the defined selections only, sorted by axis, so omitted and
/// explicitly unset axes share entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleCacheKey(String);

impl StyleCacheKey {
    /// Create a key for the given props.
    pub fn new(props: &VariantProps) -> Self {
        Self(props.cache_key())
    }

    /// The key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shared generation counter for selection-keyed caches.
///
/// Advancing the epoch empties every cache created with it the next time
/// that cache is touched.
#[derive(Debug, Clone, Default)]
pub struct CacheEpoch(Arc<AtomicU64>);

impl CacheEpoch {
    /// Create a new epoch starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current generation.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Move to the next generation, invalidating selection-keyed entries.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }
}
