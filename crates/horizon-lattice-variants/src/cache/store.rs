//! Per-declaration style cache.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::key::{CacheEpoch, StyleCacheKey};
use crate::logging::targets;
use crate::style::SlotStyles;
use crate::theme::ColorMap;

/// Selection-keyed entries, tagged with the epoch they were filled in.
#[derive(Default)]
struct SelectionPartition {
    epoch: u64,
    entries: HashMap<StyleCacheKey, Arc<SlotStyles>>,
}

/// Entries computed under one color override.
///
/// Holds the override weakly so the partition never keeps it alive.
struct OverridePartition {
    owner: Weak<ColorMap>,
    entries: HashMap<StyleCacheKey, Arc<SlotStyles>>,
}

impl OverridePartition {
    fn owned_by(&self, colors: &Arc<ColorMap>) -> bool {
        self.owner
            .upgrade()
            .is_some_and(|owner| Arc::ptr_eq(&owner, colors))
    }
}

/// Cache for the computed styles of one declaration.
///
/// Two dimensions are kept:
/// - selection-keyed entries, emptied when the shared [`CacheEpoch`]
///   advances or [`clear`](Self::clear) is called
/// - override-keyed entries, keyed by the identity of a color override;
///   once that override is dropped its entries are reclaimed on the next
///   override lookup or insert
///
/// Inserts never replace an existing entry: the first stored result for a
/// key is returned to every later caller.
pub struct StyleCache {
    epoch: CacheEpoch,
    selections: Mutex<SelectionPartition>,
    overrides: Mutex<HashMap<usize, OverridePartition>>,
}

impl StyleCache {
    /// Create a cache with its own epoch.
    pub fn new() -> Self {
        Self::with_epoch(CacheEpoch::new())
    }

    /// Create a cache that follows a shared epoch.
    pub fn with_epoch(epoch: CacheEpoch) -> Self {
        let current = epoch.current();
        Self {
            epoch,
            selections: Mutex::new(SelectionPartition {
                epoch: current,
                entries: HashMap::new(),
            }),
            overrides: Mutex::new(HashMap::new()),
        }
    }

    /// Get a cached result.
    pub fn get(&self, key: &StyleCacheKey) -> Option<Arc<SlotStyles>> {
        let mut partition = self.selections.lock();
        self.sync_epoch(&mut partition);
        partition.entries.get(key).cloned()
    }

    /// Store a result unless one is already present; returns the stored one.
    pub fn insert(&self, key: StyleCacheKey, styles: SlotStyles) -> Arc<SlotStyles> {
        let mut partition = self.selections.lock();
        self.sync_epoch(&mut partition);
        Arc::clone(
            partition
                .entries
                .entry(key)
                .or_insert_with(|| Arc::new(styles)),
        )
    }

    /// Return the cached result for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs without holding the cache lock.
    pub fn get_or_compute(
        &self,
        key: StyleCacheKey,
        compute: impl FnOnce() -> SlotStyles,
    ) -> Arc<SlotStyles> {
        if let Some(cached) = self.get(&key) {
            tracing::trace!(target: targets::CACHE, key = %key, "style cache hit");
            return cached;
        }
        tracing::debug!(target: targets::CACHE, key = %key, "style cache miss");
        self.insert(key, compute())
    }

    /// Get a result cached under a color override.
    ///
    /// Partitions whose override has been dropped are pruned first.
    pub fn get_override(
        &self,
        colors: &Arc<ColorMap>,
        key: &StyleCacheKey,
    ) -> Option<Arc<SlotStyles>> {
        let mut overrides = self.overrides.lock();
        prune_dropped(&mut overrides);
        let partition = overrides.get(&identity(colors))?;
        if !partition.owned_by(colors) {
            return None;
        }
        partition.entries.get(key).cloned()
    }

    /// Store a result under a color override unless one is already present.
    ///
    /// Partitions whose override has been dropped are pruned first.
    pub fn insert_override(
        &self,
        colors: &Arc<ColorMap>,
        key: StyleCacheKey,
        styles: SlotStyles,
    ) -> Arc<SlotStyles> {
        let mut overrides = self.overrides.lock();
        prune_dropped(&mut overrides);

        let partition = overrides
            .entry(identity(colors))
            .or_insert_with(|| OverridePartition {
                owner: Arc::downgrade(colors),
                entries: HashMap::new(),
            });
        Arc::clone(
            partition
                .entries
                .entry(key)
                .or_insert_with(|| Arc::new(styles)),
        )
    }

    /// Return the result cached under a color override, computing it on a miss.
    pub fn get_or_compute_override(
        &self,
        colors: &Arc<ColorMap>,
        key: StyleCacheKey,
        compute: impl FnOnce() -> SlotStyles,
    ) -> Arc<SlotStyles> {
        if let Some(cached) = self.get_override(colors, &key) {
            tracing::trace!(target: targets::CACHE, key = %key, "override cache hit");
            return cached;
        }
        tracing::debug!(target: targets::CACHE, key = %key, "override cache miss");
        self.insert_override(colors, key, compute())
    }

    /// Clear the selection-keyed entries.
    ///
    /// Override-keyed entries are left alone.
    pub fn clear(&self) {
        let mut partition = self.selections.lock();
        partition.entries.clear();
        partition.epoch = self.epoch.current();
    }

    /// Number of selection-keyed entries.
    pub fn len(&self) -> usize {
        let mut partition = self.selections.lock();
        self.sync_epoch(&mut partition);
        partition.entries.len()
    }

    /// Check if there are no selection-keyed entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stored override partitions, including ones whose override
    /// was dropped but not yet pruned.
    pub fn override_partitions(&self) -> usize {
        self.overrides.lock().len()
    }

    fn sync_epoch(&self, partition: &mut SelectionPartition) {
        let current = self.epoch.current();
        if partition.epoch != current {
            partition.entries.clear();
            partition.epoch = current;
        }
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleCache")
            .field("entries", &self.len())
            .field("override_partitions", &self.override_partitions())
            .finish()
    }
}

fn prune_dropped(overrides: &mut HashMap<usize, OverridePartition>) {
    let before = overrides.len();
    overrides.retain(|_, partition| partition.owner.strong_count() > 0);
    let pruned = before - overrides.len();
    if pruned > 0 {
        tracing::debug!(target: targets::CACHE, pruned, "pruned dropped override partitions");
    }
}

fn identity(colors: &Arc<ColorMap>) -> usize {
    Arc::as_ptr(colors) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::VariantProps;
    use crate::style::StyleMap;

    fn styles(padding: i32) -> SlotStyles {
        SlotStyles::new().with("root", StyleMap::new().with("padding", padding))
    }

    fn key(size: &str) -> StyleCacheKey {
        StyleCacheKey::new(&VariantProps::new().set("size", size))
    }

    #[test]
    fn cache_basic_operations() {
        let cache = StyleCache::new();
        assert!(cache.get(&key("sm")).is_none());

        let stored = cache.insert(key("sm"), styles(8));
        let fetched = cache.get(&key("sm")).unwrap();
        assert!(Arc::ptr_eq(&stored, &fetched));
    }

    #[test]
    fn insert_keeps_first_entry() {
        let cache = StyleCache::new();
        let first = cache.insert(key("sm"), styles(8));
        let second = cache.insert(key("sm"), styles(99));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, styles(8));
    }

    #[test]
    fn get_or_compute_runs_once() {
        let cache = StyleCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            cache.get_or_compute(key("lg"), || {
                calls += 1;
                styles(24)
            });
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn epoch_advance_clears_selection_entries() {
        let epoch = CacheEpoch::new();
        let cache = StyleCache::with_epoch(epoch.clone());
        cache.insert(key("sm"), styles(8));
        assert_eq!(cache.len(), 1);

        epoch.advance();
        assert!(cache.is_empty());
        assert!(cache.get(&key("sm")).is_none());
    }

    #[test]
    fn clear_keeps_override_entries() {
        let cache = StyleCache::new();
        let colors = Arc::new(ColorMap::new());
        cache.insert(key("sm"), styles(8));
        cache.insert_override(&colors, key("sm"), styles(10));

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get_override(&colors, &key("sm")).is_some());
    }

    #[test]
    fn overrides_keyed_by_identity() {
        let cache = StyleCache::new();
        let first = Arc::new(ColorMap::new());
        let second = Arc::new(ColorMap::new());

        cache.insert_override(&first, key("sm"), styles(10));
        assert!(cache.get_override(&first, &key("sm")).is_some());
        assert!(cache.get_override(&second, &key("sm")).is_none());
    }

    #[test]
    fn dropped_overrides_are_pruned_on_insert() {
        let cache = StyleCache::new();
        let kept = Arc::new(ColorMap::new());
        {
            let dropped = Arc::new(ColorMap::new());
            cache.insert_override(&dropped, key("sm"), styles(1));
        }
        assert_eq!(cache.override_partitions(), 1);

        cache.insert_override(&kept, key("sm"), styles(2));
        assert_eq!(cache.override_partitions(), 1);
        assert!(cache.get_override(&kept, &key("sm")).is_some());
    }

    #[test]
    fn dropped_overrides_are_pruned_on_lookup() {
        let cache = StyleCache::new();
        let kept = Arc::new(ColorMap::new());
        cache.insert_override(&kept, key("sm"), styles(2));
        {
            let dropped = Arc::new(ColorMap::new());
            cache.get_or_compute_override(&dropped, key("lg"), || styles(1));
            assert_eq!(cache.override_partitions(), 2);
        }

        assert!(cache.get_override(&kept, &key("sm")).is_some());
        assert_eq!(cache.override_partitions(), 1);
    }
}
