use std::collections::HashMap;

use ordered_float::OrderedFloat;

/// Runtime metrics exposed by the in-engine x-label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XLabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct XLabelCacheKey {
    pub(super) formatter_generation: u64,
    pub(super) x_value: OrderedFloat<f64>,
}

impl XLabelCacheKey {
    pub(super) fn new(formatter_generation: u64, x_value: f64) -> Self {
        Self {
            formatter_generation,
            x_value: OrderedFloat(x_value),
        }
    }
}

/// Memoizes formatted x labels per formatter generation.
#[derive(Debug, Default)]
pub(super) struct XLabelCache {
    entries: HashMap<XLabelCacheKey, String>,
    hits: u64,
    misses: u64,
}

impl XLabelCache {
    const MAX_ENTRIES: usize = 8192;

    pub(super) fn get(&mut self, key: XLabelCacheKey) -> Option<String> {
        let value = self.entries.get(&key).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: XLabelCacheKey, value: String) {
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, value);
    }

    /// Returns the cached label or formats and stores it.
    pub(super) fn get_or_format(
        &mut self,
        key: XLabelCacheKey,
        format: impl FnOnce() -> String,
    ) -> String {
        if let Some(text) = self.get(key) {
            return text;
        }
        let text = format();
        self.insert(key, text.clone());
        text
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> XLabelCacheStats {
        XLabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{XLabelCache, XLabelCacheKey};

    #[test]
    fn repeated_lookups_hit_the_cache() {
        let mut cache = XLabelCache::default();
        let key = XLabelCacheKey::new(0, 12.5);
        let mut calls = 0;
        for _ in 0..3 {
            let text = cache.get_or_format(key, || {
                calls += 1;
                "12.5".to_owned()
            });
            assert_eq!(text, "12.5");
        }
        assert_eq!(calls, 1);
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.size), (2, 1, 1));
    }

    #[test]
    fn formatter_generation_separates_entries() {
        let mut cache = XLabelCache::default();
        cache.insert(XLabelCacheKey::new(0, 1.0), "a".to_owned());
        assert_eq!(cache.get(XLabelCacheKey::new(1, 1.0)), None);
    }

    #[test]
    fn nearby_x_values_keep_separate_entries() {
        let mut cache = XLabelCache::default();
        cache.insert(XLabelCacheKey::new(0, 0.0001), "0.0001".to_owned());
        cache.insert(XLabelCacheKey::new(0, 0.0002), "0.0002".to_owned());
        assert_eq!(
            cache.get(XLabelCacheKey::new(0, 0.0001)).as_deref(),
            Some("0.0001")
        );
        assert_eq!(cache.stats().size, 2);
    }
}
