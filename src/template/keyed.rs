//! Map with case-insensitive string keys.
//!
//! Keys are lower-cased on insert and on every lookup, so callers never
//! normalize themselves.

use rustc_hash::FxHashMap;

/// String-keyed map that folds keys to lower case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInsensitiveMap<V> {
    entries: FxHashMap<String, V>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn normalize(key: &str) -> String {
        key.to_lowercase()
    }

    /// Insert a value, replacing and returning any previous value for the key.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.entries.insert(Self::normalize(key), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&Self::normalize(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&Self::normalize(key))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored (already lower-cased) keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
