//! Process-lifetime memoization keyed by input content. No invalidation.

use std::collections::HashMap;
use std::hash::Hash;

use tokio::sync::RwLock;

pub struct MemoCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        self.entries.read().await.get(key).cloned()
    }

    /// Stores `value` unless the key is already present, and returns the stored value.
    /// The first writer wins, so concurrent callers all observe one result.
    pub async fn insert(&self, key: K, value: V) -> V {
        self.entries
            .write()
            .await
            .entry(key)
            .or_insert(value)
            .clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
