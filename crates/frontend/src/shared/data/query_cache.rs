use leptos::prelude::*;
use std::collections::HashMap;

/// Process-wide invalidation bus for cached list views.
///
/// Each entity type owns a key ("deals", "menu-items", ...) with an epoch
/// counter. List views read their key's epoch inside an effect so bumping it
/// triggers a refetch. Only the submit coordinator's completion phase and the
/// optimistic delete operation are supposed to call [`QueryCache::invalidate`];
/// everything else observes.
#[derive(Clone, Copy)]
pub struct QueryCache {
    epochs: RwSignal<HashMap<&'static str, u64>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            epochs: RwSignal::new(HashMap::new()),
        }
    }

    /// Reactive read: subscribe to a key's epoch.
    pub fn epoch(&self, key: &'static str) -> u64 {
        self.epochs.with(|m| m.get(key).copied().unwrap_or(0))
    }

    /// Bump a key, forcing every list subscribed to it to refetch.
    pub fn invalidate(&self, key: &'static str) {
        self.epochs.update(|m| {
            *m.entry(key).or_insert(0) += 1;
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Context accessor, panics when the app shell forgot to provide the cache.
pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>().expect("QueryCache not provided in context")
}
