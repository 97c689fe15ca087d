// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Injected cache for generated use-case text
//!
//! Explicit get/put over an LRU map, keyed by lowercased class label so the
//! detector's casing never causes duplicate generator calls.

use std::num::NonZeroUsize;

use lru::LruCache;
use tokio::sync::Mutex;

/// Cache service handed to [`UseCaseService`](super::UseCaseService); no
/// module-level shared state.
pub struct UseCaseCache {
    entries: Mutex<LruCache<String, String>>,
}

impl UseCaseCache {
    /// Create a cache bounded to `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn key(class_label: &str) -> String {
        class_label.to_lowercase()
    }

    pub async fn get(&self, class_label: &str) -> Option<String> {
        self.entries.lock().await.get(&Self::key(class_label)).cloned()
    }

    pub async fn put(&self, class_label: &str, text: String) {
        self.entries.lock().await.put(Self::key(class_label), text);
    }

    /// Number of cached entries, reported by the health endpoint.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
