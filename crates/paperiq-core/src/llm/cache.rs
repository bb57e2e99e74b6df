//! In-memory response cache keyed by request content
//!
//! Entries live as long as the owning client. There is no eviction.

use parking_lot::Mutex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Number of keys reported by [`ResponseCache::info`]
const SAMPLE_KEYS: usize = 5;

/// Snapshot of cache contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    pub cached_responses: usize,
    /// First few keys in insertion order
    pub sample_keys: Vec<String>,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, String>,
    insertion_order: Vec<String>,
}

/// Response cache shared by all calls on one client
#[derive(Debug, Default)]
pub struct ResponseCache {
    state: Mutex<CacheState>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic key for a `(model, prompt)` pair. The model is length
    /// prefixed so no two distinct pairs share a hash input.
    pub fn key_for(model: &str, prompt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update((model.len() as u64).to_le_bytes());
        hasher.update(model.as_bytes());
        hasher.update(prompt.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.state.lock().entries.get(key).cloned()
    }

    pub fn insert(&self, key: String, response: String) {
        let mut state = self.state.lock();
        if state.entries.insert(key.clone(), response).is_none() {
            state.insertion_order.push(key);
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.insertion_order.clear();
    }

    pub fn info(&self) -> CacheInfo {
        let state = self.state.lock();
        CacheInfo {
            cached_responses: state.entries.len(),
            sample_keys: state
                .insertion_order
                .iter()
                .take(SAMPLE_KEYS)
                .cloned()
                .collect(),
        }
    }
}
