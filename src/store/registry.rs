//! Index Registry
//!
//! Maps index names to their shared state. The registry map is the coarse
//! lock of the two-level scheme: it is held only while an entry is looked up,
//! inserted or removed, never while documents are written.

use super::memory::IndexState;
use super::types::OrderClock;

use dashmap::DashMap;
use std::sync::Arc;

/// The whole mock cluster.
///
/// Constructed once per server and shared with every handler.
pub struct Cluster {
    indices: DashMap<String, Arc<IndexState>>,
    clock: Arc<OrderClock>,
}

impl Cluster {
    /// Creates a new, empty cluster.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns the index named `name`, creating an empty one if needed.
    pub fn get_or_create(&self, name: &str) -> Arc<IndexState> {
        if let Some(index) = self.indices.get(name) {
            return index.value().clone();
        }

        self.indices
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::info!("Created index [{}]", name);
                Arc::new(IndexState::new(name, self.clock.clone()))
            })
            .value()
            .clone()
    }

    /// Looks up an index without creating it.
    pub fn get(&self, name: &str) -> Option<Arc<IndexState>> {
        self.indices.get(name).map(|entry| entry.value().clone())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Removes an index. Returns whether it existed; absence is not an error.
    pub fn delete(&self, name: &str) -> bool {
        let removed = self.indices.remove(name).is_some();
        if removed {
            tracing::info!("Deleted index [{}]", name);
        }
        removed
    }

    /// Drops every index and rewinds the global order counter.
    pub fn reset(&self) {
        let count = self.indices.len();
        self.indices.clear();
        self.clock.reset();
        tracing::info!("Cluster reset ({} indices dropped)", count);
    }

    pub fn index_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .indices
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn clock(&self) -> &OrderClock {
        &self.clock
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Self {
            indices: DashMap::new(),
            clock: Arc::new(OrderClock::new()),
        }
    }
}
