use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque document body as sent by the client.
pub type Source = Map<String, Value>;

/// A stored document.
///
/// Records are replaced wholesale on every write and never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredDocument {
    pub source: Source,
    /// Starts at 1 and grows by one with every write to the same id.
    pub version: u64,
    /// Global write sequence number, shared across all indices.
    pub order: u64,
}

/// How a write treats an id that already holds a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the existing document and bump its version.
    Upsert,
    /// Refuse to touch an existing document.
    CreateOnly,
}

/// What a successful write did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReceipt {
    pub id: String,
    pub version: u64,
    pub order: u64,
}

impl WriteReceipt {
    pub fn created(&self) -> bool {
        self.version == 1
    }

    /// `"created"` for a first write, `"updated"` afterwards.
    pub fn result(&self) -> &'static str {
        if self.created() { "created" } else { "updated" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("document [{id}] already exists at version {current_version}")]
    VersionConflict { id: String, current_version: u64 },
}

/// Cluster-wide monotonically increasing write counter.
#[derive(Debug, Default)]
pub struct OrderClock(AtomicU64);

impl OrderClock {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Advances the clock and returns the new value (first call yields 1).
    pub fn tick(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }
}
