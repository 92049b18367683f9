use super::types::{OrderClock, Source, StoreError, StoredDocument, WriteMode, WriteReceipt};
use crate::mapping::types::Mappings;

use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Documents of one index, guarded by a single lock.
///
/// The lock also covers the auto-id counter so that id assignment and the
/// version/order bookkeeping of a write form one critical section.
pub struct DocumentStore {
    inner: Mutex<DocumentMap>,
    clock: Arc<OrderClock>,
}

struct DocumentMap {
    docs: HashMap<String, StoredDocument>,
    next_auto_id: u64,
}

impl DocumentStore {
    pub fn new(clock: Arc<OrderClock>) -> Self {
        Self {
            inner: Mutex::new(DocumentMap {
                docs: HashMap::new(),
                next_auto_id: 1,
            }),
            clock,
        }
    }

    /// Stores `source` under `id`, assigning the next auto id when `id` is `None`.
    ///
    /// Auto ids are the decimal form of a per-index counter that only grows,
    /// so an auto id is never handed out twice, even after its document is deleted.
    pub fn write(
        &self,
        id: Option<String>,
        source: Source,
        mode: WriteMode,
    ) -> Result<WriteReceipt, StoreError> {
        let mut inner = self.inner.lock();

        let id = match id {
            Some(id) => id,
            None => {
                let assigned = inner.next_auto_id.to_string();
                inner.next_auto_id += 1;
                assigned
            }
        };

        let version = match inner.docs.get(&id) {
            Some(existing) if mode == WriteMode::CreateOnly => {
                return Err(StoreError::VersionConflict {
                    id,
                    current_version: existing.version,
                });
            }
            Some(existing) => existing.version + 1,
            None => 1,
        };

        let order = self.clock.tick();
        inner.docs.insert(
            id.clone(),
            StoredDocument {
                source,
                version,
                order,
            },
        );

        Ok(WriteReceipt { id, version, order })
    }

    pub fn get(&self, id: &str) -> Option<StoredDocument> {
        self.inner.lock().docs.get(id).cloned()
    }

    pub fn remove(&self, id: &str) -> Option<StoredDocument> {
        self.inner.lock().docs.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().docs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All documents sorted by ascending write order.
    pub fn ordered(&self) -> Vec<(String, StoredDocument)> {
        let mut docs: Vec<(String, StoredDocument)> = self
            .inner
            .lock()
            .docs
            .iter()
            .map(|(id, doc)| (id.clone(), doc.clone()))
            .collect();

        docs.sort_by_key(|(_, doc)| doc.order);
        docs
    }

    pub fn next_auto_id(&self) -> u64 {
        self.inner.lock().next_auto_id
    }
}

/// Full state of one index: documents plus declared mappings and settings.
pub struct IndexState {
    name: String,
    documents: DocumentStore,
    mappings: RwLock<Mappings>,
    settings: RwLock<Map<String, Value>>,
}

impl IndexState {
    pub fn new(name: &str, clock: Arc<OrderClock>) -> Self {
        Self {
            name: name.to_string(),
            documents: DocumentStore::new(clock),
            mappings: RwLock::new(Mappings::new()),
            settings: RwLock::new(Map::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    pub fn mappings(&self) -> Mappings {
        self.mappings.read().clone()
    }

    pub fn set_mappings(&self, mappings: Mappings) {
        *self.mappings.write() = mappings;
    }

    pub fn settings(&self) -> Map<String, Value> {
        self.settings.read().clone()
    }

    pub fn replace_settings(&self, settings: Map<String, Value>) {
        *self.settings.write() = settings;
    }

    /// Merges `partial` into the current settings, key by key.
    pub fn merge_settings(&self, partial: Map<String, Value>) {
        let mut settings = self.settings.write();
        for (key, value) in partial {
            settings.insert(key, value);
        }
    }
}
