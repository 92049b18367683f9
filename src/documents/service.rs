use crate::error::ApiError;
use crate::mapping::validator::validate;
use crate::store::registry::Cluster;
use crate::store::types::{Source, StoredDocument, WriteMode, WriteReceipt};

use serde_json::Value;

/// A committed write, as reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    pub index: String,
    pub receipt: WriteReceipt,
}

impl IndexedDocument {
    pub fn id(&self) -> &str {
        &self.receipt.id
    }

    pub fn version(&self) -> u64 {
        self.receipt.version
    }

    pub fn result(&self) -> &'static str {
        self.receipt.result()
    }

    /// 201 for the first write of an id, 200 for later ones.
    pub fn status_code(&self) -> u16 {
        if self.receipt.created() { 201 } else { 200 }
    }
}

/// Parses a request body into a document source.
///
/// An empty body is an empty document. Anything that is valid JSON but not
/// an object cannot be mapped and is rejected like a mapping failure.
pub fn parse_source(body: &[u8]) -> Result<Source, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Source::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::MapperParsing(
            "failed to parse, document is empty or not an object".to_string(),
        )),
        Err(e) => Err(ApiError::Parse(format!("failed to parse request body: {}", e))),
    }
}

/// Validates and stores `source` in `index_name`, creating the index if needed.
///
/// Validation runs before the index lock is taken; a rejected document
/// leaves the index untouched.
pub fn write_document(
    cluster: &Cluster,
    index_name: &str,
    id: Option<String>,
    source: Source,
    mode: WriteMode,
) -> Result<IndexedDocument, ApiError> {
    let index = cluster.get_or_create(index_name);

    validate(&index.mappings(), &source)?;

    let receipt = index.documents().write(id, source, mode)?;

    tracing::debug!(
        "Indexed [{}][{}] version {} order {}",
        index_name,
        receipt.id,
        receipt.version,
        receipt.order
    );

    Ok(IndexedDocument {
        index: index_name.to_string(),
        receipt,
    })
}

/// Index (create or replace) a single document.
pub fn index_document(
    cluster: &Cluster,
    index_name: &str,
    id: Option<String>,
    source: Source,
) -> Result<IndexedDocument, ApiError> {
    write_document(cluster, index_name, id, source, WriteMode::Upsert)
}

/// Fetches a document. Unknown indices are not created.
pub fn get_document(cluster: &Cluster, index_name: &str, id: &str) -> Option<StoredDocument> {
    cluster.get(index_name)?.documents().get(id)
}

/// Removes a document, returning it if it existed.
pub fn delete_document(cluster: &Cluster, index_name: &str, id: &str) -> Option<StoredDocument> {
    let removed = cluster.get(index_name)?.documents().remove(id);
    if removed.is_some() {
        tracing::debug!("Deleted [{}][{}]", index_name, id);
    }
    removed
}
