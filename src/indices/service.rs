use crate::error::ApiError;
use crate::mapping::normalize::normalize_mappings;
use crate::store::registry::Cluster;
use crate::store::types::StoredDocument;

use serde_json::{Map, Value};

/// Documents of one index in ascending write order.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub total: usize,
    pub hits: Vec<(String, StoredDocument)>,
}

/// Parses an optional JSON body; an empty body reads as `{}`.
pub fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::Parse(format!("failed to parse request body: {}", e)))
}

/// Registers mappings and settings for `name`, creating the index if absent.
///
/// Mappings are replaced only when the body declares at least one field.
/// A `settings` object replaces the current settings.
pub fn create_index(cluster: &Cluster, name: &str, body: &Value) {
    let index = cluster.get_or_create(name);

    if let Some(raw) = body.get("mappings") {
        let mappings = normalize_mappings(raw);
        if !mappings.is_empty() {
            tracing::info!("Index [{}] mapped {} field(s)", name, mappings.len());
            index.set_mappings(mappings);
        }
    }

    if let Some(Value::Object(settings)) = body.get("settings") {
        index.replace_settings(settings.clone());
    }
}

/// Always succeeds, whether or not the index existed.
pub fn delete_index(cluster: &Cluster, name: &str) {
    cluster.delete(name);
}

/// Returns the settings of `name`, creating the index if it is unknown.
pub fn get_settings(cluster: &Cluster, name: &str) -> Map<String, Value> {
    cluster.get_or_create(name).settings()
}

/// Merges settings keys into `name`.
///
/// Clients send either `{"index": {...}}` or the bare settings object; the
/// `index` wrapper is unwrapped when present.
pub fn update_settings(cluster: &Cluster, name: &str, body: Value) -> Result<(), ApiError> {
    let Value::Object(mut body) = body else {
        return Err(ApiError::IllegalArgument(
            "settings body must be an object".to_string(),
        ));
    };

    let partial = match body.remove("index") {
        Some(Value::Object(inner)) => inner,
        Some(other) => {
            body.insert("index".to_string(), other);
            body
        }
        None => body,
    };

    cluster.get_or_create(name).merge_settings(partial);
    Ok(())
}

/// The first `size` documents of `name` in ascending write order.
pub fn search(cluster: &Cluster, name: &str, size: usize) -> SearchResult {
    let Some(index) = cluster.get(name) else {
        return SearchResult::default();
    };

    let mut hits = index.documents().ordered();
    let total = hits.len();
    hits.truncate(size);

    SearchResult { total, hits }
}
