//! Bulk Wire Types

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ErrorCause;

/// The bulk actions the mock understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Index,
    Create,
    Delete,
}

impl BulkAction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "index" => Some(BulkAction::Index),
            "create" => Some(BulkAction::Create),
            "delete" => Some(BulkAction::Delete),
            _ => None,
        }
    }

    /// Whether a payload line follows the action line.
    pub fn has_payload(&self) -> bool {
        !matches!(self, BulkAction::Delete)
    }
}

/// A parsed action line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionHeader {
    /// The action key exactly as sent; reported back in the response item.
    pub name: String,
    /// `None` for actions the mock does not implement.
    pub action: Option<BulkAction>,
    pub index: Option<String>,
    pub id: Option<String>,
}

/// Per-item result, shared by every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkItemResult {
    #[serde(rename = "_index", skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCause>,
}

impl BulkItemResult {
    pub fn failed(&self) -> bool {
        self.status >= 400
    }
}

/// One entry of the `items` array, serialized as `{"<action>": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkResponseItem {
    pub action: String,
    pub result: BulkItemResult,
}

impl Serialize for BulkResponseItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.action, &self.result)?;
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkResponse {
    pub took: u64,
    pub errors: bool,
    pub items: Vec<BulkResponseItem>,
}

impl BulkResponse {
    pub fn from_items(items: Vec<BulkResponseItem>) -> Self {
        let errors = items.iter().any(|item| item.result.failed());
        Self {
            took: 1,
            errors,
            items,
        }
    }
}
