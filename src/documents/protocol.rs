//! Single-Document Response Types

use serde::{Deserialize, Serialize};

use crate::protocol::ShardsInfo;
use crate::store::types::Source;

/// Answer to an index/create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: u64,
    /// `"created"` or `"updated"`.
    pub result: String,
    #[serde(rename = "_shards")]
    pub shards: ShardsInfo,
    /// Mirrors the HTTP status (201 created, 200 updated).
    pub status: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    pub found: bool,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    /// `"deleted"` or `"not_found"`.
    pub result: String,
    #[serde(rename = "_shards")]
    pub shards: ShardsInfo,
}
