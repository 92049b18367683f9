//! Index-Level Request and Response Types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::protocol::ShardsInfo;
use crate::store::types::Source;

/// Default page size of `_search`.
pub const DEFAULT_SEARCH_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub cluster_name: String,
    pub cluster_uuid: String,
    pub tagline: String,
    pub version: VersionInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub number: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub took: u64,
    pub timed_out: bool,
    pub hits: HitsEnvelope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitsEnvelope {
    pub total: TotalHits,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalHits {
    pub value: usize,
    pub relation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version")]
    pub version: u64,
    #[serde(rename = "_source")]
    pub source: Source,
}

/// Body of `GET /{index}/_settings` for one index: `{"settings": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSettings {
    pub settings: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIndexResponse {
    pub acknowledged: bool,
    pub shards_acknowledged: bool,
    pub index: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(rename = "_shards")]
    pub shards: ShardsInfo,
}
