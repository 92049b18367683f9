//! Shared Wire Types
//!
//! Small response fragments that several endpoint groups emit.

use serde::{Deserialize, Serialize};

/// Document type reported in every document-level response.
pub const DOC_TYPE: &str = "_doc";

/// Shard summary; the mock always reports a single healthy shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardsInfo {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
}

impl ShardsInfo {
    pub fn single() -> Self {
        Self {
            total: 1,
            successful: 1,
            failed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledged {
    pub acknowledged: bool,
}

impl Acknowledged {
    pub fn yes() -> Self {
        Self { acknowledged: true }
    }
}
