//! Mock Search Cluster Library
//!
//! An in-memory stand-in for a document-indexing search cluster, used as a
//! test double by log-shipper integration tests. It speaks enough of the HTTP
//! API (single documents, bulk, mappings, settings, refresh, search) that the
//! client under test cannot tell it apart from a real cluster.
//!
//! ## Architecture Modules
//! - **`store`**: Per-index document maps, versioning, the global write order and
//!   the index registry (`Cluster`).
//! - **`mapping`**: Declared field types and the validator run before every write.
//! - **`documents`**: Single-document index/get/delete.
//! - **`bulk`**: Newline-delimited bulk requests with per-item success/failure.
//! - **`indices`**: Index creation/deletion, settings, search, refresh, reset.
//! - **`server`**: Router assembly and request middleware.
//! - **`config`**: Command-line/environment configuration and runtime options.
//! - **`error`**: The error taxonomy rendered as structured JSON bodies.
//! - **`extract`**: Path and query extractors that reject with that taxonomy.

pub mod bulk;
pub mod config;
pub mod documents;
pub mod error;
pub mod extract;
pub mod indices;
pub mod mapping;
pub mod protocol;
pub mod server;
pub mod store;
