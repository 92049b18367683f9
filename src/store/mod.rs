//! In-Memory Cluster State
//!
//! Holds every index of the mock cluster and the documents inside them.
//! Nothing here knows about HTTP; handlers in other modules translate the
//! outcomes into responses.
//!
//! ## Core Concepts
//! - **Registry**: `Cluster` maps index names to shared `IndexState`s. Indices are
//!   created lazily on first write and removed only by explicit delete or reset.
//! - **Two-level locking**: the registry map guards creation and deletion of
//!   entries; each index carries its own lock over its documents and auto-id counter,
//!   so writers to different indices never contend.
//! - **Ordering**: a single `OrderClock` shared by all indices stamps every write,
//!   giving search results a stable total order across the whole cluster.
//! - **Versioning**: each write to an id bumps its version; read-existing,
//!   next-version, order stamp and store happen in one critical section.

pub mod memory;
pub mod registry;
pub mod types;
