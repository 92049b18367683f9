//! Index Management Module
//!
//! Everything that acts on an index as a whole rather than on one document:
//! creation with mappings/settings, deletion, settings read/merge, search,
//! refresh, cluster reset and the cluster identity document.
//!
//! ## Notable behavior
//! - Reading `_settings` of an unknown index creates it, like a real cluster
//!   with auto-creation enabled.
//! - Search never creates an index; an unknown one simply has no hits.
//! - Refresh always succeeds; there is nothing to refresh in memory.

pub mod handlers;
pub mod protocol;
pub mod service;
