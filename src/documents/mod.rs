//! Single-Document Operations
//!
//! Index, create, get and delete of one document at a time.
//!
//! ## Write Path
//! 1. Resolve (or lazily create) the target index.
//! 2. Validate the body against the index mappings. A failure is reported as
//!    `mapper_parsing_exception` and nothing is stored.
//! 3. Assign an id if none was given, compute the next version, stamp the global
//!    order and store, all under the index lock.
//!
//! ## Submodules
//! - **`protocol`**: Response DTOs.
//! - **`service`**: Operations against the `Cluster`, free of HTTP types.
//! - **`handlers`**: Axum handlers mapping HTTP requests onto the service.

pub mod handlers;
pub mod protocol;
pub mod service;
