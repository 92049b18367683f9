//! Bulk Operation Module
//!
//! Emulates the newline-delimited bulk endpoint.
//!
//! ## Protocol
//! The body is a sequence of non-empty lines. Each entry starts with an action
//! line such as `{"index": {"_index": "logs", "_id": "1"}}`. `index` and
//! `create` (and unknown actions) are followed by exactly one payload line;
//! `delete` stands alone.
//!
//! ## Semantics
//! - Framing is checked for the whole body first. A body that cannot be split
//!   into entries is rejected with 400 and nothing is applied.
//! - Every entry is then applied independently. A failing item never stops the
//!   items after it.
//! - The envelope carries `errors: true` (and HTTP 400) as soon as any item has
//!   a status of 400 or more, even though other items may have been committed.
//!   Callers must inspect each item to learn what was stored.
//!
//! ## Submodules
//! - **`protocol`**: Action variants and response DTOs.
//! - **`parser`**: Splits the body into action/payload entries.
//! - **`executor`**: Applies entries against the `Cluster`.
//! - **`handlers`**: Axum handlers.

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod protocol;

#[cfg(test)]
mod tests;
