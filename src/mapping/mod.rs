//! Field Mapping Module
//!
//! Declared field types for an index and the checks applied to incoming
//! documents before they are stored.
//!
//! ## Overview
//! Mappings arrive as part of an index-creation body in whatever shape the
//! client uses (`{"properties": {...}}` or the legacy typed form
//! `{"_doc": {"properties": {...}}}`). They are flattened into a
//! field-name -> [`types::FieldType`] lookup once, at registration time.
//!
//! Validation is permissive by default: fields that are not declared pass,
//! and an index without mappings accepts every document.
//!
//! ## Submodules
//! - **`types`**: Field types, mapping tables and the validation failure.
//! - **`normalize`**: Recursive walk that extracts declared properties.
//! - **`validator`**: Checks a document against a mapping table (fail-fast).

pub mod normalize;
pub mod types;
pub mod validator;
