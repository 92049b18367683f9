use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;

/// Declared type of a mapped field.
///
/// Only `Integer` constrains values today; every other declared type is
/// kept so it can be reported back, but accepts anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    /// A property declared without a `type`, i.e. an object with sub-properties.
    Object,
    Other(String),
}

impl FieldType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "integer" => FieldType::Integer,
            "object" => FieldType::Object,
            other => FieldType::Other(other.to_string()),
        }
    }

    /// Reads the type out of a single property definition.
    pub fn from_spec(spec: &Map<String, Value>) -> Self {
        match spec.get("type") {
            Some(Value::String(name)) => Self::from_name(name),
            _ => FieldType::Object,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Object => "object",
            FieldType::Other(name) => name,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name -> declared type, for one index, in declaration order.
pub type Mappings = IndexMap<String, FieldType>;

/// The first field of a document that did not satisfy its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub declared_type: FieldType,
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(field: &str, declared_type: FieldType) -> Self {
        let reason = format!(
            "failed to parse field [{}] of type [{}]",
            field, declared_type
        );
        Self {
            field: field.to_string(),
            declared_type,
            reason,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for ValidationFailure {}
