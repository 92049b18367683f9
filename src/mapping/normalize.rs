use super::types::{FieldType, Mappings};
use serde_json::Value;

/// Flattens a `mappings` body into a field lookup.
///
/// The first `properties` object found on a branch supplies the fields of
/// that branch; objects without one are searched recursively so that the
/// legacy `{"<type>": {"properties": {...}}}` layout is understood too.
pub fn normalize_mappings(body: &Value) -> Mappings {
    let mut mappings = Mappings::new();
    visit(body, &mut mappings);
    mappings
}

fn visit(node: &Value, out: &mut Mappings) {
    // Arrays and scalars never declare properties.
    let Value::Object(map) = node else {
        return;
    };

    match map.get("properties") {
        Some(Value::Object(properties)) => {
            for (field, spec) in properties {
                if let Value::Object(spec) = spec {
                    out.insert(field.clone(), FieldType::from_spec(spec));
                }
            }
        }
        Some(_) => {}
        None => {
            for child in map.values() {
                visit(child, out);
            }
        }
    }
}
