use super::types::{FieldType, Mappings, ValidationFailure};
use serde_json::{Map, Value};

/// Checks `document` against the declared `mappings`.
///
/// Only fields present in both are inspected, in mapping declaration order.
/// The first failing field is reported; remaining fields are not examined.
pub fn validate(
    mappings: &Mappings,
    document: &Map<String, Value>,
) -> Result<(), ValidationFailure> {
    for (field, declared) in mappings {
        let Some(value) = document.get(field) else {
            continue;
        };

        if !accepts(declared, value) {
            return Err(ValidationFailure::new(field, declared.clone()));
        }
    }

    Ok(())
}

fn accepts(declared: &FieldType, value: &Value) -> bool {
    match declared {
        FieldType::Integer => match value {
            Value::String(raw) => is_integer_literal(raw),
            // JSON numbers are always finite and coerce to an integer.
            Value::Number(_) => true,
            _ => false,
        },
        FieldType::Object | FieldType::Other(_) => true,
    }
}

/// Base-10 integer with an optional sign; surrounding whitespace is ignored.
fn is_integer_literal(raw: &str) -> bool {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
