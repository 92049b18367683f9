use super::protocol::{ActionHeader, BulkAction};
use crate::error::ApiError;

use serde_json::{Map, Value};

/// One action line and, for actions that take one, its payload line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkEntry<'a> {
    pub header: ActionHeader,
    pub payload: Option<&'a str>,
}

/// Splits a bulk body into entries.
///
/// Blank lines are ignored. The whole body is rejected if an action line is not
/// a single-key JSON object, or if an action that needs a payload is the last line.
/// Payload lines are not parsed here; a bad payload only fails its own item.
pub fn parse_bulk(body: &str) -> Result<Vec<BulkEntry<'_>>, ApiError> {
    let mut lines = body.lines().filter(|line| !line.trim().is_empty());
    let mut entries = Vec::new();

    while let Some(line) = lines.next() {
        let header = parse_action_line(line)?;

        let needs_payload = header.action.map_or(true, |action| action.has_payload());
        let payload = if needs_payload {
            match lines.next() {
                Some(payload) => Some(payload),
                None => {
                    return Err(ApiError::MalformedBulk(format!(
                        "action [{}] is missing its document line",
                        header.name
                    )));
                }
            }
        } else {
            None
        };

        entries.push(BulkEntry { header, payload });
    }

    Ok(entries)
}

fn parse_action_line(line: &str) -> Result<ActionHeader, ApiError> {
    let object: Map<String, Value> = serde_json::from_str(line)
        .map_err(|e| ApiError::MalformedBulk(format!("invalid action line: {}", e)))?;

    if object.len() != 1 {
        return Err(ApiError::MalformedBulk(format!(
            "action line must hold exactly one action, found {}",
            object.len()
        )));
    }

    let Some((name, meta)) = object.into_iter().next() else {
        return Err(ApiError::MalformedBulk("empty action line".to_string()));
    };

    let Value::Object(meta) = meta else {
        return Err(ApiError::MalformedBulk(format!(
            "metadata of action [{}] must be an object",
            name
        )));
    };

    Ok(ActionHeader {
        action: BulkAction::from_name(&name),
        // An empty `_index` names no index, while an empty `_id` is still an id.
        index: string_field(&meta, "_index").filter(|index| !index.is_empty()),
        id: string_field(&meta, "_id"),
        name,
    })
}

/// Reads a metadata field that clients send either as a string or a number.
fn string_field(meta: &Map<String, Value>, key: &str) -> Option<String> {
    match meta.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
