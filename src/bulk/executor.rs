use super::parser::BulkEntry;
use super::protocol::{ActionHeader, BulkAction, BulkItemResult, BulkResponse, BulkResponseItem};
use crate::documents::service::{parse_source, write_document};
use crate::error::ApiError;
use crate::protocol::DOC_TYPE;
use crate::store::registry::Cluster;
use crate::store::types::WriteMode;

/// Applies every entry in order and assembles the multi-status response.
///
/// `default_index` comes from the request path (`/{index}/_bulk`) and is used
/// for items whose action line names no `_index`.
pub fn execute_bulk(
    cluster: &Cluster,
    default_index: Option<&str>,
    entries: Vec<BulkEntry<'_>>,
) -> BulkResponse {
    let items: Vec<BulkResponseItem> = entries
        .into_iter()
        .map(|entry| apply_entry(cluster, default_index, entry))
        .collect();

    let response = BulkResponse::from_items(items);
    let failed = response.items.iter().filter(|i| i.result.failed()).count();
    tracing::debug!(
        "Bulk request applied: {} items, {} failed",
        response.items.len(),
        failed
    );
    response
}

fn apply_entry(
    cluster: &Cluster,
    default_index: Option<&str>,
    entry: BulkEntry<'_>,
) -> BulkResponseItem {
    let BulkEntry { header, payload } = entry;

    let index = header
        .index
        .clone()
        .or_else(|| default_index.map(str::to_string));

    let result = match (header.action, index) {
        (_, None) => error_result(None, &header, ApiError::InvalidIndex),
        (None, Some(index)) => error_result(
            Some(index),
            &header,
            ApiError::IllegalArgument(format!("unsupported bulk action [{}]", header.name)),
        ),
        (Some(BulkAction::Delete), Some(index)) => apply_delete(cluster, index, &header),
        (Some(action), Some(index)) => {
            let mode = match action {
                BulkAction::Create => WriteMode::CreateOnly,
                _ => WriteMode::Upsert,
            };
            apply_write(cluster, index, &header, payload.unwrap_or_default(), mode)
        }
    };

    BulkResponseItem {
        action: header.name,
        result,
    }
}

fn apply_delete(cluster: &Cluster, index: String, header: &ActionHeader) -> BulkItemResult {
    // Bulk deletes resolve the index like any other bulk item, creating it if absent.
    let state = cluster.get_or_create(&index);

    let removed = header
        .id
        .as_deref()
        .and_then(|id| state.documents().remove(id));

    let (status, result) = match removed {
        Some(_) => (200, "deleted"),
        None => (404, "not_found"),
    };

    BulkItemResult {
        index: Some(index),
        doc_type: Some(DOC_TYPE.to_string()),
        id: header.id.clone(),
        version: None,
        result: Some(result.to_string()),
        status,
        error: None,
    }
}

fn apply_write(
    cluster: &Cluster,
    index: String,
    header: &ActionHeader,
    payload: &str,
    mode: WriteMode,
) -> BulkItemResult {
    let outcome = parse_source(payload.as_bytes())
        .map_err(|e| match e {
            // A payload line that is not JSON cannot be mapped.
            ApiError::Parse(reason) => ApiError::MapperParsing(reason),
            other => other,
        })
        .and_then(|source| write_document(cluster, &index, header.id.clone(), source, mode));

    match outcome {
        Ok(indexed) => BulkItemResult {
            doc_type: Some(DOC_TYPE.to_string()),
            version: Some(indexed.version()),
            result: Some(indexed.result().to_string()),
            status: indexed.status_code(),
            id: Some(indexed.receipt.id),
            index: Some(indexed.index),
            error: None,
        },
        Err(err) => error_result(Some(index), header, err),
    }
}

fn error_result(index: Option<String>, header: &ActionHeader, err: ApiError) -> BulkItemResult {
    let result = match err {
        ApiError::VersionConflict { .. } => Some("conflict".to_string()),
        _ => None,
    };

    BulkItemResult {
        doc_type: index.as_ref().map(|_| DOC_TYPE.to_string()),
        index,
        id: header.id.clone(),
        version: None,
        result,
        status: err.status().as_u16(),
        error: Some(err.cause()),
    }
}
