use super::protocol::{DeleteResponse, GetResponse, WriteResponse};
use super::service::{self, IndexedDocument};
use crate::error::ApiError;
use crate::extract::ApiPath;
use crate::protocol::{DOC_TYPE, ShardsInfo};
use crate::store::registry::Cluster;

use axum::body::Bytes;
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
};
use std::sync::Arc;

fn write_response(indexed: IndexedDocument) -> (StatusCode, Json<WriteResponse>) {
    let status = indexed.status_code();
    let response = WriteResponse {
        result: indexed.result().to_string(),
        version: indexed.version(),
        id: indexed.receipt.id,
        index: indexed.index,
        doc_type: DOC_TYPE.to_string(),
        shards: ShardsInfo::single(),
        status,
    };

    let code = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
    (code, Json(response))
}

/// `POST /{index}/_doc`: index with an auto-assigned id.
pub async fn handle_index_auto_id(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath(index): ApiPath<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<WriteResponse>), ApiError> {
    let source = service::parse_source(&body)?;
    let indexed = service::index_document(&cluster, &index, None, source)?;
    Ok(write_response(indexed))
}

/// `PUT|POST /{index}/_doc/{id}`.
pub async fn handle_index_with_id(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath((index, id)): ApiPath<(String, String)>,
    body: Bytes,
) -> Result<(StatusCode, Json<WriteResponse>), ApiError> {
    let source = service::parse_source(&body)?;
    let indexed = service::index_document(&cluster, &index, Some(id), source)?;
    Ok(write_response(indexed))
}

/// `PUT /{index}/_doc` has nowhere to put the document.
pub async fn handle_put_missing_id(ApiPath(index): ApiPath<String>) -> ApiError {
    tracing::warn!("PUT to [{}]/_doc without a document id", index);
    ApiError::IllegalArgument("missing document id".to_string())
}

/// `GET /{index}/_doc/{id}`.
pub async fn handle_get_document(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath((index, id)): ApiPath<(String, String)>,
) -> (StatusCode, Json<GetResponse>) {
    match service::get_document(&cluster, &index, &id) {
        Some(doc) => (
            StatusCode::OK,
            Json(GetResponse {
                index,
                doc_type: DOC_TYPE.to_string(),
                id: Some(id),
                version: Some(doc.version),
                found: true,
                source: Some(doc.source),
            }),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(GetResponse {
                index,
                doc_type: DOC_TYPE.to_string(),
                id: Some(id),
                version: None,
                found: false,
                source: None,
            }),
        ),
    }
}

/// `GET /{index}/_doc` names no document and never finds one.
pub async fn handle_get_missing_id(
    ApiPath(index): ApiPath<String>,
) -> (StatusCode, Json<GetResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(GetResponse {
            index,
            doc_type: DOC_TYPE.to_string(),
            id: None,
            version: None,
            found: false,
            source: None,
        }),
    )
}

/// `DELETE /{index}/_doc/{id}`. A missing document is a 404 outcome, not an error.
pub async fn handle_delete_document(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath((index, id)): ApiPath<(String, String)>,
) -> (StatusCode, Json<DeleteResponse>) {
    let (status, result) = match service::delete_document(&cluster, &index, &id) {
        Some(_) => (StatusCode::OK, "deleted"),
        None => (StatusCode::NOT_FOUND, "not_found"),
    };

    (
        status,
        Json(DeleteResponse {
            index,
            doc_type: DOC_TYPE.to_string(),
            id,
            result: result.to_string(),
            shards: ShardsInfo::single(),
        }),
    )
}
