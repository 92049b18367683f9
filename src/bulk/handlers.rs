use super::executor::execute_bulk;
use super::parser::parse_bulk;
use super::protocol::BulkResponse;
use crate::error::ApiError;
use crate::extract::ApiPath;
use crate::store::registry::Cluster;

use axum::body::Bytes;
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
};
use std::sync::Arc;

/// `POST /_bulk`.
pub async fn handle_bulk(
    Extension(cluster): Extension<Arc<Cluster>>,
    body: Bytes,
) -> Result<(StatusCode, Json<BulkResponse>), ApiError> {
    run_bulk(&cluster, None, &body)
}

/// `POST /{index}/_bulk`: `{index}` is the default target for items that name none.
pub async fn handle_index_bulk(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath(index): ApiPath<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<BulkResponse>), ApiError> {
    run_bulk(&cluster, Some(&index), &body)
}

fn run_bulk(
    cluster: &Cluster,
    default_index: Option<&str>,
    body: &[u8],
) -> Result<(StatusCode, Json<BulkResponse>), ApiError> {
    let text = std::str::from_utf8(body)
        .map_err(|_| ApiError::MalformedBulk("body is not valid UTF-8".to_string()))?;

    let entries = match parse_bulk(text) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("Rejected bulk request: {}", err);
            return Err(err);
        }
    };

    let response = execute_bulk(cluster, default_index, entries);
    let status = if response.errors {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response)))
}
