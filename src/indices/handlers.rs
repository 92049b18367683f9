use super::protocol::*;
use super::service;
use crate::config::{DEFAULT_TAGLINE, ServerOptions};
use crate::error::ApiError;
use crate::extract::{ApiPath, ApiQuery};
use crate::protocol::{Acknowledged, DOC_TYPE, ShardsInfo};
use crate::store::registry::Cluster;

use axum::body::Bytes;
use axum::{Json, extract::Extension};
use std::collections::HashMap;
use std::sync::Arc;

/// Version string reported by `GET /`, recent enough for clients to pick the typeless API.
const MOCK_VERSION: &str = "7.17.0";

/// `GET /`.
pub async fn handle_cluster_info(
    Extension(options): Extension<Arc<ServerOptions>>,
) -> Json<ClusterInfo> {
    Json(ClusterInfo {
        cluster_name: options.cluster_name.clone(),
        cluster_uuid: options.cluster_uuid.clone(),
        tagline: DEFAULT_TAGLINE.to_string(),
        version: VersionInfo {
            number: MOCK_VERSION.to_string(),
        },
    })
}

/// `PUT /{index}` with an optional `{mappings, settings}` body.
pub async fn handle_create_index(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath(index): ApiPath<String>,
    body: Bytes,
) -> Result<Json<CreateIndexResponse>, ApiError> {
    let body = service::parse_body(&body)?;
    service::create_index(&cluster, &index, &body);

    Ok(Json(CreateIndexResponse {
        acknowledged: true,
        shards_acknowledged: true,
        index,
    }))
}

/// `DELETE /{index}`.
pub async fn handle_delete_index(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath(index): ApiPath<String>,
) -> Json<Acknowledged> {
    service::delete_index(&cluster, &index);
    Json(Acknowledged::yes())
}

/// `DELETE /_all`: drops every index, used between test cases.
pub async fn handle_reset_cluster(
    Extension(cluster): Extension<Arc<Cluster>>,
) -> Json<Acknowledged> {
    cluster.reset();
    Json(Acknowledged::yes())
}

/// `GET /{index}/_settings`.
pub async fn handle_get_settings(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath(index): ApiPath<String>,
) -> Json<HashMap<String, IndexSettings>> {
    let settings = service::get_settings(&cluster, &index);

    let mut response = HashMap::new();
    response.insert(index, IndexSettings { settings });
    Json(response)
}

/// `PUT /{index}/_settings`.
pub async fn handle_update_settings(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath(index): ApiPath<String>,
    body: Bytes,
) -> Result<Json<Acknowledged>, ApiError> {
    let body = service::parse_body(&body)?;
    service::update_settings(&cluster, &index, body)?;
    Ok(Json(Acknowledged::yes()))
}

/// `GET|POST /{index}/_search?size=N`. Any query body is ignored.
pub async fn handle_search(
    Extension(cluster): Extension<Arc<Cluster>>,
    ApiPath(index): ApiPath<String>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Json<SearchResponse> {
    let size = params.size.unwrap_or(DEFAULT_SEARCH_SIZE);
    let result = service::search(&cluster, &index, size);

    tracing::debug!(
        "Search [{}] size {} -> {} of {} hits",
        index,
        size,
        result.hits.len(),
        result.total
    );

    let hits = result
        .hits
        .into_iter()
        .map(|(id, doc)| SearchHit {
            index: index.clone(),
            doc_type: DOC_TYPE.to_string(),
            id,
            version: doc.version,
            source: doc.source,
        })
        .collect();

    Json(SearchResponse {
        took: 1,
        timed_out: false,
        hits: HitsEnvelope {
            total: TotalHits {
                value: result.total,
                relation: "eq".to_string(),
            },
            hits,
        },
    })
}

/// `GET|POST /_refresh` and `/{index}/_refresh`: a no-op that always succeeds.
pub async fn handle_refresh() -> Json<RefreshResponse> {
    Json(RefreshResponse {
        shards: ShardsInfo::single(),
    })
}
