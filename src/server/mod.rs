//! HTTP Server Assembly
//!
//! Builds the axum `Router` that exposes the mock cluster. Routes are matched
//! by method and path shape; anything else, including a known path with an
//! unsupported method, answers 404 `{"error": "not_found"}`.
//!
//! Shared state is injected as `Extension`s: the `Cluster` for every handler
//! and the `ServerOptions` for the middleware and the identity endpoint.

pub mod middleware;


use crate::bulk::handlers::{handle_bulk, handle_index_bulk};
use crate::config::ServerOptions;
use crate::documents::handlers::*;
use crate::error::ApiError;
use crate::indices::handlers::*;
use crate::store::registry::Cluster;

use axum::extract::DefaultBodyLimit;
use axum::routing::{MethodRouter, delete, get, post, put};
use axum::{Extension, Router};
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}

/// Unsupported methods on a known path fall through to the 404 body.
fn routed(method_router: MethodRouter) -> MethodRouter {
    method_router.fallback(handle_not_found)
}

pub fn build_router(cluster: Arc<Cluster>, options: Arc<ServerOptions>) -> Router {
    Router::new()
        .route("/", routed(get(handle_cluster_info)))
        .route("/_all", routed(delete(handle_reset_cluster)))
        .route("/_bulk", routed(post(handle_bulk)))
        .route("/_refresh", routed(get(handle_refresh).post(handle_refresh)))
        .route(
            "/:index",
            routed(put(handle_create_index).delete(handle_delete_index)),
        )
        .route(
            "/:index/_refresh",
            routed(get(handle_refresh).post(handle_refresh)),
        )
        .route(
            "/:index/_search",
            routed(get(handle_search).post(handle_search)),
        )
        .route(
            "/:index/_settings",
            routed(get(handle_get_settings).put(handle_update_settings)),
        )
        .route("/:index/_bulk", routed(post(handle_index_bulk)))
        .route(
            "/:index/_doc",
            routed(
                post(handle_index_auto_id)
                    .put(handle_put_missing_id)
                    .get(handle_get_missing_id),
            ),
        )
        .route(
            "/:index/_doc/:id",
            routed(
                get(handle_get_document)
                    .put(handle_index_with_id)
                    .post(handle_index_with_id)
                    .delete(handle_delete_document),
            ),
        )
        .fallback(handle_not_found)
        // Bulk bodies routinely exceed axum's 2 MB default.
        .layer(DefaultBodyLimit::disable())
        .layer(axum::middleware::from_fn_with_state(
            options.clone(),
            middleware::apply_delay,
        ))
        .layer(axum::middleware::from_fn_with_state(
            options.clone(),
            middleware::require_credentials,
        ))
        .layer(Extension(cluster))
        .layer(Extension(options))
}

/// Serves `router` on an already-bound listener until the process ends.
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    axum::serve(listener, router).await?;
    Ok(())
}
