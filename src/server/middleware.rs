//! Request Middleware
//!
//! Fault-injection and access knobs applied to every route:
//! - **Credentials**: when `ServerOptions::credentials` is set, requests without
//!   matching HTTP Basic credentials are answered with 401.
//! - **Delay**: `ServerOptions::response_delay` is slept before the request is
//!   handled. The sleep is local to the request; other requests are unaffected.

use crate::config::ServerOptions;
use crate::error::ApiError;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

pub async fn require_credentials(
    State(options): State<Arc<ServerOptions>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(credentials) = &options.credentials {
        let header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        if let Err(reason) = credentials.verify(header) {
            tracing::warn!("Rejected {} {}: {}", request.method(), request.uri(), reason);
            return ApiError::Unauthorized(reason).into_response();
        }
    }

    next.run(request).await
}

pub async fn apply_delay(
    State(options): State<Arc<ServerOptions>>,
    request: Request,
    next: Next,
) -> Response {
    if !options.response_delay.is_zero() {
        tracing::debug!(
            "Delaying {} {} by {:?}",
            request.method(),
            request.uri(),
            options.response_delay
        );
        tokio::time::sleep(options.response_delay).await;
    }

    next.run(request).await
}
