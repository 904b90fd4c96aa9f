//! Response-capturing middleware that minifies outgoing scripts.

use axum::{
    body::{self, Body},
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Buffer the response for eligible paths and run it through the script filter.
///
/// Bodies the filter cannot minify are sent unchanged.
pub async fn minify_responses(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    if !state.filter.applies_to(&path) {
        return next.run(req).await;
    }
    tracing::info!(%path, "script filter firing");

    let response = next.run(req).await;
    let (mut parts, captured) = response.into_parts();
    let bytes = match body::to_bytes(captured, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(%path, error = %err, "failed to buffer response body");
            return ApiError::internal(err.to_string()).into_response();
        }
    };

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    tracing::debug!(?content_type, "response content type");

    let outcome = state.filter.process(content_type.as_deref(), bytes.to_vec());
    parts.headers.insert(header::CONTENT_LENGTH, HeaderValue::from(outcome.body.len()));
    Response::from_parts(parts, Body::from(outcome.body))
}
